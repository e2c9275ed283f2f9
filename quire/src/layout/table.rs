//! Table and MultiPageTable - fixed-height rows over flex-weighted columns.
//!
//! Column widths are `(available - margins) * flex / total_flex`, recomputed
//! on every layout call. Each cell is drawn as a [`Container`] sized to its
//! column width and the row height. A cell keeps its own left and top border
//! sides; the right side becomes the column divider and the bottom side the
//! row divider unless the cell overrides them, which is how adjacent cells
//! are visually merged.
//!
//! A row that does not fit raises [`LayoutError::Overflow`]. [`Table`]
//! answers by dropping that row and every row after it. [`MultiPageTable`]
//! answers by charging the rest of the physical page, moving the row to the
//! top of the next page, and remembering the break so the draw pass replays
//! it exactly.

use tracing::debug;

use crate::error::{LayoutError, LayoutResult};
use crate::primitives::{Color, Point, Rect, Size};

use super::base::{Border, BorderSide};
use super::constraints::BoxConstraints;
use super::container::Container;
use super::context::{DrawContext, LayoutContext, ParentKind};
use super::flex::EPS;
use super::node::Node;

// =========================================================================
// Columns
// =========================================================================

/// Width weight, trailing margin, and right-hand divider of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableColumn {
    pub flex: u32,
    pub margin: f32,
    pub divider: BorderSide,
}

impl Default for TableColumn {
    fn default() -> Self {
        Self {
            flex: 1,
            margin: 0.0,
            divider: BorderSide::default(),
        }
    }
}

impl TableColumn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flex(mut self, flex: u32) -> Self {
        self.flex = flex;
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn divider(mut self, divider: BorderSide) -> Self {
        self.divider = divider;
        self
    }
}

/// Split `available` width between `columns` by flex weight after removing
/// their margins.
pub fn column_widths(columns: &[TableColumn], available: f32) -> LayoutResult<Vec<f32>> {
    if columns.is_empty() {
        return Err(LayoutError::InvalidConfig("table has no columns".into()));
    }
    let total_flex: u32 = columns.iter().map(|c| c.flex).sum();
    if total_flex == 0 {
        return Err(LayoutError::InvalidConfig(
            "table columns have a total flex of zero".into(),
        ));
    }
    let margins: f32 = columns.iter().map(|c| c.margin).sum();
    let content = (available - margins).max(0.0);
    Ok(columns
        .iter()
        .map(|c| content * c.flex as f32 / total_flex as f32)
        .collect())
}

// =========================================================================
// Cells and rows
// =========================================================================

/// One table cell.
#[derive(Debug)]
pub struct Cell {
    child: Option<Node>,
    border: Border,
    color: Option<Color>,
    override_column_divider: bool,
    override_row_divider: bool,
    // Layout results
    container: Container,
    offset: Point,
    size: Size,
}

impl Cell {
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            child: Some(child.into()),
            ..Self::empty()
        }
    }

    pub fn empty() -> Self {
        Self {
            child: None,
            border: Border::zero(),
            color: None,
            override_column_divider: false,
            override_row_divider: false,
            container: Container::new(),
            offset: Point::ORIGIN,
            size: Size::ZERO,
        }
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// Fill color. Without one the row background is used.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Keep the cell's own right side instead of the column divider.
    pub fn override_column_divider(mut self, yes: bool) -> Self {
        self.override_column_divider = yes;
        self
    }

    /// Keep the cell's own bottom side instead of the row divider.
    pub fn override_row_divider(mut self, yes: bool) -> Self {
        self.override_row_divider = yes;
        self
    }

    /// Border drawn for this cell under `column` in a row with `row_divider`.
    pub fn merged_border(&self, column: &TableColumn, row_divider: BorderSide) -> Border {
        Border {
            left: self.border.left,
            top: self.border.top,
            right: if self.override_column_divider {
                self.border.right
            } else {
                column.divider
            },
            bottom: if self.override_row_divider {
                self.border.bottom
            } else {
                row_divider
            },
        }
    }

    fn layout(
        &mut self,
        ctx: LayoutContext<'_>,
        origin: Point,
        size: Size,
        border: Border,
        background: Color,
    ) -> LayoutResult<Size> {
        // The child moves into the container on the first pass.
        let mut container = std::mem::take(&mut self.container);
        if let Some(child) = self.child.take() {
            container = container.child(child);
        }
        self.container = container
            .width(size.width)
            .height(size.height)
            .border(border)
            .color(self.color.unwrap_or(background));

        self.size = self.container.layout(ctx, BoxConstraints::from_size(size))?;
        self.offset = origin;
        Ok(self.size)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, row_origin: Point) {
        let origin = row_origin.resolve(self.offset);
        self.container.draw(ctx, Rect::from_origin_size(origin, self.size));
    }
}

/// A fixed-height table row.
#[derive(Debug)]
pub struct TableRow {
    cells: Vec<Cell>,
    divider: BorderSide,
    height: f32,
    margin: f32,
    background: Color,
    // Layout result
    offset: Point,
}

impl TableRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            divider: BorderSide::default(),
            height: 26.0,
            margin: 0.0,
            background: Color::WHITE,
            offset: Point::ORIGIN,
        }
    }

    /// Bottom side drawn under every cell that does not override it.
    pub fn divider(mut self, divider: BorderSide) -> Self {
        self.divider = divider;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Space after the row in a single-page table.
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn get_height(&self) -> f32 {
        self.height
    }

    /// Offset inside the table from the last layout pass.
    pub fn offset(&self) -> Point {
        self.offset
    }

    fn layout(
        &mut self,
        ctx: LayoutContext<'_>,
        columns: &[TableColumn],
        widths: &[f32],
        max_width: f32,
        max_height: f32,
    ) -> LayoutResult<Size> {
        if self.cells.len() > columns.len() {
            return Err(LayoutError::InvalidConfig(format!(
                "row has {} cells but the table has {} columns",
                self.cells.len(),
                columns.len()
            )));
        }
        if self.height > max_height + EPS {
            return Err(LayoutError::overflow(
                "TableRow",
                format!("row needs {} but {max_height} is left", self.height),
            ));
        }

        let mut x = 0.0;
        for ((cell, column), width) in self.cells.iter_mut().zip(columns).zip(widths) {
            let border = cell.merged_border(column, self.divider);
            cell.layout(
                ctx,
                Point::new(x, 0.0),
                Size::new(*width, self.height),
                border,
                self.background,
            )?;
            x += width + column.margin;
        }
        Ok(Size::new(max_width, self.height))
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, origin: Point) {
        for cell in &self.cells {
            cell.draw(ctx, origin);
        }
    }
}

// =========================================================================
// Table
// =========================================================================

/// A table confined to the space it is offered. Rows that do not fit are
/// dropped.
#[derive(Debug)]
pub struct Table {
    columns: Vec<TableColumn>,
    rows: Vec<TableRow>,
    border: Border,
    // Layout result
    visible: usize,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            border: Border::zero()
                .left(BorderSide::default())
                .top(BorderSide::default()),
            visible: 0,
        }
    }

    pub fn row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = TableRow>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Place `row` before every data row.
    pub fn heading(mut self, row: TableRow) -> Self {
        self.rows.insert(0, row);
        self
    }

    /// Outer border, drawn after the rows.
    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn get_rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Rows kept by the last layout pass.
    pub fn visible_rows(&self) -> usize {
        self.visible
    }

    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        let widths = column_widths(&self.columns, constraints.max_width)?;
        let row_ctx = ctx.child_of(ParentKind::Other);

        let total_rows = self.rows.len();
        let mut y = 0.0;
        let mut remaining = constraints.max_height;
        self.visible = 0;
        for row in self.rows.iter_mut() {
            match row.layout(row_ctx, &self.columns, &widths, constraints.max_width, remaining) {
                Ok(size) => {
                    row.offset = Point::new(0.0, y);
                    y += size.height + row.margin;
                    remaining -= size.height + row.margin;
                    self.visible += 1;
                }
                Err(e) if e.is_overflow() => {
                    debug!(
                        kept = self.visible,
                        dropped = total_rows - self.visible,
                        "table truncated"
                    );
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        // A trailing margin never pushes the table past its offer.
        Ok(constraints.constrain(Size::new(constraints.max_width, y)))
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        if self.visible == 0 {
            return;
        }
        let origin = bounds.origin();
        for row in &self.rows[..self.visible] {
            row.draw(ctx, origin.resolve(row.offset));
        }
        self.border.draw(ctx.backend, bounds);
    }
}

// =========================================================================
// MultiPageTable
// =========================================================================

/// A table that continues across physical pages. Rows never split.
#[derive(Debug)]
pub struct MultiPageTable {
    columns: Vec<TableColumn>,
    rows: Vec<TableRow>,
    // Layout result: whether each row starts a new physical page.
    breaks_before: Vec<bool>,
}

impl MultiPageTable {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            breaks_before: Vec::new(),
        }
    }

    pub fn row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = TableRow>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Place `row` before every data row.
    pub fn heading(mut self, row: TableRow) -> Self {
        self.rows.insert(0, row);
        self
    }

    pub fn get_rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Per-row page-break decisions from the last layout pass.
    pub fn breaks_before(&self) -> &[bool] {
        &self.breaks_before
    }

    /// Number of page breaks the draw pass will issue.
    pub fn page_breaks(&self) -> usize {
        self.breaks_before.iter().filter(|b| **b).count()
    }

    /// Height is the total span including the unused tail of every page
    /// the table leaves.
    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        let widths = column_widths(&self.columns, constraints.max_width)?;
        let row_ctx = ctx.child_of(ParentKind::Other);
        let page_height = ctx.page_height.unwrap_or(constraints.max_height);
        let max_width = constraints.max_width;

        let mut remaining = page_height - ctx.page_offset;
        let mut total = 0.0;
        let mut y = 0.0;
        self.breaks_before = vec![false; self.rows.len()];

        for (i, row) in self.rows.iter_mut().enumerate() {
            let size = match row.layout(row_ctx, &self.columns, &widths, max_width, remaining) {
                Ok(size) => size,
                Err(e) if e.is_overflow() => {
                    total += remaining.max(0.0);
                    remaining = page_height;
                    y = 0.0;
                    self.breaks_before[i] = true;
                    debug!(row = i, "table row moved to the next page");
                    row.layout(row_ctx, &self.columns, &widths, max_width, remaining)?
                }
                Err(e) => return Err(e),
            };
            row.offset = Point::new(0.0, y);
            y += size.height;
            total += size.height;
            remaining -= size.height;
        }
        Ok(Size::new(max_width, total))
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        let mut origin = bounds.origin();
        for (row, brk) in self.rows.iter().zip(&self.breaks_before) {
            if *brk {
                origin = ctx.break_page();
            }
            row.draw(ctx, origin.resolve(row.offset));
        }
    }
}
