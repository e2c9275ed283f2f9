//! LabeledField - a label beside a filled, bordered text field.

use crate::backend::Font;
use crate::primitives::Color;

use super::base::Border;
use super::column::Column;
use super::container::{BoxNode, Container};
use super::length::{Alignment, CrossAxisAlignment, EdgeInset, Length, MainAxisAlignment};
use super::modifiers::{Align, Expanded, Padding};
use super::node::{Node, Widget};
use super::row::Row;
use super::text::Text;

/// Where the label sits relative to the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelPosition {
    TopLeft,
    TopCenter,
    TopRight,
    #[default]
    Left,
    Right,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// A form field: label widget, spacer, and a full-width field holding
/// padded, aligned text.
///
/// ```ignore
/// let field = LabeledField::new(Text::new("Name"))
///     .text("Ada Lovelace")
///     .position(LabelPosition::TopLeft);
/// let column = Column::new().push(field);
/// ```
#[derive(Debug)]
pub struct LabeledField {
    label: Node,
    text: String,
    font: Option<Font>,
    fill_color: Color,
    text_alignment: Alignment,
    position: LabelPosition,
    border: Border,
    space: f32,
    content_padding: EdgeInset,
}

impl LabeledField {
    pub fn new(label: impl Into<Node>) -> Self {
        Self {
            label: label.into(),
            text: String::new(),
            font: None,
            fill_color: Color::WHITE,
            text_alignment: Alignment::LeftMiddle,
            position: LabelPosition::Left,
            border: Border::zero(),
            space: 5.0,
            content_padding: EdgeInset::new(2.0, 1.0, 1.0, 2.0),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn text_alignment(mut self, alignment: Alignment) -> Self {
        self.text_alignment = alignment;
        self
    }

    pub fn position(mut self, position: LabelPosition) -> Self {
        self.position = position;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// Gap between label and field.
    pub fn space(mut self, space: f32) -> Self {
        self.space = space;
        self
    }

    pub fn content_padding(mut self, padding: EdgeInset) -> Self {
        self.content_padding = padding;
        self
    }

    fn field(&mut self) -> Container {
        let mut text = Text::new(std::mem::take(&mut self.text));
        if let Some(font) = self.font.take() {
            text = text.font(font);
        }
        Container::new()
            .width(Length::Fill)
            .color(self.fill_color)
            .border(self.border)
            .child(Align::new(
                self.text_alignment,
                Padding::new(self.content_padding, text),
            ))
    }
}

impl Widget for LabeledField {
    fn build(mut self) -> Node {
        let field = self.field();
        let vertical_space = BoxNode::new().height(self.space);
        let horizontal_space = BoxNode::new().width(self.space);
        let label = self.label;

        let stacked = |cross: CrossAxisAlignment| {
            Column::new()
                .main_axis_alignment(MainAxisAlignment::Start)
                .cross_axis_alignment(cross)
        };
        let beside = || Row::new().main_axis_alignment(MainAxisAlignment::Start);

        match self.position {
            LabelPosition::TopLeft => stacked(CrossAxisAlignment::Start)
                .push(label)
                .push(vertical_space)
                .push(field)
                .into(),
            LabelPosition::TopCenter => stacked(CrossAxisAlignment::Center)
                .push(label)
                .push(vertical_space)
                .push(field)
                .into(),
            LabelPosition::TopRight => stacked(CrossAxisAlignment::End)
                .push(label)
                .push(vertical_space)
                .push(field)
                .into(),
            LabelPosition::Left => beside()
                .push(label)
                .push(horizontal_space)
                .push(Expanded::new(field))
                .into(),
            LabelPosition::Right => beside()
                .push(Expanded::new(field))
                .push(horizontal_space)
                .push(label)
                .into(),
            LabelPosition::BottomLeft => stacked(CrossAxisAlignment::Start)
                .push(field)
                .push(vertical_space)
                .push(label)
                .into(),
            LabelPosition::BottomCenter => stacked(CrossAxisAlignment::Center)
                .push(field)
                .push(vertical_space)
                .push(label)
                .into(),
            LabelPosition::BottomRight => stacked(CrossAxisAlignment::End)
                .push(field)
                .push(vertical_space)
                .push(label)
                .into(),
        }
    }
}
