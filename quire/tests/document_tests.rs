//! Integration tests for whole documents rendered onto a recording backend.
//!
//! Most tests use a 200 x 110 page with the default 5pt margin, leaving a
//! 190 x 100 content area.

use std::io::Write;

use quire::layout::{
    Border, BorderSide, Cell, Column, Divider, EdgeInset, Image, LabelPosition, LabeledField,
    MainAxisAlignment, MultiPage, MultiPageTable, Padding, Table, TableColumn, TableRow, Text,
};
use quire::{
    Color, Document, DocumentConfig, DrawCommand, ImageStore, Page, PageSize, Point,
    RecordingBackend,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn small_page() -> DocumentConfig {
    DocumentConfig {
        page: PageSize {
            width: 200.0,
            height: 110.0,
        },
        ..DocumentConfig::default()
    }
}

fn numbered_rows(n: usize, height: f32) -> impl Iterator<Item = TableRow> {
    (0..n).map(move |i| TableRow::new(vec![Cell::new(Text::new(format!("row {i}")))]).height(height))
}

/// Render `doc` and return the backend.
fn render(mut doc: Document) -> RecordingBackend {
    init_tracing();
    let mut backend = RecordingBackend::new();
    let result = doc.render(&mut backend);
    assert!(result.is_ok(), "render failed: {:?}", result.err());
    assert!(backend.is_saved());
    backend
}

fn texts_on(backend: &RecordingBackend, page: usize) -> Vec<String> {
    backend.pages()[page]
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

// =========================================================================
// Pagination
// =========================================================================

#[test]
fn test_multi_page_table_break_count() {
    // Ten rows of 30 on a 100pt content area: three rows per page.
    let table = MultiPageTable::new(vec![TableColumn::new()]).rows(numbered_rows(10, 30.0));
    let doc = Document::new(small_page())
        .unwrap()
        .page(Page::new(MultiPage::new().push(table)));
    let backend = render(doc);

    assert_eq!(backend.page_count(), 4);
    let per_page: Vec<usize> = (0..4).map(|p| texts_on(&backend, p).len()).collect();
    assert_eq!(per_page, vec![3, 3, 3, 1]);
}

#[test]
fn test_rows_never_split_across_pages() {
    let table = MultiPageTable::new(vec![TableColumn::new()]).rows(numbered_rows(9, 25.0));
    let doc = Document::new(small_page())
        .unwrap()
        .page(Page::new(MultiPage::new().push(table)));
    let backend = render(doc);

    // floor(9 * 25 / 100) breaks.
    assert_eq!(backend.page_count(), 3);
    for page in backend.pages() {
        for cmd in page {
            if let DrawCommand::FillRect { origin, size, .. } = cmd {
                assert!(origin.y >= 5.0 && origin.y + size.height <= 105.0);
            }
        }
    }
}

#[test]
fn test_multi_page_flow_resumes_after_table() {
    let doc = Document::new(small_page()).unwrap().page(Page::new(
        MultiPage::new()
            .push(Text::new("heading"))
            .push(MultiPageTable::new(vec![TableColumn::new()]).rows(numbered_rows(10, 30.0)))
            .push(Text::new("end")),
    ));
    let backend = render(doc);

    assert_eq!(backend.page_count(), 4);
    assert_eq!(texts_on(&backend, 0), vec!["heading", "row 0", "row 1", "row 2"]);
    assert_eq!(texts_on(&backend, 3), vec!["row 9", "end"]);

    // Last page: row 9 fills 0..30, so "end" starts at y = 30.
    let end = backend.pages()[3].iter().find_map(|c| match c {
        DrawCommand::Text { text, origin, .. } if text == "end" => Some(*origin),
        _ => None,
    });
    assert_eq!(end, Some(Point::new(5.0, 42.5)));
}

#[test]
fn test_single_page_table_truncates_silently() {
    let table = Table::new(vec![TableColumn::new(), TableColumn::new().flex(2)])
        .heading(TableRow::new(vec![Cell::new(Text::new("name")), Cell::new(Text::new("value"))]))
        .rows(numbered_rows(10, 30.0));
    let doc = Document::new(small_page()).unwrap().page(Page::new(table));
    let backend = render(doc);

    assert_eq!(backend.page_count(), 1);
    // Heading (26) plus two rows fit in 100.
    assert_eq!(texts_on(&backend, 0), vec!["name", "value", "row 0", "row 1"]);
}

// =========================================================================
// Whole documents
// =========================================================================

#[test]
fn test_form_document_on_a4() {
    let mut store = ImageStore::new();
    let logo = store.insert(image::RgbaImage::new(40, 30));

    let body = Column::new()
        .main_axis_alignment(MainAxisAlignment::Start)
        .push(Image::from_store(&store, logo).unwrap())
        .push(Padding::new(EdgeInset::symmetric(0.0, 4.0), Text::new("Invoice")))
        .push(Divider::new())
        .push(LabeledField::new(Text::new("Customer")).text("ACME Corp"))
        .push(
            LabeledField::new(Text::new("Notes"))
                .text("net 30")
                .position(LabelPosition::TopLeft)
                .border(Border::all(BorderSide::new(1.0, Color::GREY))),
        );
    let doc = Document::new(DocumentConfig::default())
        .unwrap()
        .page(Page::new(body))
        .page(Page::new(Text::new("Terms and conditions apply.")));
    let backend = render(doc);

    assert_eq!(backend.page_count(), 2);
    let first = texts_on(&backend, 0);
    for expected in ["Invoice", "Customer", "ACME Corp", "Notes", "net 30"] {
        assert!(first.iter().any(|t| t == expected), "missing {expected}");
    }
    assert!(backend.pages()[0]
        .iter()
        .any(|c| matches!(c, DrawCommand::Image { image, .. } if *image == logo)));
    assert_eq!(texts_on(&backend, 1), vec!["Terms and conditions apply."]);
}

#[test]
fn test_config_file_drives_layout() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"page": {{"width": 200.0, "height": 110.0}}, "margin": 10.0,
            "default_font": {{"family": "Courier", "size": 20.0}}}}"#
    )
    .unwrap();

    let config = DocumentConfig::load(file.path()).unwrap();
    assert_eq!(config.content_size().height, 90.0);

    let doc = Document::new(config).unwrap().page(Page::new(Text::new("big")));
    let backend = render(doc);
    let run = backend.commands().find_map(|c| match c {
        DrawCommand::Text { origin, font, .. } => Some((*origin, font.size)),
        _ => None,
    });
    // Ascent at 20pt is 15.
    assert_eq!(run, Some((Point::new(10.0, 25.0), 20.0)));
}
