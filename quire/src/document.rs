//! Pages and documents.
//!
//! A [`Document`] is a list of [`Page`]s sharing one [`DocumentConfig`].
//! Rendering lays out every page against its content area first, then draws
//! them in order, so a layout failure on any page leaves the backend
//! untouched.

use tracing::{debug, warn};

use crate::backend::{DrawBackend, TextMeasure};
use crate::config::DocumentConfig;
use crate::error::{ConfigError, LayoutError, LayoutResult};
use crate::layout::{BoxConstraints, DrawContext, LayoutContext, LayoutTree, Node};
use crate::primitives::Point;

/// One logical page. Content that spans pages (a
/// [`MultiPage`](crate::layout::MultiPage) holding a
/// [`MultiPageTable`](crate::layout::MultiPageTable)) may produce several
/// physical pages from it.
#[derive(Debug)]
pub struct Page {
    tree: LayoutTree,
    margin: Option<f32>,
}

impl Page {
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            tree: LayoutTree::new(child),
            margin: None,
        }
    }

    /// Override the document margin for this page.
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn root(&self) -> &Node {
        self.tree.root()
    }
}

/// An ordered set of pages rendered onto one backend.
#[derive(Debug)]
pub struct Document {
    pages: Vec<Page>,
    config: DocumentConfig,
}

impl Document {
    pub fn new(config: DocumentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            pages: Vec::new(),
            config,
        })
    }

    pub fn page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    pub fn push_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Lay out and draw every page, then finish the document.
    pub fn render<B: DrawBackend>(&mut self, backend: &mut B) -> LayoutResult<()> {
        self.layout(&*backend)?;
        self.draw(backend)
    }

    /// Lay out every page against its content area.
    pub fn layout(&mut self, measure: &dyn TextMeasure) -> LayoutResult<()> {
        for (i, page) in self.pages.iter_mut().enumerate() {
            let margin = page.margin.unwrap_or(self.config.margin);
            let content = self.config.page.content_size(margin);
            let ctx = LayoutContext::new(measure)
                .with_default_font(&self.config.default_font)
                .with_page_height(content.height);
            let size = page.tree.layout(ctx, BoxConstraints::from_size(content))?;
            debug!(page = i, width = size.width, height = size.height, "page laid out");
        }
        Ok(())
    }

    /// Draw every laid-out page. Page breaks return to the content origin.
    ///
    /// Nothing is drawn unless every page is laid out.
    pub fn draw<B: DrawBackend>(&self, backend: &mut B) -> LayoutResult<()> {
        if let Some(i) = self.pages.iter().position(|p| !p.tree.is_laid_out()) {
            warn!(page = i, "document draw requested before every page was laid out");
            return Err(LayoutError::NotLaidOut);
        }
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                backend.begin_page();
            }
            let margin = page.margin.unwrap_or(self.config.margin);
            let origin = Point::new(margin, margin);
            let mut ctx = DrawContext::new(&mut *backend, origin);
            page.tree.draw(&mut ctx, origin)?;
        }
        backend.save();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageSize;
    use crate::layout::{BoxNode, Column, MainAxisAlignment, Text};
    use crate::recorder::{DrawCommand, RecordingBackend};

    fn small_config() -> DocumentConfig {
        DocumentConfig {
            page: PageSize {
                width: 200.0,
                height: 110.0,
            },
            ..DocumentConfig::default()
        }
    }

    #[test]
    fn test_pages_drawn_at_margin() {
        let mut doc = Document::new(small_config())
            .unwrap()
            .page(Page::new(Text::new("one")))
            .page(Page::new(Text::new("two")).margin(10.0));
        let mut backend = RecordingBackend::new();
        doc.render(&mut backend).unwrap();

        assert_eq!(backend.page_count(), 2);
        assert!(backend.is_saved());
        let origins: Vec<Point> = backend
            .commands()
            .filter_map(|c| match c {
                DrawCommand::Text { origin, .. } => Some(*origin),
                _ => None,
            })
            .collect();
        assert_eq!(origins, vec![Point::new(5.0, 12.5), Point::new(10.0, 17.5)]);
    }

    #[test]
    fn test_layout_failure_draws_nothing() {
        let mut doc = Document::new(small_config()).unwrap().page(Page::new(
            Column::new()
                .main_axis_alignment(MainAxisAlignment::Start)
                .push(BoxNode::new().height(80.0))
                .push(BoxNode::new().height(80.0)),
        ));
        let mut backend = RecordingBackend::new();
        let err = doc.render(&mut backend).unwrap_err();
        assert!(matches!(err, LayoutError::Overflow { .. }));
        assert!(!backend.is_saved());
        assert_eq!(backend.commands().count(), 0);
    }

    #[test]
    fn test_draw_without_layout_is_refused() {
        let doc = Document::new(small_config())
            .unwrap()
            .page(Page::new(Text::new("x")));
        let mut backend = RecordingBackend::new();
        assert!(matches!(doc.draw(&mut backend), Err(LayoutError::NotLaidOut)));
    }

    #[test]
    fn test_partial_layout_draws_no_page() {
        let mut doc = Document::new(small_config())
            .unwrap()
            .page(Page::new(Text::new("fits")))
            .page(Page::new(
                Column::new()
                    .push(BoxNode::new().height(80.0))
                    .push(BoxNode::new().height(80.0)),
            ));
        let mut backend = RecordingBackend::new();
        assert!(doc.render(&mut backend).unwrap_err().is_overflow());
        assert!(doc.pages()[0].tree.is_laid_out());

        assert!(matches!(doc.draw(&mut backend), Err(LayoutError::NotLaidOut)));
        assert_eq!(backend.page_count(), 1);
        assert_eq!(backend.commands().count(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DocumentConfig {
            margin: 100.0,
            ..small_config()
        };
        assert!(matches!(Document::new(config), Err(ConfigError::Invalid(_))));
    }
}
