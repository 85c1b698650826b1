//! Folio: a plain-text/Markdown-to-paginated-HTML engine
//!
//! The algorithmic core of a browser word processor:
//! - Text intake normalizes line endings and groups lines into paragraphs
//! - Markup translation turns paragraphs into HTML block fragments
//! - Layout estimates page capacity and partitions lines into page chunks
//! - Rendering materializes chunks as editable page fragments
//! - The `Editor` façade reconciles the paginated and continuous views
//!
//! Everything in here is synchronous and pure-function-like: text in,
//! page fragments out. The only UI-coupled layer is the `wasm` bridge.

pub mod document;
pub mod layout;
pub mod markup;
pub mod render;
pub mod text;
pub mod wasm;

pub use document::{Document, Page, ViewMode};
pub use layout::{paginate, CapacityModel, PageChunk, PageMetrics};
pub use markup::{extract_text, ContentFormat};
pub use render::{prepare_paste, render_pages, RenderError};
pub use text::{normalize_newlines, DocumentStats, LineSequence, Paragraph};
pub use wasm::WasmEditor;

use log::{debug, warn};

/// The main editing surface: a document plus the page geometry used to
/// lay it out.
///
/// Every content change rebuilds the page sequence from scratch; there is
/// no incremental cross-page reflow. Each pass runs to completion before
/// returning, which is the accepted latency cost for large documents.
pub struct Editor {
    pub document: Document,
    metrics: PageMetrics,
}

impl Editor {
    pub fn new(metrics: PageMetrics) -> Self {
        Self {
            document: Document::new(),
            metrics,
        }
    }

    pub fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    /// Load freshly decoded file content, replacing everything.
    ///
    /// Resets to the paginated view and clears the dirty flag.
    pub fn load(&mut self, raw: &str, format: ContentFormat) {
        let normalized = normalize_newlines(raw);
        let seq = LineSequence::from_text(&normalized);
        self.document.set_view_mode(ViewMode::Paginated);
        self.document.set_flow_text(String::new());
        self.layout_lines(seq.as_slice(), format);
        self.document.set_active_page(1);
        self.document.mark_saved();
    }

    /// Bulk content replacement with pre-built markup (template insert).
    ///
    /// The markup is paginated verbatim, without a translation pass, and
    /// the document becomes dirty.
    pub fn apply_template(&mut self, html: &str) {
        let normalized = normalize_newlines(html);
        let seq = LineSequence::from_text(&normalized);
        self.document.set_view_mode(ViewMode::Paginated);
        self.document.set_flow_text(String::new());
        self.layout_lines(seq.as_slice(), ContentFormat::Html);
        self.document.set_active_page(1);
        self.document.mark_modified();
    }

    /// Re-run pagination over the current page contents.
    ///
    /// Contents are treated as already-translated markup, so formatting
    /// applied by templates survives the rebuild. The continuous view has
    /// no pagination to rebuild.
    pub fn rebuild(&mut self) {
        match self.document.view_mode() {
            ViewMode::Paginated => {
                let content: Vec<String> = self
                    .document
                    .pages()
                    .iter()
                    .map(|page| page.content().to_string())
                    .collect();
                let seq = LineSequence::from_text(&content.join("\n"));
                self.layout_lines(seq.as_slice(), ContentFormat::Html);
            }
            ViewMode::Continuous => {
                debug!("rebuild skipped: continuous view has no pagination");
            }
        }
    }

    /// Switch between the paginated and continuous views.
    ///
    /// Paginated → continuous flattens every page's visible text in index
    /// order (footer labels excluded) and discards the pages. Continuous
    /// → paginated re-runs the whole pipeline over the flow text as plain
    /// text. Rich formatting does not survive the flatten; that loss is
    /// part of the contract, not a bug to fix here.
    pub fn toggle_view_mode(&mut self) {
        match self.document.view_mode() {
            ViewMode::Paginated => {
                let text = self.flatten_text();
                self.document.set_pages(Vec::new());
                self.document.set_flow_text(text);
                self.document.set_view_mode(ViewMode::Continuous);
                debug!("switched to continuous view");
            }
            ViewMode::Continuous => {
                let text = self.document.flow_text().to_string();
                self.document.set_view_mode(ViewMode::Paginated);
                self.document.set_flow_text(String::new());
                let seq = LineSequence::from_text(&text);
                self.layout_lines(seq.as_slice(), ContentFormat::PlainText);
                self.document.set_active_page(1);
            }
        }
    }

    /// The document's visible text in the current view.
    pub fn flatten_text(&self) -> String {
        match self.document.view_mode() {
            ViewMode::Paginated => {
                let parts: Vec<String> = self
                    .document
                    .pages()
                    .iter()
                    .map(|page| extract_text(page.content()))
                    .collect();
                parts.join("\n")
            }
            ViewMode::Continuous => self.document.flow_text().to_string(),
        }
    }

    /// Serialized HTML of the current view, for the save/export boundary.
    pub fn view_html(&self) -> String {
        match self.document.view_mode() {
            ViewMode::Paginated => {
                let parts: Vec<String> = self
                    .document
                    .pages()
                    .iter()
                    .map(Page::container_html)
                    .collect();
                parts.join("\n")
            }
            ViewMode::Continuous => render::flow_block_html(self.document.flow_text()),
        }
    }

    /// Write back the content of one page's editable region.
    ///
    /// Touches only that page; other pages and their indices stay
    /// untouched. Out-of-range syncs are ignored with a warning.
    pub fn sync_page_content(&mut self, index: usize, html: &str) -> bool {
        if self.document.view_mode() != ViewMode::Paginated {
            warn!("ignoring page sync while in continuous view");
            return false;
        }
        match self.document.page_mut(index) {
            Some(page) => {
                if page.set_content(html.to_string()) {
                    self.document.mark_modified();
                }
                self.document.set_active_page(index);
                true
            }
            None => {
                warn!("ignoring sync for out-of-range page {index}");
                false
            }
        }
    }

    /// Write back the content of the continuous flow region.
    pub fn sync_continuous_content(&mut self, text: &str) {
        if self.document.view_mode() != ViewMode::Continuous {
            warn!("ignoring flow sync while in paginated view");
            return;
        }
        if self.document.flow_text() != text {
            self.document.set_flow_text(text.to_string());
            self.document.mark_modified();
        }
    }

    /// Input-event side effect: the document is dirty and the page that
    /// fired the event becomes the active one.
    pub fn notify_input(&mut self, page_index: usize) {
        self.document.mark_modified();
        self.document.set_active_page(page_index);
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    pub fn status_label(&self) -> String {
        self.document.status_label()
    }

    pub fn stats(&self) -> DocumentStats {
        text::document_stats(&self.flatten_text())
    }

    /// One full pass: paginate the line sequence, materialize the pages,
    /// replace the document's page tree wholesale.
    fn layout_lines(&mut self, lines: &[String], format: ContentFormat) {
        let capacity = self.metrics.capacity();
        let chunks = paginate(lines, capacity.max_lines_per_page);
        let pages = render_pages(lines, &chunks, format);
        debug!(
            "layout pass: {} lines over {} pages (capacity {})",
            lines.len(),
            pages.len(),
            capacity.max_lines_per_page
        );
        self.document.set_pages(pages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> Editor {
        Editor::new(PageMetrics::default())
    }

    /// Metrics small enough to force multi-page layouts in tests.
    /// The half-line slack keeps the floor() away from float edges.
    fn tiny_metrics(lines_per_page: usize) -> PageMetrics {
        PageMetrics {
            page_height_mm: MARGIN_ALLOWANCE_TEST + lines_per_page as f32 + 0.5,
            margin_allowance_mm: MARGIN_ALLOWANCE_TEST,
            font_size_px: 1.0 / layout::PX_TO_MM,
            line_height_multiplier: 1.0,
        }
    }

    const MARGIN_ALLOWANCE_TEST: f32 = 10.0;

    #[test]
    fn test_single_line_round_trip() {
        let mut editor = editor();
        editor.load("hello world", ContentFormat::PlainText);
        assert_eq!(editor.document.pages().len(), 1);
        assert_eq!(editor.flatten_text(), "hello world");
        assert!(!editor.document.is_modified());
    }

    #[test]
    fn test_empty_document_gets_placeholder_page() {
        let mut editor = editor();
        editor.load("", ContentFormat::PlainText);
        assert_eq!(editor.document.pages().len(), 1);
        assert!(!extract_text(editor.document.pages()[0].content()).is_empty());
        assert_eq!(editor.status_label(), "Page 1 of 1");
    }

    #[test]
    fn test_multi_page_layout_and_status() {
        let mut editor = Editor::new(tiny_metrics(2));
        editor.load("a\nb\nc\nd\ne", ContentFormat::PlainText);
        assert_eq!(editor.document.pages().len(), 3);
        assert_eq!(editor.status_label(), "Page 1 of 3");
        editor.notify_input(3);
        assert_eq!(editor.status_label(), "Page 3 of 3");
        assert!(editor.document.is_modified());
    }

    #[test]
    fn test_view_mode_round_trip_plain_text() {
        // blank separator sits inside the first chunk, so the flatten is
        // exact and the second pass reproduces the same pages
        let mut editor = Editor::new(tiny_metrics(4));
        let text = "alpha\nbeta\n\ngamma\ndelta";
        editor.load(text, ContentFormat::PlainText);
        let pages_before: Vec<String> = editor
            .document
            .pages()
            .iter()
            .map(|p| p.content().to_string())
            .collect();

        editor.toggle_view_mode();
        assert_eq!(editor.document.view_mode(), ViewMode::Continuous);
        assert!(editor.document.pages().is_empty());
        assert_eq!(editor.document.flow_text(), text);

        editor.toggle_view_mode();
        assert_eq!(editor.document.view_mode(), ViewMode::Paginated);
        let pages_after: Vec<String> = editor
            .document
            .pages()
            .iter()
            .map(|p| p.content().to_string())
            .collect();
        assert_eq!(pages_after, pages_before);
        assert_eq!(editor.flatten_text(), text);
    }

    #[test]
    fn test_view_toggle_drops_rich_formatting() {
        // flattening reads visible text, so markdown styling is lost on
        // the way back; this is the documented lossy edge
        let mut editor = editor();
        editor.load("# Title\n\nbody **bold**", ContentFormat::Markdown);
        assert!(editor.document.pages()[0].content().contains("<h1>"));

        editor.toggle_view_mode();
        editor.toggle_view_mode();

        let content = editor.document.pages()[0].content().to_string();
        assert!(!content.contains("<h1>"));
        assert!(!content.contains("<strong>"));
        assert_eq!(editor.flatten_text(), "Title\n\nbody bold");
    }

    #[test]
    fn test_trailing_blank_separator_collapses_at_page_boundary() {
        // a blank separator that lands at the tail of a page vanishes
        // from the flattened text; known behavior, not silently fixed
        let mut editor = Editor::new(tiny_metrics(2));
        editor.load("a\nb\n\nc", ContentFormat::PlainText);
        assert_eq!(editor.flatten_text(), "a\nb\nc");
    }

    #[test]
    fn test_template_marks_modified_and_survives_rebuild() {
        let mut editor = editor();
        editor.apply_template("<h2>Invoice</h2>\n<p>Amount due:</p>");
        assert!(editor.document.is_modified());
        assert!(editor.document.pages()[0].content().contains("<h2>"));

        editor.rebuild();
        assert!(editor.document.pages()[0].content().contains("<h2>"));
    }

    #[test]
    fn test_sync_page_content_isolated_per_page() {
        let mut editor = Editor::new(tiny_metrics(2));
        editor.load("a\nb\nc\nd", ContentFormat::PlainText);
        let first_before = editor.document.pages()[0].content().to_string();

        assert!(editor.sync_page_content(2, "<p>edited</p>"));
        assert!(editor.document.is_modified());
        assert_eq!(editor.document.pages()[0].content(), first_before);
        assert_eq!(editor.document.pages()[1].content(), "<p>edited</p>");

        assert!(!editor.sync_page_content(99, "<p>nope</p>"));
    }

    #[test]
    fn test_noop_sync_keeps_document_clean() {
        let mut editor = editor();
        editor.load("hello", ContentFormat::PlainText);
        let content = editor.document.pages()[0].content().to_string();
        editor.sync_page_content(1, &content);
        assert!(!editor.document.is_modified());
    }

    #[test]
    fn test_stats_follow_content() {
        let mut editor = editor();
        editor.load("one two three\nfour", ContentFormat::PlainText);
        let stats = editor.stats();
        assert_eq!(stats.words, 4);
        assert_eq!(stats.lines, 2);
    }

    #[test]
    fn test_load_resets_continuous_view() {
        let mut editor = editor();
        editor.load("first", ContentFormat::PlainText);
        editor.toggle_view_mode();
        editor.load("second", ContentFormat::PlainText);
        assert_eq!(editor.document.view_mode(), ViewMode::Paginated);
        assert_eq!(editor.flatten_text(), "second");
    }

    #[test]
    fn test_view_html_excludes_labels_from_flatten_only() {
        let mut editor = editor();
        editor.load("hello", ContentFormat::PlainText);
        assert!(editor.view_html().contains("Page 1"));
        assert!(!editor.flatten_text().contains("Page 1"));
    }
}
