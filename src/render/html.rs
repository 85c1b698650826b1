//! Materialization of page chunks into page fragments

use crate::document::Page;
use crate::layout::PageChunk;
use crate::markup::{escape_html, translate_fragment, ContentFormat};
use crate::text::normalize_newlines;

/// Content of the single page shown for an otherwise empty document.
pub const PLACEHOLDER_HTML: &str =
    "<p class=\"placeholder\">Start typing, or open a document to begin.</p>";

/// Materialize every chunk as a page, translating its lines per the
/// document format.
///
/// Zero chunks yields exactly one placeholder page; rendering never
/// fails.
pub fn render_pages(lines: &[String], chunks: &[PageChunk], format: ContentFormat) -> Vec<Page> {
    if chunks.is_empty() {
        return vec![Page::new(1, PLACEHOLDER_HTML.to_string())];
    }

    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let content = translate_fragment(&lines[chunk.line_range.clone()], format);
            Page::new(i + 1, content)
        })
        .collect()
}

/// Prepare clipboard text for insertion into an editable region.
///
/// Pasted content always enters as plain text: normalized, escaped and
/// `<br>`-joined, never as raw clipboard HTML.
pub fn prepare_paste(text: &str) -> String {
    escaped_lines(text)
}

/// The single unstyled flowing block of the continuous view.
pub fn flow_block_html(text: &str) -> String {
    format!(
        "<div class=\"flow\" contenteditable=\"true\">{}</div>",
        escaped_lines(text)
    )
}

fn escaped_lines(text: &str) -> String {
    let normalized = normalize_newlines(text);
    let parts: Vec<String> = normalized
        .split('\n')
        .map(|line| escape_html(line).into_owned())
        .collect();
    parts.join("<br>")
}
