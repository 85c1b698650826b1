//! Markup translation between raw text and HTML block fragments

mod escape;
mod extract;
mod markdown;
mod plain;

pub use escape::escape_html;
pub use extract::extract_text;
pub use markdown::translate_markdown;
pub use plain::translate_plain;

use crate::text::split_paragraphs;

/// Content format detected by the loading collaborator (extension tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    PlainText,
    Markdown,
    /// Already-translated markup; inserted verbatim, no translation pass.
    Html,
}

impl ContentFormat {
    /// Map a loader tag or file extension onto a format.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "plain" | "txt" | "text" => Some(Self::PlainText),
            "markdown" | "md" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

/// Translate one chunk's worth of source lines into an HTML fragment.
///
/// Block fragments are joined with `\n` so the fragment stays
/// line-splittable for later passes.
pub fn translate_fragment(lines: &[String], format: ContentFormat) -> String {
    match format {
        ContentFormat::PlainText => translate_plain(&split_paragraphs(lines)).join("\n"),
        ContentFormat::Markdown => translate_markdown(&lines.join("\n")).join("\n"),
        ContentFormat::Html => lines.join("\n"),
    }
}
