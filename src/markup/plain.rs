//! Plain-text translation: paragraphs and line breaks only

use crate::markup::escape::escape_html;
use crate::text::Paragraph;

/// One `<p>` block per paragraph; interior line breaks become `<br>`.
///
/// No other interpretation of the text happens in this mode.
pub fn translate_plain(paragraphs: &[Paragraph]) -> Vec<String> {
    paragraphs.iter().map(paragraph_html).collect()
}

fn paragraph_html(paragraph: &Paragraph) -> String {
    let body: Vec<String> = paragraph
        .lines
        .iter()
        .map(|line| escape_html(line).into_owned())
        .collect();
    format!("<p>{}</p>", body.join("<br>"))
}
