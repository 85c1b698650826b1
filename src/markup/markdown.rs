//! Markdown translation as an ordered substitution pipeline
//!
//! Deliberately not a CommonMark parser. The supported subset is small
//! (headings, emphasis, fences, inline code, links) and each construct is
//! rewritten by one substitution in a fixed order, so malformed input
//! simply stays literal and translation never fails. The order also gives
//! this translator its known quirks: emphasis substitution runs before
//! fence substitution, so `**bold**` inside a fence body is still
//! rewritten, and a fence body containing a blank line is split by the
//! paragraph pass.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::escape::escape_html;
use crate::text::{split_paragraphs, LineSequence, Paragraph};

static HEADING3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").expect("heading pattern"));
static HEADING2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").expect("heading pattern"));
static HEADING1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").expect("heading pattern"));
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").expect("italic pattern"));
static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\n?(.*?)\n?```").expect("fence pattern"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("code pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\n]+)\)").expect("link pattern"));

/// Translate normalized Markdown text into HTML block fragments.
pub fn translate_markdown(text: &str) -> Vec<String> {
    let substituted = substitute(text);
    let seq = LineSequence::from_text(&substituted);
    split_paragraphs(seq.as_slice())
        .iter()
        .map(block_html)
        .collect()
}

/// The ordered substitutions, applied to the whole text before any
/// paragraph splitting. Longest heading prefix wins because it runs
/// first.
fn substitute(text: &str) -> String {
    let escaped = escape_html(text);
    let pass = HEADING3.replace_all(&escaped, "<h3>$1</h3>");
    let pass = HEADING2.replace_all(&pass, "<h2>$1</h2>");
    let pass = HEADING1.replace_all(&pass, "<h1>$1</h1>");
    let pass = BOLD.replace_all(&pass, "<strong>$1</strong>");
    let pass = ITALIC.replace_all(&pass, "<em>$1</em>");
    let pass = FENCE.replace_all(&pass, "<pre><code>$1</code></pre>");
    let pass = INLINE_CODE.replace_all(&pass, "<code>$1</code>");
    let pass = LINK.replace_all(&pass, "<a href=\"$2\">$1</a>");
    pass.into_owned()
}

fn block_html(paragraph: &Paragraph) -> String {
    let first = paragraph.lines.first().map(String::as_str).unwrap_or("");
    if starts_with_block_tag(first) {
        // heading / code blocks already carry their own block element
        paragraph.lines.join("\n")
    } else {
        format!("<p>{}</p>", paragraph.lines.join("<br>"))
    }
}

fn starts_with_block_tag(line: &str) -> bool {
    ["<h1>", "<h2>", "<h3>", "<pre>"]
        .iter()
        .any(|tag| line.starts_with(tag))
}
