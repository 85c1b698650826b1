//! HTML-to-text extraction used when flattening pages
//!
//! Approximates what the browser reports as visible text: `<br>` and
//! block-closing tags become line breaks, every other tag disappears,
//! and the entities this crate emits are decoded. Inline formatting is
//! deliberately lost here; flattening reads text, not markup.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<br\s*/?>").expect("break pattern"));
static BLOCK_ENDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</(?:p|h1|h2|h3|pre|div)>").expect("block-end pattern"));
static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static ENTITIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(?:[a-zA-Z]+|#\d+);").expect("entity pattern"));

static ENTITY_TABLE: LazyLock<FxHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut table = FxHashMap::default();
    table.insert("&amp;", "&");
    table.insert("&lt;", "<");
    table.insert("&gt;", ">");
    table.insert("&quot;", "\"");
    table.insert("&#39;", "'");
    table.insert("&nbsp;", " ");
    table
});

/// Extract the visible text of an HTML fragment.
pub fn extract_text(html: &str) -> String {
    let pass = LINE_BREAKS.replace_all(html, "\n");
    let pass = BLOCK_ENDS.replace_all(&pass, "\n");
    let pass = TAGS.replace_all(&pass, "");
    let decoded = ENTITIES.replace_all(&pass, |caps: &regex::Captures| {
        let whole = &caps[0];
        match ENTITY_TABLE.get(whole) {
            Some(replacement) => (*replacement).to_string(),
            None => whole.to_string(),
        }
    });
    decoded.trim_end_matches('\n').to_string()
}
