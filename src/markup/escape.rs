//! Minimal HTML escaping for user text

use std::borrow::Cow;

/// Escape the characters that would otherwise become live markup.
///
/// User-typed text is escaped before it is embedded in any fragment, so
/// angle brackets in a document can never turn into elements.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_borrows() {
        assert!(matches!(escape_html("no markup here"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>&"fish"</b>"#),
            "&lt;b&gt;&amp;&quot;fish&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_ampersand_escaped_first() {
        // already-escaped input is escaped again, not left alone
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
