//! Document statistics for the status bar

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Word, grapheme and line counts over the document's flattened text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub words: usize,
    pub chars: usize,
    pub lines: usize,
}

/// Count words, grapheme clusters and lines in the given text.
pub fn document_stats(text: &str) -> DocumentStats {
    DocumentStats {
        words: text.unicode_words().count(),
        chars: text.graphemes(true).count(),
        lines: if text.is_empty() {
            0
        } else {
            text.split('\n').count()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = document_stats("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.chars, 0);
        assert_eq!(stats.lines, 0);
    }

    #[test]
    fn test_counts_words_and_lines() {
        let stats = document_stats("hello world\nsecond line");
        assert_eq!(stats.words, 4);
        assert_eq!(stats.lines, 2);
    }

    #[test]
    fn test_graphemes_not_bytes() {
        // "é" as a combining sequence is one grapheme, multiple bytes
        let stats = document_stats("e\u{301}x");
        assert_eq!(stats.chars, 2);
    }
}
