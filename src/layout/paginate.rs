//! Greedy partitioning of a line sequence into page-sized chunks

use std::ops::Range;

use smallvec::SmallVec;

use crate::text::is_blank;

/// One page's slice of the source line sequence.
///
/// Chunks carry ranges rather than copies, so tiling the input exactly is
/// structural: concatenating all ranges in order reconstructs the
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChunk {
    pub line_range: Range<usize>,
}

impl PageChunk {
    pub fn len(&self) -> usize {
        self.line_range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_range.is_empty()
    }
}

/// Partition lines into page-sized chunks.
///
/// A chunk closes only once it has reached capacity *and* the next line
/// is non-blank: blank lines may push a chunk past nominal capacity
/// rather than opening a near-empty page for a trailing separator. The
/// final chunk is always emitted; zero input lines emit zero chunks and
/// the caller substitutes the placeholder page.
pub fn paginate(lines: &[String], max_lines_per_page: usize) -> SmallVec<[PageChunk; 8]> {
    let max = max_lines_per_page.max(1);
    let mut chunks: SmallVec<[PageChunk; 8]> = SmallVec::new();
    let mut start = 0;

    for (idx, line) in lines.iter().enumerate() {
        if idx - start >= max && !is_blank(line) {
            chunks.push(PageChunk {
                line_range: start..idx,
            });
            start = idx;
        }
    }

    if start < lines.len() {
        chunks.push(PageChunk {
            line_range: start..lines.len(),
        });
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_input_is_one_chunk() {
        let chunks = paginate(&lines(&["a", "b"]), 10);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].line_range, 0..2);
    }

    #[test]
    fn test_splits_at_capacity() {
        let chunks = paginate(&lines(&["a", "b", "c", "d", "e"]), 2);
        let ranges: Vec<_> = chunks.iter().map(|c| c.line_range.clone()).collect();
        assert_eq!(ranges, vec![0..2, 2..4, 4..5]);
    }

    #[test]
    fn test_blank_line_extends_chunk_past_capacity() {
        let chunks = paginate(&lines(&["a", "b", "", "c"]), 2);
        let ranges: Vec<_> = chunks.iter().map(|c| c.line_range.clone()).collect();
        // the blank at index 2 rides along; no chunk starts on it
        assert_eq!(ranges, vec![0..3, 3..4]);
    }

    #[test]
    fn test_zero_lines_emit_zero_chunks() {
        assert!(paginate(&[], 10).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let input = lines(&["a", "", "b", "c", "", "", "d", "e", "f"]);
        assert_eq!(paginate(&input, 3), paginate(&input, 3));
    }

    #[test]
    fn test_lossless_tiling() {
        let input = lines(&["a", "b", "", "c", "d", "e", "", "", "f"]);
        for max in 1..=input.len() + 1 {
            let chunks = paginate(&input, max);
            let mut covered = Vec::new();
            for chunk in &chunks {
                assert_eq!(chunk.line_range.start, covered.len());
                covered.extend_from_slice(&input[chunk.line_range.clone()]);
            }
            assert_eq!(covered, input, "max = {max}");
        }
    }

    #[test]
    fn test_capacity_monotonicity() {
        let input = lines(&["a", "b", "c", "", "d", "e", "f", "g", "", "h"]);
        let mut previous = usize::MAX;
        for max in 1..=input.len() {
            let count = paginate(&input, max).len();
            assert!(count <= previous, "max = {max}");
            previous = count;
        }
    }

    #[test]
    fn test_zero_capacity_clamps_to_one() {
        let chunks = paginate(&lines(&["a", "b"]), 0);
        assert_eq!(chunks.len(), 2);
    }
}
