//! Line-ending normalization and paragraph segmentation

/// Replace every `\r\n` pair and bare `\r` with `\n`.
///
/// Runs before any splitting, so downstream code only ever sees `\n`.
pub fn normalize_newlines(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

/// True for lines that carry no content (empty or whitespace-only).
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// An ordered sequence of logical lines, fixed for one layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Split normalized text into logical lines.
    ///
    /// Input that is empty or entirely blank produces an empty sequence;
    /// the caller substitutes the placeholder page for that case.
    pub fn from_text(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self { lines: Vec::new() };
        }
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// A maximal run of non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub lines: Vec<String>,
}

/// Group lines into paragraphs.
///
/// Runs separated by one or more blank lines are distinct paragraphs.
/// A line slice with no content at all still yields a single empty
/// paragraph, so an empty document renders one empty block rather than
/// nothing.
pub fn split_paragraphs(lines: &[String]) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        if is_blank(line) {
            if !current.is_empty() {
                paragraphs.push(Paragraph {
                    lines: std::mem::take(&mut current),
                });
            }
        } else {
            current.push(line.clone());
        }
    }

    if !current.is_empty() {
        paragraphs.push(Paragraph { lines: current });
    }

    if paragraphs.is_empty() {
        paragraphs.push(Paragraph::default());
    }

    paragraphs
}
