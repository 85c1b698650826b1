//! Text intake: line-ending normalization, segmentation, statistics

mod normalize;
mod stats;

pub use normalize::{is_blank, normalize_newlines, split_paragraphs, LineSequence, Paragraph};
pub use stats::{document_stats, DocumentStats};
