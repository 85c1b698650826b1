//! Page value objects produced by a layout pass

use std::hash::{Hash, Hasher};

/// One laid-out page: an owned HTML fragment plus its footer label.
///
/// Pages are created wholesale by a layout pass and discarded wholesale
/// by the next one; nothing mutates a page in place except content syncs
/// coming back from its editable region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based, dense index.
    pub index: usize,
    content: String,
    label: String,
    content_hash: u64,
}

impl Page {
    pub fn new(index: usize, content: String) -> Self {
        let content_hash = hash_content(&content);
        Self {
            index,
            label: format!("Page {index}"),
            content,
            content_hash,
        }
    }

    /// The page's logical content. Never includes the footer label.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Display text of the page-number footer ("Page N"). Decorative.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the content from an editable region.
    ///
    /// Returns false when the new content hashes identically, so no-op
    /// DOM syncs don't dirty the document.
    pub fn set_content(&mut self, content: String) -> bool {
        let content_hash = hash_content(&content);
        if content_hash == self.content_hash {
            return false;
        }
        self.content = content;
        self.content_hash = content_hash;
        true
    }

    /// The full editable page shell.
    ///
    /// The footer sits in its own non-editable child so it never leaks
    /// into the logical content when pages are flattened or exported.
    pub fn container_html(&self) -> String {
        format!(
            "<div class=\"page\" contenteditable=\"true\" data-page=\"{}\">{}\
             <div class=\"page-number\" contenteditable=\"false\">{}</div></div>",
            self.index, self.content, self.label
        )
    }
}

/// Hash content for change detection.
fn hash_content(text: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}
