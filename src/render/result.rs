//! Rendering result with node statistics.

use crate::model::{node_type, Document, Node};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML.
    pub html: String,

    /// Statistics over the source tree.
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(html: String, stats: RenderStats) -> Self {
        Self { html, stats }
    }

    /// Get the HTML length in bytes.
    pub fn content_len(&self) -> usize {
        self.html.len()
    }
}

/// Node counts collected from a document tree.
///
/// Collected by a separate tree walk rather than during rendering, so the
/// rendering path stays a pure fold over the tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of headings (any level)
    pub heading_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of hyperlinks (URI, entry, and asset links)
    pub hyperlink_count: u32,

    /// Number of text leaves
    pub text_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of horizontal rules
    pub horizontal_rule_count: u32,

    /// Number of embedded entry/asset references
    pub embedded_count: u32,

    /// Number of nodes with tags this library does not recognize
    pub unknown_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect node counts from a document tree.
    pub fn collect(doc: &Document) -> Self {
        let mut stats = Self::new();
        for node in &doc.content {
            stats.visit(node);
        }
        stats
    }

    fn visit(&mut self, node: &Node) {
        match node.node_type.as_str() {
            node_type::PARAGRAPH => self.paragraph_count += 1,
            node_type::HEADING_1
            | node_type::HEADING_2
            | node_type::HEADING_3
            | node_type::HEADING_4
            | node_type::HEADING_5
            | node_type::HEADING_6 => self.heading_count += 1,
            node_type::LIST_ITEM => self.list_item_count += 1,
            node_type::HYPERLINK | node_type::ENTRY_HYPERLINK | node_type::ASSET_HYPERLINK => {
                self.hyperlink_count += 1;
            }
            node_type::TEXT => self.text_count += 1,
            node_type::TABLE => self.table_count += 1,
            node_type::HR => self.horizontal_rule_count += 1,
            node_type::EMBEDDED_ENTRY_BLOCK
            | node_type::EMBEDDED_ASSET_BLOCK
            | node_type::EMBEDDED_ENTRY_INLINE => self.embedded_count += 1,
            tag if !node_type::is_builtin(tag) => self.unknown_count += 1,
            _ => {}
        }
        for child in &node.content {
            self.visit(child);
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.list_item_count += other.list_item_count;
        self.hyperlink_count += other.hyperlink_count;
        self.text_count += other.text_count;
        self.table_count += other.table_count;
        self.horizontal_rule_count += other.horizontal_rule_count;
        self.embedded_count += other.embedded_count;
        self.unknown_count += other.unknown_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
