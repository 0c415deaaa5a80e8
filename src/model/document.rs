//! Document-level types.

use super::Node;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The root of a rich-text document tree.
///
/// A document is an ordered sequence of top-level content nodes; the order
/// is the rendering order. The tree is built by an external deserializer
/// and is read-only input to this library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Top-level content nodes, in rendering order.
    #[serde(default)]
    pub content: Vec<Node>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
        }
    }

    /// Create a document from its top-level nodes.
    pub fn with_content(content: Vec<Node>) -> Self {
        Self { content }
    }

    /// Deserialize a document from a JSON payload shaped
    /// `{ nodeType: "document", content: [...] }`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a top-level node.
    pub fn add_node(&mut self, node: Node) {
        self.content.push(node);
    }

    /// Check if the document has any content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get plain text content of the entire document.
    ///
    /// Top-level blocks are joined with blank lines; inline content within
    /// a block concatenates without separators.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(Node::plain_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
