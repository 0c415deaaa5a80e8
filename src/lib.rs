//! # richtext
//!
//! Structured rich-text document model and HTML renderer.
//!
//! This library renders a typed tree of content nodes, as produced by a
//! content API, into an HTML string. Rendering walks the tree once,
//! dispatching each node to the renderer registered for its node type tag,
//! and concatenates the results in document order.
//!
//! ## Quick Start
//!
//! ```
//! use richtext::{Document, Node, RenderOptions};
//!
//! let doc = Document::with_content(vec![
//!     Node::paragraph(vec![Node::plain_text_node("Hello, world!")]),
//! ]);
//!
//! let html = richtext::to_html(&doc, &RenderOptions::default())?;
//! assert_eq!(html, "<p>Hello, world!</p>");
//! # Ok::<(), richtext::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Per-tag dispatch**: every node type has its own renderer; callers
//!   can override any tag or add custom tags through [`RenderOptions`]
//! - **Tolerant by design**: unknown tags render their children, malformed
//!   leaves render as empty content, and nothing in the built-in path fails
//! - **Escaping**: text values and URI attributes are HTML-escaped
//! - **Pure traversal**: no shared mutable state; concurrent renders of
//!   different documents are safe

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{node_type, Document, Link, LinkSys, Mark, Node, NodeData};
pub use render::{
    escape_html, to_html, to_html_with_stats, HtmlRenderer, ListItemOptions, NodeRenderer,
    RenderContext, RenderOptions, RenderResult, RenderStats,
};

/// Deserialize a document from a JSON payload.
///
/// Convenience wrapper around [`Document::from_json`].
///
/// # Example
///
/// ```
/// let doc = richtext::from_json(r#"{"nodeType": "document", "content": []}"#)?;
/// assert!(doc.is_empty());
/// # Ok::<(), richtext::Error>(())
/// ```
pub fn from_json(json: &str) -> Result<Document> {
    Document::from_json(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_roundtrip_render() {
        let json = r#"{
            "nodeType": "document",
            "content": [
                {
                    "nodeType": "paragraph",
                    "content": [{"nodeType": "text", "value": "hi"}]
                }
            ]
        }"#;
        let doc = from_json(json).unwrap();
        let html = to_html(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(html, "<p>hi</p>");
    }
}
