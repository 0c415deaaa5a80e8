//! Document model types for rich-text content.
//!
//! This module defines the tree that bridges an external content API and
//! HTML rendering. The model mirrors the API's JSON shape
//! (`{ nodeType, content, data, value?, marks? }`) without interpreting it.

mod document;
mod node;

pub use document::Document;
pub use node::{node_type, Link, LinkSys, Mark, Node, NodeData};
