//! Content node and mark types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Node type tags for all built-in content nodes.
///
/// The tag is the discriminator the renderer uses to pick a node renderer.
/// Custom tags are legal anywhere a tag is accepted; these constants only
/// name the ones with built-in rendering behavior.
pub mod node_type {
    /// Document root.
    pub const DOCUMENT: &str = "document";
    /// Block paragraph.
    pub const PARAGRAPH: &str = "paragraph";
    /// Heading level 1.
    pub const HEADING_1: &str = "heading-1";
    /// Heading level 2.
    pub const HEADING_2: &str = "heading-2";
    /// Heading level 3.
    pub const HEADING_3: &str = "heading-3";
    /// Heading level 4.
    pub const HEADING_4: &str = "heading-4";
    /// Heading level 5.
    pub const HEADING_5: &str = "heading-5";
    /// Heading level 6.
    pub const HEADING_6: &str = "heading-6";
    /// Unordered (bulleted) list.
    pub const UNORDERED_LIST: &str = "unordered-list";
    /// Ordered (numbered) list.
    pub const ORDERED_LIST: &str = "ordered-list";
    /// Item within a list.
    pub const LIST_ITEM: &str = "list-item";
    /// Block quotation.
    pub const BLOCKQUOTE: &str = "blockquote";
    /// Horizontal rule.
    pub const HR: &str = "hr";
    /// Inline hyperlink with a URI target.
    pub const HYPERLINK: &str = "hyperlink";
    /// Inline link to an entry, resolved externally.
    pub const ENTRY_HYPERLINK: &str = "entry-hyperlink";
    /// Inline link to an asset, resolved externally.
    pub const ASSET_HYPERLINK: &str = "asset-hyperlink";
    /// Block-level embedded entry reference.
    pub const EMBEDDED_ENTRY_BLOCK: &str = "embedded-entry-block";
    /// Block-level embedded asset reference.
    pub const EMBEDDED_ASSET_BLOCK: &str = "embedded-asset-block";
    /// Inline embedded entry reference.
    pub const EMBEDDED_ENTRY_INLINE: &str = "embedded-entry-inline";
    /// Table.
    pub const TABLE: &str = "table";
    /// Table row.
    pub const TABLE_ROW: &str = "table-row";
    /// Table data cell.
    pub const TABLE_CELL: &str = "table-cell";
    /// Table header cell.
    pub const TABLE_HEADER_CELL: &str = "table-header-cell";
    /// Text leaf.
    pub const TEXT: &str = "text";

    /// Check whether a tag names a built-in node type.
    pub fn is_builtin(tag: &str) -> bool {
        matches!(
            tag,
            DOCUMENT
                | PARAGRAPH
                | HEADING_1
                | HEADING_2
                | HEADING_3
                | HEADING_4
                | HEADING_5
                | HEADING_6
                | UNORDERED_LIST
                | ORDERED_LIST
                | LIST_ITEM
                | BLOCKQUOTE
                | HR
                | HYPERLINK
                | ENTRY_HYPERLINK
                | ASSET_HYPERLINK
                | EMBEDDED_ENTRY_BLOCK
                | EMBEDDED_ASSET_BLOCK
                | EMBEDDED_ENTRY_INLINE
                | TABLE
                | TABLE_ROW
                | TABLE_CELL
                | TABLE_HEADER_CELL
                | TEXT
        )
    }
}

/// A single node in a rich-text document tree.
///
/// Every node carries the same shape as the external JSON payload
/// (`{ nodeType, content, data, value?, marks? }`); which fields are
/// meaningful depends on the tag. Block containers carry `content`,
/// text leaves carry `value` and `marks`, reference nodes carry `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// The node type tag that selects the renderer.
    #[serde(rename = "nodeType")]
    pub node_type: String,

    /// Child nodes, in rendering order. Never null; empty for leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,

    /// Node payload (hyperlink URI, reference target, open extras).
    #[serde(default, skip_serializing_if = "NodeData::is_empty")]
    pub data: NodeData,

    /// Literal text value for text leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Inline style marks for text leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl Node {
    /// Create a node with an arbitrary tag and children.
    pub fn with_tag(tag: impl Into<String>, content: Vec<Node>) -> Self {
        Self {
            node_type: tag.into(),
            content,
            data: NodeData::default(),
            value: None,
            marks: Vec::new(),
        }
    }

    /// Create a text leaf with the given marks.
    pub fn text(value: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            node_type: node_type::TEXT.to_string(),
            content: Vec::new(),
            data: NodeData::default(),
            value: Some(value.into()),
            marks,
        }
    }

    /// Create a plain text leaf with no marks.
    pub fn plain_text_node(value: impl Into<String>) -> Self {
        Self::text(value, Vec::new())
    }

    /// Create a paragraph.
    pub fn paragraph(content: Vec<Node>) -> Self {
        Self::with_tag(node_type::PARAGRAPH, content)
    }

    /// Create a heading. The level is clamped to 1-6.
    pub fn heading(level: u8, content: Vec<Node>) -> Self {
        let tag = match level.clamp(1, 6) {
            1 => node_type::HEADING_1,
            2 => node_type::HEADING_2,
            3 => node_type::HEADING_3,
            4 => node_type::HEADING_4,
            5 => node_type::HEADING_5,
            _ => node_type::HEADING_6,
        };
        Self::with_tag(tag, content)
    }

    /// Create an unordered list from its items.
    pub fn unordered_list(items: Vec<Node>) -> Self {
        Self::with_tag(node_type::UNORDERED_LIST, items)
    }

    /// Create an ordered list from its items.
    pub fn ordered_list(items: Vec<Node>) -> Self {
        Self::with_tag(node_type::ORDERED_LIST, items)
    }

    /// Create a list item.
    pub fn list_item(content: Vec<Node>) -> Self {
        Self::with_tag(node_type::LIST_ITEM, content)
    }

    /// Create a blockquote.
    pub fn blockquote(content: Vec<Node>) -> Self {
        Self::with_tag(node_type::BLOCKQUOTE, content)
    }

    /// Create a horizontal rule.
    pub fn horizontal_rule() -> Self {
        Self::with_tag(node_type::HR, Vec::new())
    }

    /// Create a hyperlink around the given children.
    pub fn hyperlink(uri: impl Into<String>, content: Vec<Node>) -> Self {
        let mut node = Self::with_tag(node_type::HYPERLINK, content);
        node.data.uri = Some(uri.into());
        node
    }

    /// Create a block-level embedded entry reference.
    pub fn embedded_entry(id: impl Into<String>) -> Self {
        let mut node = Self::with_tag(node_type::EMBEDDED_ENTRY_BLOCK, Vec::new());
        node.data.target = Some(Link::entry(id));
        node
    }

    /// Create a block-level embedded asset reference.
    pub fn embedded_asset(id: impl Into<String>) -> Self {
        let mut node = Self::with_tag(node_type::EMBEDDED_ASSET_BLOCK, Vec::new());
        node.data.target = Some(Link::asset(id));
        node
    }

    /// Create a table from its rows.
    pub fn table(rows: Vec<Node>) -> Self {
        Self::with_tag(node_type::TABLE, rows)
    }

    /// Create a table row from its cells.
    pub fn table_row(cells: Vec<Node>) -> Self {
        Self::with_tag(node_type::TABLE_ROW, cells)
    }

    /// Create a table data cell.
    pub fn table_cell(content: Vec<Node>) -> Self {
        Self::with_tag(node_type::TABLE_CELL, content)
    }

    /// Create a table header cell.
    pub fn table_header_cell(content: Vec<Node>) -> Self {
        Self::with_tag(node_type::TABLE_HEADER_CELL, content)
    }

    /// Check if this node is a leaf (text or horizontal rule).
    pub fn is_leaf(&self) -> bool {
        self.content.is_empty() && self.value.is_some()
            || self.node_type == node_type::HR
    }

    /// Get the plain text content of this subtree, markup-free.
    pub fn plain_text(&self) -> String {
        match self.value {
            Some(ref value) => value.clone(),
            None => self.content.iter().map(Node::plain_text).collect(),
        }
    }
}

/// An inline style mark on a text node.
///
/// Unrecognized mark types deserialize as [`Mark::Unknown`] rather than
/// failing, so forward-compatible payloads remain renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Mark {
    /// Bold text
    Bold,
    /// Italic text
    Italic,
    /// Underlined text
    Underline,
    /// Inline code
    Code,
    /// Superscript
    Superscript,
    /// Subscript
    Subscript,
    /// Strikethrough text
    Strikethrough,
    /// Any mark type this library does not recognize
    #[serde(other)]
    Unknown,
}

impl Mark {
    /// The HTML element name this mark wraps text in, or `None` for
    /// unrecognized marks (which render no markup).
    pub fn html_tag(&self) -> Option<&'static str> {
        match self {
            Mark::Bold => Some("b"),
            Mark::Italic => Some("i"),
            Mark::Underline => Some("u"),
            Mark::Code => Some("code"),
            Mark::Superscript => Some("sup"),
            Mark::Subscript => Some("sub"),
            Mark::Strikethrough => Some("s"),
            Mark::Unknown => None,
        }
    }
}

/// Payload attached to a node.
///
/// The recognized keys cover hyperlink targets and embedded references.
/// Everything else the producing API attaches is preserved in `extra` as an
/// open key-value mapping; this library surfaces it but never interprets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeData {
    /// Hyperlink target URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Reference to an externally resolved entry or asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Link>,

    /// All remaining payload keys, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeData {
    /// Check if the payload carries nothing.
    pub fn is_empty(&self) -> bool {
        self.uri.is_none() && self.target.is_none() && self.extra.is_empty()
    }
}

/// A reference to an entry or asset, resolved outside this library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// System properties of the link.
    pub sys: LinkSys,
}

impl Link {
    /// Create a link to an entry.
    pub fn entry(id: impl Into<String>) -> Self {
        Self {
            sys: LinkSys {
                id: id.into(),
                link_type: "Entry".to_string(),
                sys_type: "Link".to_string(),
            },
        }
    }

    /// Create a link to an asset.
    pub fn asset(id: impl Into<String>) -> Self {
        Self {
            sys: LinkSys {
                id: id.into(),
                link_type: "Asset".to_string(),
                sys_type: "Link".to_string(),
            },
        }
    }

    /// The identifier of the linked entity.
    pub fn id(&self) -> &str {
        &self.sys.id
    }
}

/// System properties of a [`Link`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSys {
    /// Identifier of the linked entity.
    pub id: String,

    /// Kind of linked entity ("Entry" or "Asset").
    #[serde(rename = "linkType")]
    pub link_type: String,

    /// Always "Link".
    #[serde(rename = "type")]
    pub sys_type: String,
}
