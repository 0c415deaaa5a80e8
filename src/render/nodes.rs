//! Built-in node renderers, one per node type tag.

use super::{NodeRenderer, RenderContext, RenderOptions};
use crate::error::Result;
use crate::model::{node_type, Mark, Node};
use std::collections::HashMap;
use std::sync::Arc;

use super::context::RendererMap;

/// Escape a string for use in HTML text content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Build the effective tag-to-renderer map for one rendering call:
/// built-in defaults with the caller's overrides merged on top.
pub(crate) fn resolve(options: &RenderOptions) -> RendererMap {
    let mut map = defaults();
    for (tag, renderer) in &options.renderers {
        log::debug!("using caller-supplied renderer for node type {:?}", tag);
        map.insert(tag.clone(), Arc::clone(renderer));
    }
    map
}

/// The built-in tag-to-renderer map.
pub fn defaults() -> HashMap<String, Arc<dyn NodeRenderer>> {
    let mut map: HashMap<String, Arc<dyn NodeRenderer>> = HashMap::new();

    let mut element = |tag: &str, element: &'static str| {
        map.insert(tag.to_string(), Arc::new(ElementRenderer::new(element)));
    };
    element(node_type::HEADING_1, "h1");
    element(node_type::HEADING_2, "h2");
    element(node_type::HEADING_3, "h3");
    element(node_type::HEADING_4, "h4");
    element(node_type::HEADING_5, "h5");
    element(node_type::HEADING_6, "h6");
    element(node_type::UNORDERED_LIST, "ul");
    element(node_type::ORDERED_LIST, "ol");
    element(node_type::BLOCKQUOTE, "blockquote");
    element(node_type::TABLE, "table");
    element(node_type::TABLE_ROW, "tr");
    element(node_type::TABLE_CELL, "td");
    element(node_type::TABLE_HEADER_CELL, "th");

    map.insert(
        node_type::PARAGRAPH.to_string(),
        Arc::new(ParagraphRenderer),
    );
    map.insert(node_type::LIST_ITEM.to_string(), Arc::new(ListItemRenderer));
    map.insert(node_type::TEXT.to_string(), Arc::new(TextRenderer));
    map.insert(node_type::HR.to_string(), Arc::new(HorizontalRuleRenderer));
    map.insert(
        node_type::HYPERLINK.to_string(),
        Arc::new(HyperlinkRenderer),
    );

    // Entity links render their visible children; the targets resolve
    // outside this library, so no markup is invented for them.
    map.insert(
        node_type::ENTRY_HYPERLINK.to_string(),
        Arc::new(ChildrenOnlyRenderer),
    );
    map.insert(
        node_type::ASSET_HYPERLINK.to_string(),
        Arc::new(ChildrenOnlyRenderer),
    );

    // Embedded references have no renderable children and emit nothing
    // until a caller registers a resolving renderer.
    map.insert(
        node_type::EMBEDDED_ENTRY_BLOCK.to_string(),
        Arc::new(NullRenderer),
    );
    map.insert(
        node_type::EMBEDDED_ASSET_BLOCK.to_string(),
        Arc::new(NullRenderer),
    );
    map.insert(
        node_type::EMBEDDED_ENTRY_INLINE.to_string(),
        Arc::new(NullRenderer),
    );

    map
}

/// Wraps child content in a fixed HTML element.
///
/// Covers every container tag whose markup is just an open/close pair:
/// headings, lists, blockquotes, and table structure.
#[derive(Debug, Clone)]
pub struct ElementRenderer {
    element: &'static str,
}

impl ElementRenderer {
    /// Create a renderer emitting `<element>children</element>`.
    pub fn new(element: &'static str) -> Self {
        Self { element }
    }
}

impl NodeRenderer for ElementRenderer {
    fn render(&self, node: &Node, cx: &RenderContext<'_>, out: &mut String) -> Result<()> {
        out.push('<');
        out.push_str(self.element);
        out.push('>');
        cx.render_children(node, out)?;
        out.push_str("</");
        out.push_str(self.element);
        out.push('>');
        Ok(())
    }
}

/// Renders a paragraph as `<p>children</p>`.
///
/// When the paragraph is a direct child of a list item and
/// `omit_paragraph_tags_inside_list_items` is set, only the children are
/// emitted.
#[derive(Debug, Clone, Default)]
pub struct ParagraphRenderer;

impl NodeRenderer for ParagraphRenderer {
    fn render(&self, node: &Node, cx: &RenderContext<'_>, out: &mut String) -> Result<()> {
        let omit = cx.inside_list_item()
            && cx
                .options()
                .list_item_options
                .omit_paragraph_tags_inside_list_items;
        if omit {
            return cx.render_children(node, out);
        }
        out.push_str("<p>");
        cx.render_children(node, out)?;
        out.push_str("</p>");
        Ok(())
    }
}

/// Renders a list item as `<li>children</li>`, flagging the children as
/// direct list item content for the paragraph rule.
#[derive(Debug, Clone, Default)]
pub struct ListItemRenderer;

impl NodeRenderer for ListItemRenderer {
    fn render(&self, node: &Node, cx: &RenderContext<'_>, out: &mut String) -> Result<()> {
        out.push_str("<li>");
        cx.render_list_item_children(node, out)?;
        out.push_str("</li>");
        Ok(())
    }
}

/// Mark application order, outermost first.
///
/// The order is fixed so a given mark set always nests the same way
/// regardless of the order marks appear in the payload.
const MARK_ORDER: [Mark; 7] = [
    Mark::Bold,
    Mark::Italic,
    Mark::Underline,
    Mark::Strikethrough,
    Mark::Superscript,
    Mark::Subscript,
    Mark::Code,
];

/// Renders a text leaf: the HTML-escaped value wrapped in one inline
/// element per active mark.
///
/// A text node without a value renders as empty content. Unrecognized
/// marks contribute no markup.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer;

impl NodeRenderer for TextRenderer {
    fn render(&self, node: &Node, _cx: &RenderContext<'_>, out: &mut String) -> Result<()> {
        let tags: Vec<&str> = MARK_ORDER
            .iter()
            .copied()
            .filter(|mark| node.marks.contains(mark))
            .filter_map(|mark| mark.html_tag())
            .collect();

        for tag in &tags {
            out.push('<');
            out.push_str(tag);
            out.push('>');
        }
        out.push_str(&escape_html(node.value.as_deref().unwrap_or("")));
        for tag in tags.iter().rev() {
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        Ok(())
    }
}

/// Renders a hyperlink as `<a href="uri">children</a>` with the URI
/// escaped for attribute context. A missing URI becomes an empty href.
#[derive(Debug, Clone, Default)]
pub struct HyperlinkRenderer;

impl NodeRenderer for HyperlinkRenderer {
    fn render(&self, node: &Node, cx: &RenderContext<'_>, out: &mut String) -> Result<()> {
        out.push_str("<a href=\"");
        out.push_str(&escape_html(node.data.uri.as_deref().unwrap_or("")));
        out.push_str("\">");
        cx.render_children(node, out)?;
        out.push_str("</a>");
        Ok(())
    }
}

/// Renders a horizontal rule as `<hr>`.
#[derive(Debug, Clone, Default)]
pub struct HorizontalRuleRenderer;

impl NodeRenderer for HorizontalRuleRenderer {
    fn render(&self, _node: &Node, _cx: &RenderContext<'_>, out: &mut String) -> Result<()> {
        out.push_str("<hr>");
        Ok(())
    }
}

/// Renders only the node's children, dropping the node's own wrapper.
///
/// Used for entity hyperlinks and reusable as an explicit choice for
/// custom tags.
#[derive(Debug, Clone, Default)]
pub struct ChildrenOnlyRenderer;

impl NodeRenderer for ChildrenOnlyRenderer {
    fn render(&self, node: &Node, cx: &RenderContext<'_>, out: &mut String) -> Result<()> {
        cx.render_children(node, out)
    }
}

/// Renders nothing. The default for embedded entry and asset references.
#[derive(Debug, Clone, Default)]
pub struct NullRenderer;

impl NodeRenderer for NullRenderer {
    fn render(&self, _node: &Node, _cx: &RenderContext<'_>, _out: &mut String) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(node: &Node) -> String {
        let options = RenderOptions::default();
        let renderers = resolve(&options);
        let cx = RenderContext::new(&renderers, &options);
        let mut out = String::new();
        cx.render_node(node, &mut out).unwrap();
        out
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_text_escapes_value() {
        let node = Node::plain_text_node("1 < 2 && 3 > 2");
        assert_eq!(render(&node), "1 &lt; 2 &amp;&amp; 3 &gt; 2");
    }

    #[test]
    fn test_text_missing_value_renders_empty() {
        let mut node = Node::plain_text_node("");
        node.value = None;
        assert_eq!(render(&node), "");
    }

    #[test]
    fn test_mark_order_is_fixed() {
        let forward = Node::text("x", vec![Mark::Bold, Mark::Italic]);
        let reversed = Node::text("x", vec![Mark::Italic, Mark::Bold]);
        assert_eq!(render(&forward), "<b><i>x</i></b>");
        assert_eq!(render(&reversed), "<b><i>x</i></b>");
    }

    #[test]
    fn test_unknown_mark_adds_no_markup() {
        let node = Node::text("x", vec![Mark::Unknown, Mark::Bold]);
        assert_eq!(render(&node), "<b>x</b>");
    }

    #[test]
    fn test_code_mark_is_innermost() {
        let node = Node::text("let x", vec![Mark::Code, Mark::Bold]);
        assert_eq!(render(&node), "<b><code>let x</code></b>");
    }

    #[test]
    fn test_hyperlink_escapes_uri() {
        let node = Node::hyperlink(
            "https://example.com/?a=1&b=2",
            vec![Node::plain_text_node("link")],
        );
        assert_eq!(
            render(&node),
            "<a href=\"https://example.com/?a=1&amp;b=2\">link</a>"
        );
    }

    #[test]
    fn test_hyperlink_missing_uri() {
        let node = Node::with_tag(node_type::HYPERLINK, vec![Node::plain_text_node("x")]);
        assert_eq!(render(&node), "<a href=\"\">x</a>");
    }

    #[test]
    fn test_heading_and_blockquote() {
        let node = Node::heading(2, vec![Node::plain_text_node("Title")]);
        assert_eq!(render(&node), "<h2>Title</h2>");

        let node = Node::blockquote(vec![Node::paragraph(vec![Node::plain_text_node("q")])]);
        assert_eq!(render(&node), "<blockquote><p>q</p></blockquote>");
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(render(&Node::horizontal_rule()), "<hr>");
    }

    #[test]
    fn test_table() {
        let node = Node::table(vec![
            Node::table_row(vec![Node::table_header_cell(vec![Node::paragraph(vec![
                Node::plain_text_node("H"),
            ])])]),
            Node::table_row(vec![Node::table_cell(vec![Node::paragraph(vec![
                Node::plain_text_node("c"),
            ])])]),
        ]);
        assert_eq!(
            render(&node),
            "<table><tr><th><p>H</p></th></tr><tr><td><p>c</p></td></tr></table>"
        );
    }

    #[test]
    fn test_embedded_references_render_nothing() {
        assert_eq!(render(&Node::embedded_entry("entry1")), "");
        assert_eq!(render(&Node::embedded_asset("asset1")), "");
    }

    #[test]
    fn test_entry_hyperlink_renders_children() {
        let node = Node::with_tag(
            node_type::ENTRY_HYPERLINK,
            vec![Node::plain_text_node("see entry")],
        );
        assert_eq!(render(&node), "see entry");
    }
}
