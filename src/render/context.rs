//! Renderer trait and the context threaded through the recursive walk.

use super::RenderOptions;
use crate::error::Result;
use crate::model::Node;
use std::collections::HashMap;
use std::sync::Arc;

/// The resolved tag-to-renderer map, built once per rendering call.
pub(crate) type RendererMap = HashMap<String, Arc<dyn NodeRenderer>>;

/// Renders one node type to HTML.
///
/// A renderer emits the markup for its tag and recurses into child content
/// through the [`RenderContext`]. Built-in renderers never fail; a custom
/// renderer may return an error, which propagates unmodified out of the
/// rendering call.
pub trait NodeRenderer: Send + Sync {
    /// Append the HTML for `node` to `out`.
    fn render(&self, node: &Node, cx: &RenderContext<'_>, out: &mut String) -> Result<()>;
}

/// Per-call rendering state threaded through the recursive walk.
///
/// Carries the resolved renderer map, the options, and the ancestry context
/// the paragraph-in-list-item rule needs. The context is passed down by
/// value; nothing in it is mutated during a render.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    renderers: &'a RendererMap,
    options: &'a RenderOptions,
    inside_list_item: bool,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(renderers: &'a RendererMap, options: &'a RenderOptions) -> Self {
        Self {
            renderers,
            options,
            inside_list_item: false,
        }
    }

    /// The options for this rendering call.
    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    /// Whether the node being rendered is a direct child of a list item.
    pub fn inside_list_item(&self) -> bool {
        self.inside_list_item
    }

    /// Render a single node by dispatching on its tag.
    ///
    /// Tags with no registered renderer fall back to rendering the node's
    /// children only, dropping the unknown wrapper. This keeps
    /// forward-compatible payloads renderable instead of failing.
    pub fn render_node(&self, node: &Node, out: &mut String) -> Result<()> {
        match self.renderers.get(&node.node_type) {
            Some(renderer) => renderer.render(node, self, out),
            None => {
                log::debug!(
                    "no renderer registered for node type {:?}; rendering children only",
                    node.node_type
                );
                self.render_children(node, out)
            }
        }
    }

    /// Render a node's children in order, with no added separator.
    ///
    /// The children see a context where they are not direct children of a
    /// list item; list item renderers use
    /// [`render_list_item_children`](Self::render_list_item_children) instead.
    pub fn render_children(&self, node: &Node, out: &mut String) -> Result<()> {
        self.scoped(false).render_each(&node.content, out)
    }

    /// Render a list item's children, marking each as a direct child of a
    /// list item so the paragraph rule can see its parent.
    pub fn render_list_item_children(&self, node: &Node, out: &mut String) -> Result<()> {
        self.scoped(true).render_each(&node.content, out)
    }

    fn render_each(&self, nodes: &[Node], out: &mut String) -> Result<()> {
        for node in nodes {
            self.render_node(node, out)?;
        }
        Ok(())
    }

    fn scoped(&self, inside_list_item: bool) -> Self {
        Self {
            inside_list_item,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mark;
    use crate::render::nodes;

    fn render_with_defaults(node: &Node) -> String {
        let options = RenderOptions::default();
        let renderers = nodes::resolve(&options);
        let cx = RenderContext::new(&renderers, &options);
        let mut out = String::new();
        cx.render_node(node, &mut out).unwrap();
        out
    }

    #[test]
    fn test_dispatch_by_tag() {
        let node = Node::paragraph(vec![Node::plain_text_node("hi")]);
        assert_eq!(render_with_defaults(&node), "<p>hi</p>");
    }

    #[test]
    fn test_unknown_tag_renders_children_only() {
        let node = Node::with_tag(
            "future-widget",
            vec![Node::paragraph(vec![Node::plain_text_node("inner")])],
        );
        assert_eq!(render_with_defaults(&node), "<p>inner</p>");
    }

    #[test]
    fn test_list_item_scope_does_not_leak_to_grandchildren() {
        // The paragraph is inside a blockquote inside the list item, so it
        // is not a *direct* child and keeps its <p> tag even when the omit
        // option is on.
        let node = Node::list_item(vec![Node::blockquote(vec![Node::paragraph(vec![
            Node::text("quoted", vec![Mark::Italic]),
        ])])]);

        let options = RenderOptions::new().omit_paragraph_tags_inside_list_items(true);
        let renderers = nodes::resolve(&options);
        let cx = RenderContext::new(&renderers, &options);
        let mut out = String::new();
        cx.render_node(&node, &mut out).unwrap();

        assert_eq!(out, "<li><blockquote><p><i>quoted</i></p></blockquote></li>");
    }
}
