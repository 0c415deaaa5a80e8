//! Integration tests for renderer registration and dispatch policy.

use std::sync::Arc;

use richtext::{
    to_html, Document, Error, Node, NodeRenderer, RenderContext, RenderOptions, Result,
};

/// Renders paragraphs as classed divs instead of <p>.
struct DivParagraphRenderer;

impl NodeRenderer for DivParagraphRenderer {
    fn render(&self, node: &Node, cx: &RenderContext<'_>, out: &mut String) -> Result<()> {
        out.push_str("<div class=\"paragraph\">");
        cx.render_children(node, out)?;
        out.push_str("</div>");
        Ok(())
    }
}

/// Renders embedded entries as a placeholder naming the target id.
struct EntryPlaceholderRenderer;

impl NodeRenderer for EntryPlaceholderRenderer {
    fn render(&self, node: &Node, _cx: &RenderContext<'_>, out: &mut String) -> Result<()> {
        let id = node
            .data
            .target
            .as_ref()
            .map(|link| link.id())
            .unwrap_or("unknown");
        out.push_str("<!-- entry: ");
        out.push_str(id);
        out.push_str(" -->");
        Ok(())
    }
}

/// Always fails, standing in for a broken caller-supplied renderer.
struct FailingRenderer;

impl NodeRenderer for FailingRenderer {
    fn render(&self, _: &Node, _: &RenderContext<'_>, _: &mut String) -> Result<()> {
        Err(Error::Render("boom".to_string()))
    }
}

#[test]
fn test_override_replaces_builtin_renderer() {
    let doc = Document::with_content(vec![Node::paragraph(vec![Node::plain_text_node("x")])]);
    let options =
        RenderOptions::new().with_renderer("paragraph", Arc::new(DivParagraphRenderer));
    let html = to_html(&doc, &options).unwrap();
    assert_eq!(html, "<div class=\"paragraph\">x</div>");
}

#[test]
fn test_override_applies_to_nested_nodes() {
    let doc = Document::with_content(vec![Node::blockquote(vec![Node::paragraph(vec![
        Node::plain_text_node("quoted"),
    ])])]);
    let options =
        RenderOptions::new().with_renderer("paragraph", Arc::new(DivParagraphRenderer));
    let html = to_html(&doc, &options).unwrap();
    assert_eq!(
        html,
        "<blockquote><div class=\"paragraph\">quoted</div></blockquote>"
    );
}

#[test]
fn test_custom_renderer_for_embedded_entry() {
    let doc = Document::with_content(vec![Node::embedded_entry("entry42")]);

    // Default: embedded references render nothing.
    assert_eq!(to_html(&doc, &RenderOptions::default()).unwrap(), "");

    let options = RenderOptions::new()
        .with_renderer("embedded-entry-block", Arc::new(EntryPlaceholderRenderer));
    assert_eq!(
        to_html(&doc, &options).unwrap(),
        "<!-- entry: entry42 -->"
    );
}

#[test]
fn test_custom_tag_is_renderable_after_registration() {
    let doc = Document::with_content(vec![Node::with_tag(
        "callout",
        vec![Node::plain_text_node("note")],
    )]);

    // Unregistered custom tag: children only, no error.
    assert_eq!(to_html(&doc, &RenderOptions::default()).unwrap(), "note");

    let options = RenderOptions::new().with_renderer("callout", Arc::new(DivParagraphRenderer));
    assert_eq!(
        to_html(&doc, &options).unwrap(),
        "<div class=\"paragraph\">note</div>"
    );
}

#[test]
fn test_unknown_tag_never_errors() {
    let doc = Document::with_content(vec![Node::with_tag(
        "totally-unknown",
        vec![Node::paragraph(vec![Node::plain_text_node("inner")])],
    )]);
    let html = to_html(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(html, "<p>inner</p>");
}

#[test]
fn test_custom_renderer_error_propagates() {
    let doc = Document::with_content(vec![Node::paragraph(vec![Node::plain_text_node("x")])]);
    let options = RenderOptions::new().with_renderer("paragraph", Arc::new(FailingRenderer));
    let err = to_html(&doc, &options).unwrap_err();
    assert!(matches!(err, Error::Render(_)));
    assert_eq!(err.to_string(), "Rendering error: boom");
}
