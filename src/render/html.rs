//! HTML rendering orchestrator.

use crate::error::Result;
use crate::model::Document;

use super::{nodes, RenderContext, RenderOptions, RenderResult, RenderStats};

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    HtmlRenderer::new(options.clone()).to_html(Some(doc))
}

/// Convert a document to HTML, returning node statistics alongside.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let html = to_html(doc, options)?;
    let mut stats = RenderStats::collect(doc);
    stats.count_text(&doc.plain_text());
    Ok(RenderResult::new(html, stats))
}

/// The rendering entry point.
///
/// Walks the document tree in order, dispatching each node to the renderer
/// registered for its tag, and concatenates the results bottom-up. Rendering
/// is a pure function of the tree and the options: no state survives a call,
/// and concurrent calls on different documents are safe.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to an HTML string.
    ///
    /// An absent document or one with empty content renders as the empty
    /// string; this is not an error. Top-level nodes render in document
    /// order with no separator between them.
    pub fn to_html(&self, document: Option<&Document>) -> Result<String> {
        let Some(doc) = document else {
            return Ok(String::new());
        };
        if doc.content.is_empty() {
            return Ok(String::new());
        }

        // The effective renderer map is resolved once here and is
        // immutable for the rest of the call.
        let renderers = nodes::resolve(&self.options);
        let cx = RenderContext::new(&renderers, &self.options);

        let mut out = String::new();
        for node in &doc.content {
            cx.render_node(node, &mut out)?;
        }
        Ok(out)
    }

    /// The options this renderer was built with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
