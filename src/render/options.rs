//! Rendering options and configuration.

use super::NodeRenderer;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Options for rendering a document to HTML.
///
/// Constructed once per rendering call and immutable while it runs. The
/// per-tag renderer overrides are merged over the built-in defaults when the
/// call starts; the merged map is never mutated mid-render.
#[derive(Clone, Default)]
pub struct RenderOptions {
    /// Behavior switches for list items.
    pub list_item_options: ListItemOptions,

    /// Per-tag renderer overrides and additions, keyed by node type tag.
    /// Tags not present here fall back to the built-in renderers.
    pub renderers: HashMap<String, Arc<dyn NodeRenderer>>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list item options.
    pub fn with_list_item_options(mut self, options: ListItemOptions) -> Self {
        self.list_item_options = options;
        self
    }

    /// Suppress `<p>` tags for paragraphs that are direct children of a
    /// list item, rendering only their inline content.
    pub fn omit_paragraph_tags_inside_list_items(mut self, omit: bool) -> Self {
        self.list_item_options.omit_paragraph_tags_inside_list_items = omit;
        self
    }

    /// Register a renderer for a node type tag, replacing the built-in one
    /// for that tag or adding support for a custom tag.
    pub fn with_renderer(
        mut self,
        tag: impl Into<String>,
        renderer: Arc<dyn NodeRenderer>,
    ) -> Self {
        self.renderers.insert(tag.into(), renderer);
        self
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut overrides: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        overrides.sort_unstable();
        f.debug_struct("RenderOptions")
            .field("list_item_options", &self.list_item_options)
            .field("renderer_overrides", &overrides)
            .finish()
    }
}

/// Behavior switches for rendering list items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListItemOptions {
    /// When true, a paragraph that is a direct child of a list item renders
    /// only its inline content, with no wrapping `<p>` tag.
    pub omit_paragraph_tags_inside_list_items: bool,
}
