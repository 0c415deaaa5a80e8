//! Rendering module for converting documents to HTML.

mod context;
mod html;
pub mod nodes;
mod options;
mod result;

pub use context::{NodeRenderer, RenderContext};
pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use nodes::escape_html;
pub use options::{ListItemOptions, RenderOptions};
pub use result::{RenderResult, RenderStats};
