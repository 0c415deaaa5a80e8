//! Error types for the richtext library.

use std::io;
use thiserror::Error;

/// Result type alias for richtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error deserializing a JSON document payload.
    #[error("JSON document error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised by a caller-supplied node renderer.
    ///
    /// Built-in renderers never fail; this variant exists so custom
    /// renderers can surface failures through the rendering call.
    #[error("Rendering error: {0}")]
    Render(String),
}
