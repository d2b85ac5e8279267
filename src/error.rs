//! Error types for email content parsing

use thiserror::Error;

/// Errors raised while parsing email content.
///
/// The body-level operations never return these to the caller; they are
/// caught and turned into the documented fallback output. Only the Graph
/// payload decoder surfaces them.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The HTML document could not be read
    #[error("Failed to read HTML document: {0}")]
    Html(String),

    /// The HTML to Markdown converter rejected the markup
    #[error("Failed to convert HTML to Markdown: {0}")]
    Markdown(String),

    /// Invalid address list
    #[error("Invalid address list {input:?}: {details}")]
    Address { input: String, details: String },

    /// Malformed JSON input (Graph payload or configuration)
    #[error("Invalid JSON payload: {0}")]
    Json(String),
}

/// Result type for email content operations
pub type Result<T> = std::result::Result<T, ParseError>;
