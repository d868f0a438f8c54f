//! Error types for the editor's edges.
//!
//! Editing operations never fail; they degrade to "no state change". Errors
//! only arise where the core meets the outside world: settings files,
//! template lookup and parsing, and node-kind names coming from a host.

use thiserror::Error;

/// Errors that can occur at the editor's boundaries
#[derive(Error, Debug)]
pub enum EditorError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No template is registered under this name
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// String does not name any node kind
    #[error("Unknown node kind: {0}")]
    UnknownNodeKind(String),

    /// Settings parsed but hold an unusable value
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for editor boundary operations
pub type EditorResult<T> = Result<T, EditorError>;
