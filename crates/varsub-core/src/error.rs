//! Error types for varsub-core

/// Result type for varsub-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during configuration resolution
///
/// Missing context (no editor, no workspace, unknown variable) is not an
/// error — those tokens stay verbatim in the output. The only fatal path is
/// a document that stops being valid JSON, which surfaces as [`Error::Json`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
