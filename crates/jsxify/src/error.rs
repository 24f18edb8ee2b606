//! Error types for HTML to JSX conversion.

/// Errors that can occur during conversion.
///
/// Empty or whitespace-only input is not an error: [`crate::convert`] returns
/// `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Unknown node type: {0}")]
    UnsupportedNodeKind(String),

    #[error("Failed to serialize raw markup: {0}")]
    Serialize(String),
}
