//! Field tree error types

use thiserror::Error;

use super::field::FieldId;

/// Errors produced by field tree operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The path does not resolve to an existing node, or it walks through a
    /// field that is not nested
    #[error("Invalid path: {path:?}")]
    InvalidPath { path: Vec<usize> },

    /// Two fields in a seed tree carry the same id
    #[error("Duplicate field id: {0}")]
    DuplicateId(FieldId),

    /// A non-nested field was given children
    #[error("Field '{name}' of type {field_type} cannot have children")]
    UnexpectedChildren { name: String, field_type: String },
}

impl TreeError {
    pub(crate) fn invalid_path(path: &[usize]) -> Self {
        Self::InvalidPath {
            path: path.to_vec(),
        }
    }
}
