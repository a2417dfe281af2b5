//! Error types surfaced at the crate boundary.
//!
//! Inside the crate the tagged `Node` enum makes malformed trees
//! unrepresentable; errors only arise when untyped data is interpreted
//! as a tree.

use thiserror::Error;

/// Errors produced when interpreting untyped data as a node tree
#[derive(Debug, Error)]
pub enum TreeError {
    /// A tagged value named a node kind that does not exist
    #[error("invalid node kind: {kind}")]
    InvalidNodeKind { kind: String },
}

impl TreeError {
    pub(crate) fn invalid_kind(kind: impl Into<String>) -> Self {
        TreeError::InvalidNodeKind { kind: kind.into() }
    }
}
