//! Shroud: Shape-Preserving Value Redaction
//!
//! Walks a nested mapping/sequence/scalar tree and replaces every scalar
//! with a deterministic digest of that scalar, keeping the container
//! structure (keys, order, lengths) identical.

pub mod error;
pub mod tree;
pub mod types;

pub use error::TreeError;
pub use tree::hasher::{hash_json, hash_scalar, hash_tree};
pub use tree::node::{Node, Scalar};
pub use types::Digest;
