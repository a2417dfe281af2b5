//! Value Tree
//!
//! A tagged representation of nested data: mappings with string keys,
//! ordered sequences, and opaque scalar leaves. The hasher walks this
//! tree and replaces every scalar with a digest, leaving the shape of
//! mappings and sequences intact.

pub mod hasher;
pub mod node;

pub use hasher::{hash_json, hash_scalar, hash_tree};
pub use node::{Node, Scalar};
