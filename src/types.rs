//! Core types for the shape-preserving hashing transform.

/// Digest: deterministic 256-bit hash of a scalar value
pub type Digest = [u8; 32];
