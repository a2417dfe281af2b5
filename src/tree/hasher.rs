//! Shape-preserving digest transform over value trees.

use crate::tree::node::{Node, Scalar};
use crate::types::Digest;
use serde_json::Value;
use tracing::debug;

// Kind tags keep scalars of different kinds in separate digest domains,
// so 1, "1", true, and null can never share a preimage.
const KIND_NULL: u8 = 0;
const KIND_BOOL: u8 = 1;
const KIND_NUMBER: u8 = 2;
const KIND_STRING: u8 = 3;

/// Compute the digest of a single scalar.
///
/// The digest covers a kind tag byte followed by the scalar's canonical
/// byte encoding. Equal scalars always produce equal digests; distinct
/// scalars collide only with negligible probability (BLAKE3, 256-bit).
pub fn hash_scalar(scalar: &Scalar) -> Digest {
    let mut hasher = blake3::Hasher::new();
    match scalar {
        Scalar::Null => {
            hasher.update(&[KIND_NULL]);
        }
        Scalar::Bool(b) => {
            hasher.update(&[KIND_BOOL, *b as u8]);
        }
        Scalar::Number(n) => {
            hasher.update(&[KIND_NUMBER]);
            hasher.update(n.to_string().as_bytes());
        }
        Scalar::String(s) => {
            hasher.update(&[KIND_STRING]);
            hasher.update(s.as_bytes());
        }
    }
    *hasher.finalize().as_bytes()
}

/// Replace every scalar in the tree with the hex digest of that scalar.
///
/// Shape-preserving: mappings keep their key set and order, sequences
/// keep their length, nesting is unchanged. The input is borrowed and
/// never mutated; a new tree is returned.
pub fn hash_tree(node: &Node) -> Node {
    match node {
        Node::Mapping(entries) => Node::Mapping(
            entries
                .iter()
                .map(|(key, child)| (key.clone(), hash_tree(child)))
                .collect(),
        ),
        Node::Sequence(items) => Node::Sequence(items.iter().map(hash_tree).collect()),
        Node::Scalar(scalar) => Node::Scalar(Scalar::String(hex::encode(hash_scalar(scalar)))),
    }
}

/// Hash a plain JSON value, returning a JSON value of the same shape
/// with every leaf replaced by its hex digest.
pub fn hash_json(value: &Value) -> Value {
    let tree = Node::from(value.clone());
    debug!(scalars = tree.scalar_count(), "Hashing value tree");
    Value::from(hash_tree(&tree))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_hex(scalar: &Scalar) -> String {
        hex::encode(hash_scalar(scalar))
    }

    #[test]
    fn test_scalar_digest_deterministic() {
        let a = Scalar::String("hello".to_string());
        let b = Scalar::String("hello".to_string());
        assert_eq!(hash_scalar(&a), hash_scalar(&b));
    }

    #[test]
    fn test_scalar_digest_separates_values() {
        assert_ne!(
            hash_scalar(&Scalar::String("a".to_string())),
            hash_scalar(&Scalar::String("b".to_string()))
        );
        assert_ne!(
            hash_scalar(&Scalar::Number(1.into())),
            hash_scalar(&Scalar::Number(2.into()))
        );
    }

    #[test]
    fn test_scalar_digest_separates_kinds() {
        // Same surface representation, different kinds.
        let digests = [
            digest_hex(&Scalar::Number(1.into())),
            digest_hex(&Scalar::String("1".to_string())),
            digest_hex(&Scalar::Bool(true)),
            digest_hex(&Scalar::String("true".to_string())),
            digest_hex(&Scalar::Null),
            digest_hex(&Scalar::String("null".to_string())),
            digest_hex(&Scalar::String(String::new())),
        ];
        for (i, a) in digests.iter().enumerate() {
            for b in digests.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_hash_tree_replaces_leaves_with_hex_digests() {
        let tree = Node::from(serde_json::json!({"a": 1}));
        let hashed = hash_tree(&tree);
        match &hashed {
            Node::Mapping(entries) => match entries["a"].as_scalar() {
                Some(Scalar::String(s)) => {
                    assert_eq!(s.len(), 64);
                    assert_eq!(s, &digest_hex(&Scalar::Number(1.into())));
                }
                other => panic!("expected digest string, got {:?}", other),
            },
            other => panic!("expected mapping, got {}", other.kind()),
        }
    }

    #[test]
    fn test_hash_tree_does_not_mutate_input() {
        let tree = Node::from(serde_json::json!([1, {"x": 2}]));
        let before = tree.clone();
        let _ = hash_tree(&tree);
        assert_eq!(tree, before);
    }
}
