//! Node and scalar types for the value tree.

use crate::error::TreeError;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Scalar leaf value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

/// Tree node: a mapping with unique ordered string keys, an ordered
/// sequence, or a scalar leaf
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Mapping(IndexMap<String, Node>),
    Sequence(Vec<Node>),
    Scalar(Scalar),
}

impl Node {
    /// Name of this node's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Scalar(_) => "scalar",
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Number of scalar leaves in the tree.
    pub fn scalar_count(&self) -> usize {
        match self {
            Node::Mapping(entries) => entries.values().map(Node::scalar_count).sum(),
            Node::Sequence(items) => items.iter().map(Node::scalar_count).sum(),
            Node::Scalar(_) => 1,
        }
    }

    /// True when both trees have identical container structure: the same
    /// mapping keys in the same order, the same sequence lengths, and
    /// scalars in the same positions. Scalar values are not compared.
    pub fn same_shape(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Mapping(a), Node::Mapping(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va.same_shape(vb))
            }
            (Node::Sequence(a), Node::Sequence(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.same_shape(y))
            }
            (Node::Scalar(_), Node::Scalar(_)) => true,
            _ => false,
        }
    }

    /// Interpret the externally tagged persisted form produced by
    /// [`Node::serialize`]: `{"Mapping": …}`, `{"Sequence": …}`, or
    /// `{"Scalar": …}`.
    ///
    /// A tag that names no known node kind fails with
    /// [`TreeError::InvalidNodeKind`].
    pub fn from_tagged(value: &Value) -> Result<Node, TreeError> {
        let entry = value
            .as_object()
            .filter(|obj| obj.len() == 1)
            .and_then(|obj| obj.iter().next());
        let (tag, payload) = match entry {
            Some(entry) => entry,
            None => return Err(TreeError::invalid_kind(json_kind(value))),
        };
        match tag.as_str() {
            "Mapping" => {
                let entries = payload
                    .as_object()
                    .ok_or_else(|| TreeError::invalid_kind(format!("Mapping({})", json_kind(payload))))?;
                let mut mapping = IndexMap::with_capacity(entries.len());
                for (key, child) in entries {
                    mapping.insert(key.clone(), Node::from_tagged(child)?);
                }
                Ok(Node::Mapping(mapping))
            }
            "Sequence" => {
                let items = payload
                    .as_array()
                    .ok_or_else(|| TreeError::invalid_kind(format!("Sequence({})", json_kind(payload))))?;
                let sequence = items
                    .iter()
                    .map(Node::from_tagged)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Node::Sequence(sequence))
            }
            "Scalar" => Ok(Node::Scalar(Scalar::from_tagged(payload)?)),
            other => Err(TreeError::invalid_kind(other)),
        }
    }
}

impl Scalar {
    /// Interpret the externally tagged form produced by
    /// [`Scalar::serialize`]: `"Null"`, `{"Bool": …}`, `{"Number": …}`,
    /// or `{"String": …}`.
    pub fn from_tagged(value: &Value) -> Result<Scalar, TreeError> {
        match value {
            Value::String(tag) if tag == "Null" => Ok(Scalar::Null),
            Value::String(tag) => Err(TreeError::invalid_kind(tag)),
            Value::Object(obj) if obj.len() == 1 => {
                let (tag, payload) = match obj.iter().next() {
                    Some(entry) => entry,
                    None => return Err(TreeError::invalid_kind(json_kind(value))),
                };
                match (tag.as_str(), payload) {
                    ("Bool", Value::Bool(b)) => Ok(Scalar::Bool(*b)),
                    ("Number", Value::Number(n)) => Ok(Scalar::Number(n.clone())),
                    ("String", Value::String(s)) => Ok(Scalar::String(s.clone())),
                    ("Bool" | "Number" | "String", other) => Err(TreeError::invalid_kind(
                        format!("{}({})", tag, json_kind(other)),
                    )),
                    (other, _) => Err(TreeError::invalid_kind(other)),
                }
            }
            other => Err(TreeError::invalid_kind(json_kind(other))),
        }
    }
}

/// Convert plain JSON data into a tree. Total: every JSON value has a
/// node representation.
impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Scalar(Scalar::Null),
            Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Node::Scalar(Scalar::Number(n)),
            Value::String(s) => Node::Scalar(Scalar::String(s)),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(entries) => Node::Mapping(
                entries
                    .into_iter()
                    .map(|(key, child)| (key, Node::from(child)))
                    .collect(),
            ),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Scalar(Scalar::Null) => Value::Null,
            Node::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            Node::Scalar(Scalar::Number(n)) => Value::Number(n),
            Node::Scalar(Scalar::String(s)) => Value::String(s),
            Node::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::Mapping(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, child)| (key, Value::from(child)))
                    .collect(),
            ),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
