//! Resolved configuration tree.

use serde::Serialize;
use std::collections::BTreeMap;

/// Children of an object node, keyed by key segment.
pub type ObjectMap = BTreeMap<String, ConfigNode>;

/// A node in the resolved configuration tree.
///
/// Serializes untagged: scalars as strings, arrays as string arrays and
/// objects as maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigNode {
    /// A plain string value.
    Scalar(String),
    /// A bracketed, comma-separated value.
    Array(Vec<String>),
    /// A section or a dotted-key prefix.
    Object(ObjectMap),
}

impl ConfigNode {
    /// An object node with no children.
    pub fn empty_object() -> Self {
        Self::Object(ObjectMap::new())
    }

    /// Returns the scalar string, if this is a scalar leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the array items, if this is an array leaf.
    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the children, if this is an object node.
    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Look up a direct child by key. Leaves have no children.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.as_object()?.get(key)
    }

    /// Walk a dotted path (`section.a.b`) through nested object nodes.
    ///
    /// Returns `None` when a segment is missing or a leaf is reached before
    /// the path is exhausted.
    pub fn lookup(&self, path: &str) -> Option<&ConfigNode> {
        path.split('.')
            .try_fold(self, |node, segment| node.get(segment))
    }
}

impl From<&str> for ConfigNode {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for ConfigNode {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for ConfigNode {
    fn from(items: Vec<String>) -> Self {
        Self::Array(items)
    }
}

impl From<ObjectMap> for ConfigNode {
    fn from(map: ObjectMap) -> Self {
        Self::Object(map)
    }
}
