//! Dotted-key expansion for a single resolved section.

use crate::node::ObjectMap;
use crate::raw::KeySet;
use crate::value::parse_value;
use crate::ConfigNode;

/// Build a section's object node from its resolved key set.
///
/// `a.b.c = v` creates object nodes for `a` and `a.b` with `c` as the leaf.
/// Entries are applied in order and later writes win, so a scalar sitting
/// where an object is needed is replaced, and vice versa.
pub fn expand_keys(keys: &KeySet) -> ConfigNode {
    let mut node = ObjectMap::new();
    for (key, raw_value) in keys {
        let value = parse_value(raw_value);
        if key.contains('.') {
            let segments: Vec<&str> = key.split('.').collect();
            insert_nested(&mut node, &segments, value);
        } else {
            node.insert(key.clone(), value);
        }
    }
    ConfigNode::Object(node)
}

/// Walk or create the object nodes for every segment but the last, then
/// assign the leaf. Scalars in the way are replaced by empty objects.
fn insert_nested(root: &mut ObjectMap, segments: &[&str], value: ConfigNode) {
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };
    let mut parent = root;
    for segment in parents {
        let child = parent
            .entry(segment.to_string())
            .or_insert_with(ConfigNode::empty_object);
        if !child.is_object() {
            *child = ConfigNode::empty_object();
        }
        parent = match child {
            ConfigNode::Object(map) => map,
            _ => return,
        };
    }
    parent.insert(leaf.to_string(), value);
}
