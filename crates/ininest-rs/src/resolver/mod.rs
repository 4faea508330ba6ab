//! Turns a flat [`RawConfig`] into a nested [`ConfigNode`] tree.
//!
//! Resolution runs in two passes: section inheritance is flattened into one
//! key set per output section, then dotted keys in each key set are expanded
//! into nested object nodes with leaf values classified by
//! [`parse_value`](crate::value::parse_value).

mod expand;
mod inherit;


use crate::node::ObjectMap;
use crate::raw::KeySet;
use crate::{ConfigNode, IniError, RawConfig};
use indexmap::IndexMap;
use log::debug;

pub use expand::expand_keys;

/// Resolve inheritance and nested keys into a tree rooted at an object node
/// whose children are the output sections.
///
/// Fails without producing a tree when an inheritance chain names an
/// unknown section or loops back on itself.
pub fn resolve(raw: &RawConfig) -> Result<ConfigNode, IniError> {
    let sections = resolve_sections(raw)?;
    let mut root = ObjectMap::new();
    for (name, keys) in &sections {
        root.insert(name.clone(), expand_keys(keys));
    }
    debug!("resolved config tree (sections={})", root.len());
    Ok(ConfigNode::Object(root))
}

/// Flatten every section's inheritance chain into its own key set.
///
/// Keys are merged from the most distant ancestor to the nearest, then the
/// section's own keys; later sources win on conflict. Ancestors may be
/// declared anywhere in the source.
pub fn resolve_sections(raw: &RawConfig) -> Result<IndexMap<String, KeySet>, IniError> {
    inherit::InheritanceResolver::new(raw).resolve_all()
}
