//! Section inheritance with on-demand ancestor resolution.

use crate::raw::{KeySet, RawSection};
use crate::{IniError, RawConfig};
use indexmap::IndexMap;
use log::debug;

pub(super) struct InheritanceResolver<'a> {
    /// Output name to the last raw section declaring it.
    sections: IndexMap<&'a str, &'a RawSection>,
    resolved: IndexMap<String, KeySet>,
    /// Sections currently being resolved, outermost first.
    visiting: Vec<&'a str>,
}

impl<'a> InheritanceResolver<'a> {
    pub(super) fn new(raw: &'a RawConfig) -> Self {
        let mut sections = IndexMap::new();
        for section in raw.sections() {
            sections.insert(section.output_name(), section);
        }
        Self {
            sections,
            resolved: IndexMap::new(),
            visiting: Vec::new(),
        }
    }

    pub(super) fn resolve_all(mut self) -> Result<IndexMap<String, KeySet>, IniError> {
        let names: Vec<&'a str> = self.sections.keys().copied().collect();
        for name in names {
            self.resolve_section(name)?;
        }
        Ok(self.resolved)
    }

    fn resolve_section(&mut self, name: &'a str) -> Result<(), IniError> {
        if self.resolved.contains_key(name) {
            return Ok(());
        }
        if let Some(start) = self.visiting.iter().position(|visiting| *visiting == name) {
            let mut chain: Vec<String> = self.visiting[start..]
                .iter()
                .map(|visiting| visiting.to_string())
                .collect();
            chain.push(name.to_string());
            return Err(IniError::CyclicInheritance { chain });
        }
        let Some(section) = self.sections.get(name).copied() else {
            return Ok(());
        };

        self.visiting.push(name);
        let mut merged = KeySet::new();
        for ancestor in section.ancestors().into_iter().rev() {
            if !self.sections.contains_key(ancestor) {
                return Err(IniError::MissingAncestor {
                    section: name.to_string(),
                    ancestor: ancestor.to_string(),
                });
            }
            self.resolve_section(ancestor)?;
            if let Some(keys) = self.resolved.get(ancestor) {
                merged.extend(keys.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        merged.extend(
            section
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        self.visiting.pop();

        debug!(
            "resolved section (name={}, ancestors={}, keys={})",
            name,
            section.ancestors().len(),
            merged.len()
        );
        self.resolved.insert(name.to_string(), merged);
        Ok(())
    }
}
