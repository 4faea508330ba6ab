//! Flat section mapping produced by the tokenizer.

use indexmap::IndexMap;

/// Ordered key/value pairs of a single section.
///
/// Re-inserting a key replaces its value but keeps its first position.
pub type KeySet = IndexMap<String, String>;

/// A section as written in the source, before inheritance is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSection {
    /// Header text, possibly an inheritance chain such as `child : parent`.
    pub name: String,
    /// Declared keys in source order.
    pub entries: KeySet,
}

impl RawSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: KeySet::new(),
        }
    }

    /// Add an entry, replacing any earlier value for the same key.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// The output section name: the leftmost element of the chain.
    pub fn output_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((root, _)) => root.trim(),
            None => &self.name,
        }
    }

    /// Ancestors named in the header, nearest first.
    pub fn ancestors(&self) -> Vec<&str> {
        self.name.split(':').skip(1).map(str::trim).collect()
    }
}

/// Section-name to key-set mapping in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    sections: Vec<RawSection>,
}

impl RawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section, builder style.
    pub fn with_section(mut self, section: RawSection) -> Self {
        self.push(section);
        self
    }

    /// Append a section. A header seen before has its entries merged into
    /// the existing section instead.
    pub fn push(&mut self, section: RawSection) {
        match self.section_mut(&section.name) {
            Some(existing) => existing.entries.extend(section.entries),
            None => self.sections.push(section),
        }
    }

    /// Look up a section by its exact header text.
    pub fn section(&self, name: &str) -> Option<&RawSection> {
        self.sections.iter().find(|section| section.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut RawSection> {
        self.sections.iter_mut().find(|section| section.name == name)
    }

    pub fn sections(&self) -> &[RawSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl FromIterator<RawSection> for RawConfig {
    fn from_iter<I: IntoIterator<Item = RawSection>>(iter: I) -> Self {
        let mut raw = Self::new();
        for section in iter {
            raw.push(section);
        }
        raw
    }
}
