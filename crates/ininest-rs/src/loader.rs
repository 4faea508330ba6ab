//! File and string entry points.

use crate::{ConfigNode, IniError, lexer, resolver};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Tokenize and resolve INI source text.
pub fn load_from_str(src: &str) -> Result<ConfigNode, IniError> {
    debug!("loading config from raw contents (len={})", src.len());
    let raw = lexer::parse(src)?;
    resolver::resolve(&raw)
}

/// Read, tokenize and resolve an INI file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigNode, IniError> {
    let path = path.as_ref();
    info!("loading config from path: {}", path.display());
    let read_failed = |source: std::io::Error| IniError::ReadFailed {
        path: path.to_path_buf(),
        source,
    };
    if !path.is_file() {
        return Err(read_failed(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "not a readable file",
        )));
    }
    let contents = fs::read_to_string(path).map_err(read_failed)?;
    load_from_str(&contents)
}

/// An owned, resolved configuration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniTree {
    root: ConfigNode,
}

impl IniTree {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, IniError> {
        load_from_path(path).map(|root| Self { root })
    }

    pub fn load_from_str(src: &str) -> Result<Self, IniError> {
        load_from_str(src).map(|root| Self { root })
    }

    /// Look up a node by dotted path, starting with the section name.
    pub fn get(&self, path: &str) -> Option<&ConfigNode> {
        self.root.lookup(path)
    }

    /// The object node for a top-level section.
    pub fn section(&self, name: &str) -> Option<&ConfigNode> {
        self.root.get(name)
    }

    /// Names of all top-level sections, sorted.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.root
            .as_object()
            .into_iter()
            .flat_map(|sections| sections.keys().map(String::as_str))
    }

    pub fn root(&self) -> &ConfigNode {
        &self.root
    }

    pub fn into_root(self) -> ConfigNode {
        self.root
    }
}
