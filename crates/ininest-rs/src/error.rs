//! Error types for loading and resolving INI configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while loading, tokenizing, or resolving a config.
#[derive(Debug, Error)]
pub enum IniError {
    /// The source file is missing or could not be read.
    #[error("the file '{}' cannot be opened: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A line of the source text could not be tokenized.
    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },
    /// An inheritance chain names a section that does not exist.
    #[error("section '{section}' inherits from unknown section '{ancestor}'")]
    MissingAncestor { section: String, ancestor: String },
    /// Sections inherit from each other in a loop.
    #[error("cyclic section inheritance: {}", chain.join(" -> "))]
    CyclicInheritance { chain: Vec<String> },
}

impl IniError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}
