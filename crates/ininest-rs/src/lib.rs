//! INI configuration with section inheritance, nested keys and arrays.
//!
//! Sections may inherit from others (`[child : parent]`), dotted keys
//! (`db.host = x`) expand into nested objects and bracketed values
//! (`[a, b]`) become string arrays. The result is a [`ConfigNode`] tree.

mod error;
pub mod lexer;
mod loader;
mod node;
mod raw;
pub mod resolver;
pub mod value;

/// Error type returned by loading and resolution.
pub use error::IniError;
/// File and string entry points.
pub use loader::{IniTree, load_from_path, load_from_str};
/// Resolved tree types.
pub use node::{ConfigNode, ObjectMap};
/// Flat input types produced by the tokenizer.
pub use raw::{KeySet, RawConfig, RawSection};
/// Tree resolution.
pub use resolver::resolve;
