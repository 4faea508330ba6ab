//! Leaf value classification.

use crate::ConfigNode;
use regex::Regex;
use std::sync::LazyLock;

/// A bracketed, comma-delimited list anywhere in the value.
static ARRAY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\[\s*.*?(?:\s*,\s*.*?)*\s*\]").ok());

/// Returns true when `raw` is written with bracket-array syntax.
pub fn is_array(raw: &str) -> bool {
    let Some(pattern) = ARRAY_PATTERN.as_ref() else {
        return false;
    };
    pattern.is_match(raw)
}

/// Convert a raw value into a scalar or array leaf.
///
/// Array values have all whitespace removed, then one leading `[` and one
/// trailing `]` stripped, and are split on `,`. Empty slots are kept, so
/// `[a,,b]` yields `["a", "", "b"]`. Anything else is returned unchanged.
pub fn parse_value(raw: &str) -> ConfigNode {
    if !is_array(raw) {
        return ConfigNode::Scalar(raw.to_string());
    }

    let compact: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    let inner = compact.strip_prefix('[').unwrap_or(&compact);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    ConfigNode::Array(inner.split(',').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn array(items: &[&str]) -> ConfigNode {
        ConfigNode::Array(items.iter().map(|item| item.to_string()).collect())
    }

    #[test]
    fn plain_values_are_returned_unchanged() {
        for raw in ["", "hello", "  padded  ", "a, b, c", "[unclosed", "closed]", "\"quoted\""] {
            assert_eq!(parse_value(raw), ConfigNode::Scalar(raw.to_string()));
        }
    }

    #[test]
    fn bracket_lists_become_arrays() {
        assert_eq!(parse_value("[a, b, c]"), array(&["a", "b", "c"]));
        assert_eq!(parse_value("  [ a ,b,   c ]  "), array(&["a", "b", "c"]));
        assert_eq!(parse_value("[single]"), array(&["single"]));
    }

    #[test]
    fn empty_slots_are_preserved() {
        assert_eq!(parse_value("[a,,b]"), array(&["a", "", "b"]));
        assert_eq!(parse_value("[]"), array(&[""]));
        assert_eq!(parse_value("[a, b,]"), array(&["a", "b", ""]));
    }

    #[test]
    fn inner_whitespace_is_removed_from_items() {
        assert_eq!(
            parse_value("[hello world, foo\tbar]"),
            array(&["helloworld", "foobar"])
        );
    }

    #[test]
    fn array_pattern_compiles() {
        assert!(ARRAY_PATTERN.is_some());
    }

    #[test]
    fn only_one_bracket_pair_is_stripped() {
        assert_eq!(parse_value("[[a], [b]]"), array(&["[a]", "[b]"]));
    }

    #[test]
    fn embedded_brackets_still_classify_as_array() {
        assert!(is_array("prefix [x] suffix"));
        assert_eq!(parse_value("prefix [x] suffix"), array(&["prefix[x]suffix"]));
    }

    #[test]
    fn duplicates_keep_order() {
        assert_eq!(parse_value("[b, a, b]"), array(&["b", "a", "b"]));
    }
}
