//! Minimal INI tokenizer producing a [`RawConfig`].
//!
//! Handles `[section]` headers, `key = value` pairs, full-line `;`/`#`
//! comments and single or double quoted values. A `;` or `#` that follows
//! whitespace starts an inline comment after a header, a quoted value or an
//! unquoted value. Keys and values are returned as plain strings; no
//! further interpretation happens here.

use crate::{IniError, RawConfig, RawSection};
use log::debug;

/// Split INI source text into sections and key/value pairs.
pub fn parse(src: &str) -> Result<RawConfig, IniError> {
    let mut raw = RawConfig::new();
    let mut current: Option<RawSection> = None;

    for (idx, line) in src.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let Some((name, rest)) = header.split_once(']') else {
                return Err(IniError::syntax(line_no, "unterminated section header"));
            };
            if !is_comment_or_empty(rest) {
                return Err(IniError::syntax(
                    line_no,
                    "unexpected text after section header",
                ));
            }
            let name = name.trim();
            if name.is_empty() {
                return Err(IniError::syntax(line_no, "empty section name"));
            }
            if let Some(section) = current.take() {
                raw.push(section);
            }
            current = Some(RawSection::new(name));
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(IniError::syntax(line_no, "expected `key = value`"));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(IniError::syntax(line_no, "missing key before `=`"));
        }
        let Some(section) = current.as_mut() else {
            return Err(IniError::syntax(
                line_no,
                format!("key '{key}' appears before any section header"),
            ));
        };
        section.insert(key, parse_raw_value(value.trim(), line_no)?);
    }

    if let Some(section) = current {
        raw.push(section);
    }
    debug!("tokenized {} section(s)", raw.len());
    Ok(raw)
}

fn parse_raw_value(value: &str, line_no: usize) -> Result<String, IniError> {
    let quote = match value.chars().next() {
        Some(quote @ ('"' | '\'')) => quote,
        _ => return Ok(strip_inline_comment(value).to_string()),
    };

    let body = &value[1..];
    let Some(end) = body.find(quote) else {
        return Err(IniError::syntax(line_no, "unterminated quoted value"));
    };
    if !is_comment_or_empty(&body[end + 1..]) {
        return Err(IniError::syntax(
            line_no,
            "unexpected text after quoted value",
        ));
    }
    Ok(body[..end].to_string())
}

fn is_comment_or_empty(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.is_empty() || rest.starts_with(';') || rest.starts_with('#')
}

/// Cut an unquoted value at a `;` or `#` that opens it or follows whitespace.
fn strip_inline_comment(value: &str) -> &str {
    let bytes = value.as_bytes();
    for (idx, _) in value.match_indices([';', '#']) {
        if idx == 0 || bytes[idx - 1].is_ascii_whitespace() {
            return value[..idx].trim_end();
        }
    }
    value
}
