//! Order-preserving `.properties` reader
//!
//! Supports the subset of the format that mapping tables use:
//!
//! - `#` and `!` comment lines, blank lines
//! - `key=value`, `key:value` and `key value` separators
//! - backslash line continuations
//! - `\t`, `\n`, `\r`, `\f`, `\uXXXX` and literal-character escapes
//!
//! Re-setting an existing key replaces its value in place, so iteration order
//! is the order in which keys were first seen.
//!
//! Files are read as UTF-8, falling back to ISO-8859-1 when the bytes are not
//! valid UTF-8.

use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// An ordered set of string key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties from text.
    pub fn parse(content: &str) -> Result<Self> {
        let mut properties = Self::new();
        let mut lines = content.lines().enumerate();

        while let Some((index, raw)) = lines.next() {
            let first_line = index + 1;
            let trimmed = raw.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let mut logical = String::new();
            let mut current = trimmed;
            while ends_with_continuation(current) {
                logical.push_str(&current[..current.len() - 1]);
                match lines.next() {
                    Some((_, next)) => current = next.trim_start(),
                    None => {
                        current = "";
                        break;
                    }
                }
            }
            logical.push_str(current);

            let (key, value) = split_entry(&logical);
            let key = unescape(key, first_line)?;
            let value = unescape(value, first_line)?;
            properties.set(key, value);
        }

        Ok(properties)
    }

    /// Load properties from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let content = decode(bytes);
        Self::parse(&content).map_err(|e| match e {
            Error::InvalidProperties { line, message } => Error::ConfigParse {
                path: path.to_path_buf(),
                format: "properties".into(),
                message: format!("line {line}: {message}"),
            },
            other => other,
        })
    }

    /// Load properties from a file when it exists.
    ///
    /// A missing path yields an empty set rather than an error.
    pub fn load_optional(path: &Path) -> Result<Self> {
        if path.is_file() {
            tracing::debug!(?path, "Loading properties file");
            Self::load(path)
        } else {
            tracing::debug!(?path, "No properties file found - skipping");
            Ok(Self::new())
        }
    }

    /// Set a value, replacing any previous value for the key in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        tracing::debug!("Properties file is not UTF-8 - reading as ISO-8859-1");
        e.into_bytes().into_iter().map(char::from).collect()
    })
}

fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    trailing % 2 == 1
}

/// Split a logical line into raw key and raw value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\u{c}' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches([' ', '\t', '\u{c}']);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches([' ', '\t', '\u{c}']);
    }
    (key, rest)
}

fn unescape(raw: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = Some(hex.as_str())
                    .filter(|h| h.len() == 4 && h.chars().all(|c| c.is_ascii_hexdigit()))
                    .and_then(|h| u32::from_str_radix(h, 16).ok())
                    .and_then(char::from_u32)
                    .ok_or_else(|| Error::InvalidProperties {
                        line,
                        message: format!("malformed \\u escape: \\u{hex}"),
                    })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_first_seen_order() {
        let props = Properties::parse("b=2\na=1\nb=3\n").unwrap();
        let entries: Vec<_> = props.iter().collect();
        assert_eq!(entries, vec![("b", "3"), ("a", "1")]);
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let props = Properties::parse("# comment\n! also\n\n  key = value  \n").unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("key"), Some("value  "));
    }

    #[test]
    fn parse_joins_continuation_lines() {
        let props = Properties::parse("key=first;\\\n    second\n").unwrap();
        assert_eq!(props.get("key"), Some("first;second"));
    }

    #[test]
    fn parse_rejects_malformed_unicode_escape() {
        let err = Properties::parse("ok=1\nbad=\\u12G4\n").unwrap_err();
        assert!(matches!(err, Error::InvalidProperties { line: 2, .. }));
    }

    #[test]
    fn parse_rejects_signed_unicode_escape() {
        let err = Properties::parse("bad=\\u+123\n").unwrap_err();
        assert!(matches!(err, Error::InvalidProperties { line: 1, .. }));
    }

    #[test]
    fn decode_falls_back_to_latin1() {
        assert_eq!(decode(b"caf\xe9=ok".to_vec()), "caf\u{e9}=ok");
        assert_eq!(decode("café=ok".as_bytes().to_vec()), "café=ok");
    }
}
