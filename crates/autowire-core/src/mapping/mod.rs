//! Mapping tables between abstract types and preferred implementations
//!
//! A mapping value is a `;`-separated, ordered list of candidate names for one
//! abstract type. Each entry may carry a tag saying how the winner is emitted:
//!
//! - `#class:<name>` - bind an instance of the class (the default)
//! - `#type:<name>` - bind by type lookup
//! - `#skip#` - never resolve this abstract type automatically
//!
//! Mappings come from three layers, lowest precedence first:
//!
//! 1. **Built-in defaults** shipped with the crate
//! 2. **Inline overrides** given as `key=value` strings
//! 3. **Mappings file** - an optional project-local `.properties` file
//!
//! A key in a later layer replaces the whole value of an earlier one.

mod builtins;
mod resolver;

pub use builtins::builtin_mappings;
pub use resolver::{MappingResolver, parse_inline, resolve_layers};

use std::collections::BTreeMap;
use std::fmt;

/// Value meaning "explicitly skip resolution for this type".
pub const SKIP_SENTINEL: &str = "#skip#";

const CLASS_TAG: &str = "#class:";
const TYPE_TAG: &str = "#type:";

/// How a resolved implementation is emitted into the binding file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingKind {
    #[default]
    Class,
    Type,
}

impl BindingKind {
    /// Prefix written in front of the implementation name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Class => CLASS_TAG,
            Self::Type => TYPE_TAG,
        }
    }
}

/// One entry of a mapping value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateRef {
    Skip,
    Named { name: String, kind: BindingKind },
}

impl CandidateRef {
    /// Parse a single entry, stripping an optional tag.
    pub fn parse(entry: &str) -> Self {
        if entry == SKIP_SENTINEL {
            return Self::Skip;
        }
        let (name, kind) = if let Some(name) = entry.strip_prefix(CLASS_TAG) {
            (name, BindingKind::Class)
        } else if let Some(name) = entry.strip_prefix(TYPE_TAG) {
            (name, BindingKind::Type)
        } else {
            (entry, BindingKind::Class)
        };
        Self::Named {
            name: name.to_string(),
            kind,
        }
    }
}

/// Resolved mapping for one abstract type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub abstract_type: String,
    /// Raw value as written in the winning layer
    pub raw: String,
    pub candidates: Vec<CandidateRef>,
}

impl MappingEntry {
    pub fn new(abstract_type: impl Into<String>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let candidates = raw
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(CandidateRef::parse)
            .collect();
        Self {
            abstract_type: abstract_type.into(),
            raw,
            candidates,
        }
    }
}

/// The final lookup from abstract type name to candidate list.
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: BTreeMap<String, MappingEntry>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or wholly replace the mapping for a key.
    pub(crate) fn put(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), MappingEntry::new(key, value));
    }

    pub fn get(&self, abstract_type: &str) -> Option<&MappingEntry> {
        self.entries.get(abstract_type)
    }

    /// Entries sorted by abstract type name.
    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.iter() {
            writeln!(f, "{}={}", entry.abstract_type, entry.raw)?;
        }
        Ok(())
    }
}
