//! Layered mapping resolution
//!
//! The `MappingResolver` loads the three mapping layers and folds them into a
//! single [`MappingTable`], with later layers replacing earlier ones per key.

use super::{MappingTable, builtin_mappings};
use crate::Result;
use autowire_fs::Properties;
use std::path::{Path, PathBuf};

/// Split an inline override on its first `=`.
///
/// Returns `None` when the key or the value is missing.
pub fn parse_inline(mapping: &str) -> Option<(&str, &str)> {
    let (key, value) = mapping.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Fold the three layers into one table.
///
/// Precedence, lowest to highest: `builtins`, `inline`, `file`. Malformed
/// inline entries are dropped silently.
pub fn resolve_layers(builtins: &Properties, inline: &[String], file: &Properties) -> MappingTable {
    let mut table = MappingTable::new();

    for (key, value) in builtins.iter() {
        table.put(key, value);
    }

    for mapping in inline {
        match parse_inline(mapping) {
            Some((key, value)) => {
                tracing::debug!(key, value, "Added inline mapping");
                table.put(key, value);
            }
            None => tracing::debug!(mapping = mapping.as_str(), "Ignoring malformed inline mapping"),
        }
    }

    for (key, value) in file.iter() {
        table.put(key, value);
    }

    table
}

/// Resolves the mapping table from built-ins, inline overrides and an
/// optional project-local mappings file.
#[derive(Debug, Clone, Default)]
pub struct MappingResolver {
    inline: Vec<String>,
    mappings_file: Option<PathBuf>,
}

impl MappingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add inline `key=value` overrides.
    pub fn with_inline<I, S>(mut self, mappings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inline.extend(mappings.into_iter().map(Into::into));
        self
    }

    /// Use a project-local mappings file. A missing file is not an error.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.mappings_file = Some(path.into());
        self
    }

    pub fn mappings_file(&self) -> Option<&Path> {
        self.mappings_file.as_deref()
    }

    /// Load every layer and build the table.
    ///
    /// Fails if the built-ins or an existing mappings file cannot be read or
    /// parsed.
    pub fn resolve(&self) -> Result<MappingTable> {
        let builtins = builtin_mappings()?;
        tracing::debug!(count = builtins.len(), "Loaded default mappings");

        let file = match &self.mappings_file {
            Some(path) => Properties::load_optional(path)?,
            None => Properties::new(),
        };
        if !file.is_empty() {
            tracing::debug!(
                path = ?self.mappings_file,
                count = file.len(),
                "Loaded mappings file"
            );
        }

        Ok(resolve_layers(&builtins, &self.inline, &file))
    }
}
