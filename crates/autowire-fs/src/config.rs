//! Format-agnostic loading of structured input files

use crate::{Error, Result, io};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Structured file store.
///
/// Detects the format from the file extension and handles
/// serialization/deserialization transparently. Catalogs, type indexes and
/// project settings all go through here.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a value from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = io::read_text(path)?;
        let extension = extension_of(path);

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error(path, "TOML", e)),
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(path, "JSON", e)),
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(path, "YAML", e))
            }
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn parse_error(path: &Path, format: &str, e: impl std::fmt::Display) -> Error {
    Error::ConfigParse {
        path: path.to_path_buf(),
        format: format.into(),
        message: e.to_string(),
    }
}
