//! Built-in mapping defaults

use crate::{Error, Result};
use autowire_fs::Properties;

const DEFAULT_MAPPINGS: &str = include_str!("default-mappings.properties");

/// Load the built-in mapping defaults shipped with the crate.
pub fn builtin_mappings() -> Result<Properties> {
    Properties::parse(DEFAULT_MAPPINGS).map_err(|e| Error::InvalidMapping {
        source_name: "default-mappings.properties".into(),
        message: e.to_string(),
    })
}
