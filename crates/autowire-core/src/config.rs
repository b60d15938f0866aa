//! Generation settings
//!
//! Settings come from the `[generate]` table of an optional `autowire.toml`
//! in the project root, then callers (the CLI) override individual fields.
//! Every field has a default, so an absent file yields a usable configuration.
//!
//! ```toml
//! [generate]
//! log_unmapped = true
//! exclude = ["kafka.*"]
//! mappings = ["org.apache.camel.spi.HeaderFilterStrategy=#class:com.example.MyStrategy"]
//! ```
//!
//! Relative paths are resolved against the project root.

use crate::Result;
use autowire_fs::ConfigStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project settings file.
pub const SETTINGS_FILE: &str = "autowire.toml";

/// Name of the generated binding file.
pub const BINDINGS_FILE: &str = "autowire.properties";

/// Name of the generated metadata document.
pub const METADATA_FILE: &str = "spring-configuration-metadata.json";

/// Everything that controls a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Resolve interface-typed options to implementations
    pub autowire_enabled: bool,
    /// Emit configuration metadata
    pub metadata_enabled: bool,
    /// Use documentation comments as descriptions of discovered options
    pub doc_lookup_enabled: bool,
    /// List the competing implementations when an option is ambiguous
    pub log_unmapped: bool,

    /// Prefix of every generated property key
    pub key_prefix: String,
    pub exclude: Vec<String>,
    pub include: Vec<String>,
    /// Inline `key=value` mapping overrides
    pub mappings: Vec<String>,
    /// Project-local mappings file
    pub mappings_file: PathBuf,

    /// Namespaces whose implementations are never selected
    pub own_namespaces: Vec<String>,
    /// Namespaces whose interfaces are never autowired
    pub platform_namespaces: Vec<String>,

    pub catalog: PathBuf,
    pub type_index: PathBuf,
    pub base_metadata: PathBuf,
    /// Directory receiving the binding file
    pub bindings_dir: PathBuf,
    /// Directory receiving the metadata document
    pub metadata_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            autowire_enabled: true,
            metadata_enabled: true,
            doc_lookup_enabled: true,
            log_unmapped: false,
            key_prefix: "camel.component".to_string(),
            exclude: Vec::new(),
            include: Vec::new(),
            mappings: Vec::new(),
            mappings_file: PathBuf::from("camel-main-mappings.properties"),
            own_namespaces: vec!["org.apache.camel".to_string()],
            platform_namespaces: vec!["java.".to_string()],
            catalog: PathBuf::from("catalog.toml"),
            type_index: PathBuf::from("types.toml"),
            base_metadata: PathBuf::from("META-INF/camel-main-configuration-metadata.json"),
            bindings_dir: PathBuf::from("target/classes/META-INF/services/org/apache/camel"),
            metadata_dir: PathBuf::from("src/main/resources/META-INF"),
        }
    }
}

impl GenerateOptions {
    /// Resolve every path field against `root`; absolute paths are kept.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        for path in [
            &mut self.mappings_file,
            &mut self.catalog,
            &mut self.type_index,
            &mut self.base_metadata,
            &mut self.bindings_dir,
            &mut self.metadata_dir,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
        self
    }

    pub fn bindings_path(&self) -> PathBuf {
        self.bindings_dir.join(BINDINGS_FILE)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.metadata_dir.join(METADATA_FILE)
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    generate: GenerateOptions,
}

/// Loads [`GenerateOptions`] for a project.
pub struct SettingsResolver {
    root: PathBuf,
}

impl SettingsResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn has_settings(&self) -> bool {
        self.root.join(SETTINGS_FILE).is_file()
    }

    /// Read `autowire.toml` if present, falling back to defaults.
    ///
    /// Paths in the result are still relative; see
    /// [`GenerateOptions::rooted_at`]. Invalid TOML is an error.
    pub fn resolve(&self) -> Result<GenerateOptions> {
        let path = self.root.join(SETTINGS_FILE);
        if !path.is_file() {
            tracing::debug!(?path, "No settings file found - using defaults");
            return Ok(GenerateOptions::default());
        }
        tracing::debug!(?path, "Loading settings");
        let settings: SettingsFile = ConfigStore::new().load(&path)?;
        Ok(settings.generate)
    }
}
