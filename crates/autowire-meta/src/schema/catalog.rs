//! Component catalog schema
//!
//! The catalog enumerates components and their options. Every option yields a
//! configuration property; options whose kind is `object` are also candidates
//! for autowiring.
//!
//! # Example TOML
//!
//! ```toml
//! [[components]]
//! name = "kafka"
//! java_type = "org.apache.camel.component.kafka.KafkaComponent"
//! description = "Sent and receive messages to/from an Apache Kafka broker."
//!
//! [[components.options]]
//! name = "headerFilterStrategy"
//! kind = "object"
//! java_type = "org.apache.camel.spi.HeaderFilterStrategy"
//! description = "To use a custom HeaderFilterStrategy."
//!
//! [[components.options]]
//! name = "bridgeErrorHandler"
//! kind = "boolean"
//! java_type = "boolean"
//! default_value = false
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// All components to scan.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ComponentCatalog {
    #[serde(default)]
    pub components: Vec<ComponentModel>,
}

/// A component and its configurable options.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentModel {
    /// Short component name used in property keys (e.g., "kafka")
    pub name: String,
    /// Fully-qualified type implementing the component
    pub java_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub options: Vec<ComponentOption>,
}

/// A single configurable option of a component.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentOption {
    /// Camel-case option name (e.g., "headerFilterStrategy")
    pub name: String,
    /// Catalog kind: "string", "boolean", "integer", "object", ...
    pub kind: String,
    /// Declared type; primitives use their short names
    pub java_type: String,
    #[serde(default)]
    pub description: String,
    /// Any JSON-compatible default; numbers and booleans keep their type
    #[serde(default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub deprecated: bool,
}

impl ComponentOption {
    /// Whether the option refers to a complex object rather than a value.
    pub fn is_object(&self) -> bool {
        self.kind == "object"
    }
}
