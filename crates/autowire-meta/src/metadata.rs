//! Configuration metadata document
//!
//! The generator collects one [`PropertyDescriptor`] per discovered option and
//! one [`GroupDescriptor`] per owning component, then appends them to a base
//! document that already carries `properties` and `groups` arrays. Entries of
//! the base document are never touched; key order is preserved, so merging the
//! same inputs twice yields byte-identical output.

use crate::{Error, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::path::Path;

const PROPERTIES: &str = "properties";
const GROUPS: &str = "groups";

/// Widen a primitive type name to its boxed equivalent.
///
/// Matching is case-insensitive; other types pass through unchanged.
pub fn widen_type(java_type: &str) -> &str {
    match java_type.to_ascii_lowercase().as_str() {
        "boolean" => "java.lang.Boolean",
        "int" => "java.lang.Integer",
        "long" => "java.lang.Long",
        "string" => "java.lang.String",
        _ => java_type,
    }
}

/// A single configuration property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    /// Dotted property key (e.g., "camel.component.kafka.header-filter-strategy")
    pub name: String,
    /// Declared type; widened on emission
    pub java_type: String,
    pub description: String,
    /// Type that declares the option
    pub source_type: String,
    pub default_value: Option<Value>,
    pub deprecated: bool,
}

impl Serialize for PropertyDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("type", widen_type(&self.java_type))?;
        map.serialize_entry("sourceType", &self.source_type)?;
        map.serialize_entry("description", &self.description)?;
        if let Some(default_value) = &self.default_value {
            map.serialize_entry("defaultValue", default_value)?;
        }
        if self.deprecated {
            map.serialize_entry("deprecated", &true)?;
            map.serialize_entry("deprecation", &Map::new())?;
        }
        map.end()
    }
}

/// A group of properties sharing a key prefix.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDescriptor {
    pub name: String,
    pub description: String,
    pub source_type: String,
}

/// The base metadata document, kept as an ordered JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataDocument {
    root: Map<String, Value>,
}

impl MetadataDocument {
    /// Parse a document, requiring `properties` and `groups` arrays.
    pub fn parse(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(root) = value else {
            return Err(Error::InvalidMetadata {
                message: "top-level value is not an object".into(),
            });
        };
        for section in [PROPERTIES, GROUPS] {
            if !root.get(section).is_some_and(Value::is_array) {
                return Err(Error::InvalidMetadata {
                    message: format!("missing \"{section}\" array"),
                });
            }
        }
        Ok(Self { root })
    }

    /// Load the base document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MetadataNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = autowire_fs::io::read_text(path)?;
        Self::parse(&content)
    }

    pub fn properties(&self) -> &[Value] {
        self.section(PROPERTIES)
    }

    pub fn groups(&self) -> &[Value] {
        self.section(GROUPS)
    }

    fn section(&self, name: &str) -> &[Value] {
        self.root
            .get(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn section_mut(&mut self, name: &str) -> Result<&mut Vec<Value>> {
        self.root
            .get_mut(name)
            .and_then(Value::as_array_mut)
            .ok_or_else(|| Error::InvalidMetadata {
                message: format!("missing \"{name}\" array"),
            })
    }

    /// Append descriptors after the existing entries, in the given order.
    pub fn append(
        &mut self,
        properties: &[PropertyDescriptor],
        groups: &[GroupDescriptor],
    ) -> Result<()> {
        let properties = properties
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let groups = groups
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        self.section_mut(PROPERTIES)?.extend(properties);
        self.section_mut(GROUPS)?.extend(groups);
        Ok(())
    }

    /// Render with two-space indentation.
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}

/// Append the collected descriptors to `base` and render the result.
pub fn merge(
    mut base: MetadataDocument,
    properties: &[PropertyDescriptor],
    groups: &[GroupDescriptor],
) -> Result<String> {
    tracing::debug!(
        existing_properties = base.properties().len(),
        existing_groups = base.groups().len(),
        added_properties = properties.len(),
        added_groups = groups.len(),
        "Merging configuration metadata"
    );
    base.append(properties, groups)?;
    base.to_pretty_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn property(deprecated: bool, default_value: Option<Value>) -> PropertyDescriptor {
        PropertyDescriptor {
            name: "camel.component.kafka.bridge-error-handler".into(),
            java_type: "boolean".into(),
            description: "Allows for bridging the consumer to the error handler.".into(),
            source_type: "org.apache.camel.component.kafka.KafkaComponent".into(),
            default_value,
            deprecated,
        }
    }

    #[test]
    fn widen_type_handles_primitives_case_insensitively() {
        assert_eq!(widen_type("boolean"), "java.lang.Boolean");
        assert_eq!(widen_type("Int"), "java.lang.Integer");
        assert_eq!(widen_type("LONG"), "java.lang.Long");
        assert_eq!(widen_type("String"), "java.lang.String");
        assert_eq!(widen_type("double"), "double");
        assert_eq!(widen_type("com.example.Engine"), "com.example.Engine");
    }

    #[test]
    fn property_serializes_required_fields_in_order() {
        let value = serde_json::to_string(&property(false, None)).unwrap();
        assert_eq!(
            value,
            r#"{"name":"camel.component.kafka.bridge-error-handler","type":"java.lang.Boolean","sourceType":"org.apache.camel.component.kafka.KafkaComponent","description":"Allows for bridging the consumer to the error handler."}"#
        );
    }

    #[test]
    fn property_includes_default_and_deprecation_only_when_set() {
        let value = serde_json::to_value(property(true, Some(json!(false)))).unwrap();
        assert_eq!(value["defaultValue"], json!(false));
        assert_eq!(value["deprecated"], json!(true));
        assert_eq!(value["deprecation"], json!({}));
    }

    #[test]
    fn parse_rejects_document_without_groups() {
        let err = MetadataDocument::parse(r#"{"properties": []}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidMetadata { .. }));
    }

    #[test]
    fn parse_rejects_non_object_document() {
        let err = MetadataDocument::parse("[]").unwrap_err();
        assert!(matches!(err, Error::InvalidMetadata { .. }));
    }
}
