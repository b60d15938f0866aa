//! Static type index schema
//!
//! Describes the types visible to the build: their kind, modifiers, place in
//! the hierarchy and public methods. The index stands in for runtime
//! introspection of compiled output.
//!
//! # Example TOML
//!
//! ```toml
//! [[types]]
//! name = "com.example.Engine"
//! kind = "interface"
//!
//! [[types]]
//! name = "com.example.V8Engine"
//! interfaces = ["com.example.Engine"]
//!
//! [[types.methods]]
//! name = "setCylinders"
//! parameters = ["int"]
//! doc = "Number of cylinders."
//! ```

use serde::{Deserialize, Serialize};

/// On-disk shape of a type index.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TypeIndexFile {
    #[serde(default)]
    pub types: Vec<TypeInfo>,
}

/// What sort of type an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Interface,
    #[default]
    Class,
    Primitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Public,
    NonPublic,
}

/// A type known to the build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TypeInfo {
    /// Fully-qualified, dot-separated name
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Enclosing type for nested types
    #[serde(default)]
    pub enclosing: Option<String>,
    #[serde(default)]
    pub super_type: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

impl TypeInfo {
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn is_primitive(&self) -> bool {
        self.kind == TypeKind::Primitive
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_top_level(&self) -> bool {
        self.enclosing.is_none()
    }

    /// Direct supertypes: the super type followed by implemented interfaces.
    pub fn direct_supertypes(&self) -> impl Iterator<Item = &str> {
        self.super_type
            .iter()
            .chain(self.interfaces.iter())
            .map(String::as_str)
    }
}

/// A public method of a type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MethodInfo {
    pub name: String,
    /// Fully-qualified parameter types, in order
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub deprecated: bool,
    /// Documentation comment text, if extracted
    #[serde(default)]
    pub doc: Option<String>,
}

impl MethodInfo {
    /// A setter is named `set<X>` and takes exactly one parameter.
    pub fn is_setter(&self) -> bool {
        self.parameters.len() == 1
            && self
                .name
                .strip_prefix("set")
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| c.is_uppercase())
    }

    /// Property name a setter writes: `setFooBar` -> `fooBar`.
    pub fn setter_shorthand(&self) -> Option<String> {
        if !self.is_setter() {
            return None;
        }
        let rest = &self.name[3..];
        let mut chars = rest.chars();
        let first = chars.next()?;
        Some(first.to_lowercase().chain(chars).collect())
    }
}
