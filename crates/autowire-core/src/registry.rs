//! Type registry and documentation lookup
//!
//! The engine never introspects compiled output itself. It asks a
//! [`TypeRegistry`] to load types by name and to enumerate their subtypes, and
//! an optional [`DocLookup`] for member documentation. [`TypeIndex`] is the
//! static implementation of both, backed by a type index file.

use crate::{Error, Result};
use autowire_fs::ConfigStore;
use autowire_meta::{TypeIndexFile, TypeInfo};
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::path::Path;

/// Lookup of the types visible to the build.
pub trait TypeRegistry {
    /// Load a type by its fully-qualified name.
    fn load_type(&self, name: &str) -> Result<TypeInfo>;

    /// All direct and indirect subtypes of `ty`, without duplicates, ordered
    /// by name.
    fn subtypes_of(&self, ty: &TypeInfo) -> Vec<TypeInfo>;
}

/// Best-effort documentation lookup; absence is not an error.
pub trait DocLookup {
    fn doc_for(&self, owner: &str, member: &str) -> Option<String>;
}

/// In-memory type index.
#[derive(Debug, Clone, Default)]
pub struct TypeIndex {
    types: HashMap<String, TypeInfo>,
    /// Direct subtypes keyed by supertype name
    children: HashMap<String, BTreeSet<String>>,
}

impl TypeIndex {
    pub fn new(types: impl IntoIterator<Item = TypeInfo>) -> Self {
        let mut index = Self::default();
        for info in types {
            index.insert(info);
        }
        index
    }

    /// Load an index from a TOML, JSON or YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let file: TypeIndexFile = ConfigStore::new().load(path)?;
        tracing::debug!(?path, types = file.types.len(), "Loaded type index");
        Ok(Self::new(file.types))
    }

    /// Add a type. A later definition of the same name replaces the earlier
    /// one, hierarchy edges included.
    fn insert(&mut self, info: TypeInfo) {
        let name = info.name.clone();
        if let Some(previous) = self.types.remove(&name) {
            tracing::warn!(%name, "Duplicate type in index; keeping the last definition");
            for parent in previous.direct_supertypes() {
                if let Some(siblings) = self.children.get_mut(parent) {
                    siblings.remove(&name);
                }
            }
        }
        for parent in info.direct_supertypes() {
            self.children
                .entry(parent.to_string())
                .or_default()
                .insert(name.clone());
        }
        self.types.insert(name, info);
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeRegistry for TypeIndex {
    fn load_type(&self, name: &str) -> Result<TypeInfo> {
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| Error::TypeNotFound {
                name: name.to_string(),
            })
    }

    fn subtypes_of(&self, ty: &TypeInfo) -> Vec<TypeInfo> {
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([ty.name.as_str()]);

        while let Some(current) = queue.pop_front() {
            let Some(children) = self.children.get(current) else {
                continue;
            };
            for child in children {
                if child != &ty.name && seen.insert(child.as_str()) {
                    queue.push_back(child.as_str());
                }
            }
        }

        seen.into_iter()
            .filter_map(|name| self.types.get(name).cloned())
            .collect()
    }
}

impl DocLookup for TypeIndex {
    fn doc_for(&self, owner: &str, member: &str) -> Option<String> {
        self.types
            .get(owner)?
            .methods
            .iter()
            .filter(|m| m.name == member)
            .find_map(|m| m.doc.clone())
    }
}
