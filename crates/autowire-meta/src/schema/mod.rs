//! Input schemas
//!
//! Both inputs are loaded through [`autowire_fs::ConfigStore`], so they may be
//! written as TOML, JSON or YAML:
//!
//! - the component catalog lists every configurable option to scan
//! - the type index describes the types visible to the build

pub mod catalog;
pub mod types;

pub use catalog::{ComponentCatalog, ComponentModel, ComponentOption};
pub use types::{MethodInfo, TypeIndexFile, TypeInfo, TypeKind, Visibility};
