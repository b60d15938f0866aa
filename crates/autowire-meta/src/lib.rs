//! Data models for autowire.
//!
//! This crate holds the strongly-typed inputs (component catalog, static type
//! index) and the configuration metadata document the generator produces.

pub mod error;
pub mod metadata;
pub mod schema;

pub use error::{Error, Result};
pub use metadata::{GroupDescriptor, MetadataDocument, PropertyDescriptor, widen_type};
pub use schema::{
    ComponentCatalog, ComponentModel, ComponentOption, MethodInfo, TypeIndexFile, TypeInfo,
    TypeKind, Visibility,
};
