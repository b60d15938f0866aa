//! Error types for autowire-core

use std::path::PathBuf;

/// Result type for autowire-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving and generating
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A type name is not present in the registry
    #[error("Type not found: {name}")]
    TypeNotFound { name: String },

    /// Mapping sources could not be loaded
    #[error("Invalid mappings from {source_name}: {message}")]
    InvalidMapping {
        source_name: String,
        message: String,
    },

    /// An output file could not be written
    #[error("Cannot write to file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: autowire_fs::Error,
    },

    /// Filesystem error from autowire-fs
    #[error(transparent)]
    Fs(#[from] autowire_fs::Error),

    /// Metadata error from autowire-meta
    #[error(transparent)]
    Meta(#[from] autowire_meta::Error),
}
