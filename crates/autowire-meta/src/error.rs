//! Error types for autowire-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] autowire_fs::Error),

    #[error("Base metadata document not found at {path}")]
    MetadataNotFound { path: PathBuf },

    #[error("Invalid metadata document: {message}")]
    InvalidMetadata { message: String },

    #[error("Cannot serialize or deserialize metadata: {0}")]
    Json(#[from] serde_json::Error),
}
