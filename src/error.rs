//! Error types for loading RDF indexes
//!
//! Serialization itself never fails; these errors only arise while reading
//! and decoding input before it reaches the serializer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("Failed to load input from {path}: {reason}")]
    LoadError { path: String, reason: String },

    #[error("Invalid input in {origin}: {reason}")]
    InvalidInput { origin: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),
}
