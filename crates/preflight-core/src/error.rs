//! Error types for the core project model

use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core project model errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// App info file could not be read
    #[error("Failed to read app info {path}: {source}")]
    AppInfoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// App info file is not the expected JSON shape
    #[error("Invalid app info {path}: {source}")]
    AppInfoParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The directory does not look like a Flutter project
    #[error("No pubspec.yaml found in {path}. Run this from the root of a Flutter project")]
    NotAProject { path: PathBuf },

    /// The packager's root guard failed
    #[error("{path} not found. Please run this from the root of the project")]
    NotProjectRoot { path: PathBuf },

    /// A project file could not be read
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No usable version marker in version.dart
    #[error("No quoted {marker} value found in {path}")]
    VersionNotFound { marker: &'static str, path: PathBuf },

    /// A required pubspec.yaml entry is absent
    #[error("No '{field}:' entry found in {path}")]
    PubspecFieldMissing { field: &'static str, path: PathBuf },
}

impl CoreError {
    /// Create a file read error with path context
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}
