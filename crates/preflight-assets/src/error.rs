//! Error types for asset generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;

/// Asset generation errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Master artwork missing
    #[error("Source artwork not found at {path}")]
    SourceMissing { path: PathBuf },

    /// Decode or encode failure
    #[error("Image operation failed for {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetError {
    /// Attach a path to an image error
    pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Image {
            path: path.into(),
            source,
        }
    }
}
