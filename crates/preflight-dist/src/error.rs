//! Error types for release packaging

use std::path::PathBuf;
use thiserror::Error;

use preflight_core::CoreError;

/// Result type for packaging operations
pub type Result<T> = std::result::Result<T, DistError>;

/// Release packaging errors
#[derive(Error, Debug)]
pub enum DistError {
    /// Build tool not installed
    #[error("Required tool '{tool}' not found. {install_hint}")]
    ToolNotFound { tool: String, install_hint: String },

    /// Build finished but left no release bundle behind
    #[error("Release folder not found at {path}. Did the flutter build succeed?")]
    ReleaseDirMissing { path: PathBuf },

    /// No home directory to deliver the archive to
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    /// Project layout error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Zip write error
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DistError {
    /// Create a tool not found error with install hint
    pub fn tool_not_found(tool: impl Into<String>, install_hint: impl Into<String>) -> Self {
        Self::ToolNotFound {
            tool: tool.into(),
            install_hint: install_hint.into(),
        }
    }
}
