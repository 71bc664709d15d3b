//! Flutter command runner
//!
//! Shells out to the flutter CLI with inherited stdio so its own progress
//! output stays visible. Build steps are best effort: a non-zero exit is
//! logged and packaging carries on, the release-folder check afterwards
//! decides whether the build actually produced anything.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{DistError, Result};
use crate::DesktopPlatform;

const FLUTTER_INSTALL_HINT: &str = "Install from https://flutter.dev/docs/get-started/install";

/// Runs flutter subcommands in a project directory
pub struct FlutterRunner {
    /// Path to flutter executable (auto-detected if None)
    flutter_path: Option<String>,
}

impl FlutterRunner {
    pub fn new() -> Self {
        Self { flutter_path: None }
    }

    pub fn with_flutter_path(path: impl Into<String>) -> Self {
        Self {
            flutter_path: Some(path.into()),
        }
    }

    fn flutter_cmd(&self) -> String {
        self.flutter_path
            .clone()
            .unwrap_or_else(|| "flutter".to_string())
    }

    /// Resolve the flutter executable, failing early when it is not there
    pub fn check_installed(&self) -> Result<PathBuf> {
        match &self.flutter_path {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(DistError::tool_not_found(
                        path.display().to_string(),
                        FLUTTER_INSTALL_HINT,
                    ));
                }
                Ok(path)
            }
            None => which::which("flutter")
                .map_err(|_| DistError::tool_not_found("flutter", FLUTTER_INSTALL_HINT)),
        }
    }

    fn run(&self, args: &[&str], path: &Path) -> Result<()> {
        debug!(command = %format!("flutter {}", args.join(" ")), "running");
        let status = Command::new(self.flutter_cmd())
            .args(args)
            .current_dir(path)
            .status()?;

        if !status.success() {
            warn!(
                command = %format!("flutter {}", args.join(" ")),
                code = status.code(),
                "flutter step exited non-zero"
            );
        }
        Ok(())
    }

    pub fn clean(&self, path: &Path) -> Result<()> {
        self.run(&["clean"], path)
    }

    pub fn pub_get(&self, path: &Path) -> Result<()> {
        self.run(&["pub", "get"], path)
    }

    pub fn build_release(&self, platform: DesktopPlatform, path: &Path) -> Result<()> {
        self.run(&["build", platform.build_subcommand(), "--release"], path)
    }
}

impl Default for FlutterRunner {
    fn default() -> Self {
        Self::new()
    }
}
