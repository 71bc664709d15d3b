//! Dist command

use clap::{Args, ValueEnum};
use tracing::info;

use preflight_core::FlutterProject;
use preflight_dist::{desktop_dir, package, DesktopPlatform, DistConfig, FlutterRunner};

use crate::cli::{output, Cli, OutputFormat};

/// Build and package a desktop release
#[derive(Debug, Args)]
pub struct DistCommand {
    /// Target platform
    #[arg(long, value_enum)]
    pub platform: DistPlatform,

    /// Path to the flutter executable (auto-detected if omitted)
    #[arg(long)]
    pub flutter_path: Option<String>,
}

/// Desktop platform argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistPlatform {
    /// Windows desktop (zip)
    Windows,
    /// Linux desktop (tar.gz)
    Linux,
}

impl From<DistPlatform> for DesktopPlatform {
    fn from(arg: DistPlatform) -> Self {
        match arg {
            DistPlatform::Windows => DesktopPlatform::Windows,
            DistPlatform::Linux => DesktopPlatform::Linux,
        }
    }
}

impl DistCommand {
    /// Execute the dist command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(platform = ?self.platform, "executing dist command");
        let project = FlutterProject::open(std::env::current_dir()?)?;
        let platform = DesktopPlatform::from(self.platform);
        let runner = match &self.flutter_path {
            Some(path) => FlutterRunner::with_flutter_path(path.clone()),
            None => FlutterRunner::new(),
        };

        let config = DistConfig::resolve(&project, platform)?;
        if cli.format == OutputFormat::Text && !cli.quiet {
            output::info(&format!(
                "Packaging {} {} for {}",
                config.slug, config.version, platform
            ));
        }

        let artifact = package(&project, platform, &runner, &desktop_dir()?)?;

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "path": artifact.path.display().to_string(),
                    "size": artifact.size,
                    "sha256": artifact.sha256,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success(&format!("Delivered {}", artifact.path.display()));
                    println!(
                        "{}",
                        output::key_value("size", &format!("{} bytes", artifact.size))
                    );
                    println!("{}", output::key_value("sha256", &artifact.sha256));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_arg_maps_to_domain() {
        assert_eq!(
            DesktopPlatform::from(DistPlatform::Windows),
            DesktopPlatform::Windows
        );
        assert_eq!(
            DesktopPlatform::from(DistPlatform::Linux),
            DesktopPlatform::Linux
        );
    }
}
