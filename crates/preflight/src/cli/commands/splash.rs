//! Splash command

use clap::Args;
use tracing::info;

use preflight_assets::splash::generate_splash;
use preflight_core::FlutterProject;

use crate::cli::commands::report_written;
use crate::cli::{output, Cli, OutputFormat};

/// Generate Android splash logos
#[derive(Debug, Args)]
pub struct SplashCommand {}

impl SplashCommand {
    /// Execute the splash command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing splash command");
        let project = FlutterProject::open(std::env::current_dir()?)?;

        let written = generate_splash(&project)?;
        if written.is_empty() && cli.format == OutputFormat::Text {
            if !cli.quiet {
                output::warning("No drawable directories with a known density qualifier");
            }
            return Ok(());
        }

        report_written(cli, &written, "splash logos")
    }
}
