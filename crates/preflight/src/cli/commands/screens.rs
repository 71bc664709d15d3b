//! Screens command

use clap::Args;
use tracing::info;

use preflight_assets::screens::generate_screens;
use preflight_core::FlutterProject;

use crate::cli::commands::report_written;
use crate::cli::Cli;

/// Resize App Store screenshots
#[derive(Debug, Args)]
pub struct ScreensCommand {}

impl ScreensCommand {
    /// Execute the screens command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing screens command");
        let project = FlutterProject::open(std::env::current_dir()?)?;

        let written = generate_screens(&project)?;
        report_written(cli, &written, "screenshots")
    }
}
