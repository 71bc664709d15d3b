//! Icons command

use clap::{Args, ValueEnum};
use tracing::info;

use preflight_assets::icons::{generate_android_icons, generate_ios_icons, generate_windows_icon};
use preflight_core::FlutterProject;

use crate::cli::commands::report_written;
use crate::cli::Cli;

/// Generate launcher and app icons from the master artwork
#[derive(Debug, Args)]
pub struct IconsCommand {
    /// Platform to generate icons for
    #[arg(long, value_enum, default_value = "all")]
    pub platform: IconPlatform,
}

/// Icon target platform argument
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum IconPlatform {
    /// Android launcher icons
    Android,
    /// iOS app icon set
    Ios,
    /// Windows ICO
    Windows,
    /// All platforms
    #[default]
    All,
}

impl IconsCommand {
    /// Execute the icons command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(platform = ?self.platform, "executing icons command");
        let project = FlutterProject::open(std::env::current_dir()?)?;

        let mut written = Vec::new();
        if matches!(self.platform, IconPlatform::Android | IconPlatform::All) {
            written.extend(generate_android_icons(&project)?);
        }
        if matches!(self.platform, IconPlatform::Ios | IconPlatform::All) {
            written.extend(generate_ios_icons(&project)?);
        }
        if matches!(self.platform, IconPlatform::Windows | IconPlatform::All) {
            written.push(generate_windows_icon(&project)?);
        }

        report_written(cli, &written, "icon files")
    }
}
