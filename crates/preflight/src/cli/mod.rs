//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{CheckCommand, DistCommand, IconsCommand, ScreensCommand, SplashCommand};

/// Preflight - pre-release pipeline for Flutter apps
#[derive(Debug, Parser)]
#[command(name = "preflight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase console log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check app metadata for release consistency
    Check(CheckCommand),

    /// Generate launcher and app icons from the master artwork
    Icons(IconsCommand),

    /// Generate Android splash logos
    Splash(SplashCommand),

    /// Resize App Store screenshots
    Screens(ScreensCommand),

    /// Build and package a desktop release
    Dist(DistCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Check(ref cmd) => cmd.execute(&self),
            Commands::Icons(ref cmd) => cmd.execute(&self),
            Commands::Splash(ref cmd) => cmd.execute(&self),
            Commands::Screens(ref cmd) => cmd.execute(&self),
            Commands::Dist(ref cmd) => cmd.execute(&self),
        }
    }
}
