//! Check command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use preflight_checks::{run_checks, CheckError, CheckOptions};
use preflight_core::{AppIdentity, FlutterProject};

use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Check app metadata for release consistency
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Path to the app info JSON file
    pub app_info: PathBuf,

    /// Skip the Android checks
    #[arg(long)]
    pub skip_android: bool,

    /// Skip the iOS checks
    #[arg(long)]
    pub skip_ios: bool,

    /// Skip the stray Kotlin directory scan
    #[arg(long)]
    pub skip_kotlin: bool,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            app_info = %self.app_info.display(),
            skip_android = self.skip_android,
            skip_ios = self.skip_ios,
            "executing check command"
        );
        let project = FlutterProject::open(std::env::current_dir()?)?;
        let identity = AppIdentity::load(&self.app_info)?;
        let options = CheckOptions {
            skip_android: self.skip_android,
            skip_ios: self.skip_ios,
            skip_kotlin: self.skip_kotlin,
        };

        match run_checks(&project, &identity, &options) {
            Ok(()) => match cli.format {
                OutputFormat::Json => {
                    let output = serde_json::json!({ "valid": true });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => {
                    if !cli.quiet {
                        println!("{}", style("✓ All checks passed").green().bold());
                    }
                }
            },
            Err(err) => {
                report_failure(cli, &err)?;
                std::process::exit(exit_codes::ERROR);
            }
        }

        Ok(())
    }
}

/// Print one failed check. Diagnostics go to stdout so they land in the
/// same stream as the remediation snippets.
fn report_failure(cli: &Cli, err: &CheckError) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "valid": false,
                "error": err.to_string(),
                "detail": err.detail(),
                "check": err.hint().map(|p| p.display().to_string()),
                "remediation": err.remediation(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("{} {}", style("✗").red().bold(), err);
            if let Some(detail) = err.detail() {
                for line in detail.lines() {
                    println!("  {line}");
                }
            }
            if let Some(path) = err.hint() {
                println!("  check: {}", style(path.display()).cyan());
            }
            if let Some(snippet) = err.remediation() {
                println!();
                println!("{snippet}");
            }
        }
    }
    Ok(())
}
