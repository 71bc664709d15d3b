//! CLI commands

mod check;
mod dist;
mod icons;
mod screens;
mod splash;

pub use check::CheckCommand;
pub use dist::DistCommand;
pub use icons::IconsCommand;
pub use screens::ScreensCommand;
pub use splash::SplashCommand;

use std::path::PathBuf;

use crate::cli::{output, Cli, OutputFormat};

/// Shared reporting for the generator commands: list what was written,
/// honoring the format and quiet/verbose flags.
pub(crate) fn report_written(cli: &Cli, written: &[PathBuf], noun: &str) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let files: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
            let output = serde_json::json!({ "written": files });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                if cli.verbose > 0 {
                    for path in written {
                        output::info(&format!("wrote {}", path.display()));
                    }
                }
                output::success(&format!("Wrote {} {}", written.len(), noun));
            }
        }
    }
    Ok(())
}
