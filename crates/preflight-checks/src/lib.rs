//! Pre-release metadata consistency checks
//!
//! Cross-references the app identity (display name, application id, bundle
//! id) against every place the Flutter toolchain and the stores read it
//! from: version files, Android manifests, the Kotlin source tree, gradle,
//! Info.plist and the Xcode project.
//!
//! Checks run in a fixed order and the first failure aborts the run.

pub mod android;
pub mod error;
pub mod ios;
pub mod version;

pub use error::{CheckError, Result};

use tracing::info;

use preflight_core::{AppIdentity, FlutterProject};

/// Which check phases to run
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Skip all Android checks
    pub skip_android: bool,
    /// Skip all iOS checks
    pub skip_ios: bool,
    /// Skip the Kotlin source tree checks
    pub skip_kotlin: bool,
}

/// Run the full check sequence: versions, then Android, then iOS.
/// Returns on the first failure.
pub fn run_checks(
    project: &FlutterProject,
    identity: &AppIdentity,
    options: &CheckOptions,
) -> Result<()> {
    info!(
        name = %identity.name,
        package = %identity.package,
        "running release checks"
    );

    version::check(project)?;

    if options.skip_android {
        info!("skipping Android checks");
    } else {
        android::check(project, identity, options.skip_kotlin)?;
    }

    if options.skip_ios {
        info!("skipping iOS checks");
    } else {
        ios::check(project, identity)?;
    }

    Ok(())
}
