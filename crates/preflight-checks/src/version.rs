//! Version consistency check

use tracing::debug;

use preflight_core::{version, FlutterProject};

use crate::error::{CheckError, Result};

/// `version.dart` and `pubspec.yaml` must carry the same version string,
/// compared byte for byte. No semver normalization: `1.0` and `1.0.0` differ.
pub fn check(project: &FlutterProject) -> Result<()> {
    let dart = version::dart_app_version(&project.version_dart())?;
    let pubspec = version::pubspec_version(&project.pubspec())?;
    debug!(%dart, %pubspec, "comparing version strings");

    if dart != pubspec {
        return Err(CheckError::VersionMismatch { dart, pubspec });
    }

    Ok(())
}
