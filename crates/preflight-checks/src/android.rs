//! Android consistency checks
//!
//! Manifests and gradle files are treated as opaque text: every rule is a
//! substring test against the whole file, never an XML or gradle parse. The
//! acceptance set is whatever the files literally contain.

use tracing::debug;
use walkdir::WalkDir;

use preflight_core::project::read_text;
use preflight_core::{AppIdentity, FlutterProject, ManifestVariant};

use crate::error::{CheckError, Result};

/// Base class the generated MainActivity must reference
const ACTIVITY_BASE_CLASS: &str = "FlutterFragmentActivity";

/// Marker left by the keystore loader block in build.gradle
const KEYSTORE_MARKER: &str = "keystoreProperties";

/// Marker for a release signing configuration
const SIGNING_MARKER: &str = "signingConfigs {";

/// Gradle expression banned in favor of a literal version code
const DYNAMIC_VERSION_CODE: &str = "flutterVersionCode.toInteger()";

/// Run every Android check in order: manifests, the Kotlin source tree
/// (unless skipped), then the gradle release configuration.
pub fn check(project: &FlutterProject, identity: &AppIdentity, skip_kotlin: bool) -> Result<()> {
    check_manifests(project, identity)?;

    if skip_kotlin {
        debug!("skipping Kotlin source tree checks");
    } else {
        check_kotlin_tree(project, identity)?;
        check_main_activity(project, identity)?;
    }

    check_build_gradle(project, identity)?;
    Ok(())
}

/// The display name and application id must appear in both the main and the
/// debug manifest. Names are checked before packages, main before debug.
fn check_manifests(project: &FlutterProject, identity: &AppIdentity) -> Result<()> {
    let main_path = project.android_manifest(ManifestVariant::Main);
    let main = read_text(&main_path)?;
    if !main.contains(&identity.name) {
        return Err(CheckError::AndroidAppNameMissing {
            name: identity.name.clone(),
            variant: ManifestVariant::Main,
            path: main_path,
        });
    }

    let debug_path = project.android_manifest(ManifestVariant::Debug);
    let debug = read_text(&debug_path)?;
    if !debug.contains(&identity.name) {
        return Err(CheckError::AndroidAppNameMissing {
            name: identity.name.clone(),
            variant: ManifestVariant::Debug,
            path: debug_path,
        });
    }

    if !main.contains(&identity.package) {
        return Err(CheckError::AndroidPackageMissing {
            package: identity.package.clone(),
            variant: ManifestVariant::Main,
            path: main_path,
        });
    }
    if !debug.contains(&identity.package) {
        return Err(CheckError::AndroidPackageMissing {
            package: identity.package.clone(),
            variant: ManifestVariant::Debug,
            path: debug_path,
        });
    }

    debug!("both manifests carry the app name and package");
    Ok(())
}

/// Every directory under the Kotlin source root must be named after one of
/// the dot-separated application id segments.
fn check_kotlin_tree(project: &FlutterProject, identity: &AppIdentity) -> Result<()> {
    let root = project.kotlin_root();
    if !root.is_dir() {
        // Nothing to walk; the MainActivity check reports the real problem
        return Ok(());
    }

    let segments: Vec<&str> = identity.package.split('.').collect();

    for entry in WalkDir::new(&root).min_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir_name = entry.file_name().to_string_lossy();
        if !segments.iter().any(|segment| *segment == dir_name) {
            let dir = entry
                .path()
                .strip_prefix(project.root())
                .unwrap_or_else(|_| entry.path())
                .to_path_buf();
            return Err(CheckError::StrayKotlinDir { dir });
        }
    }

    debug!("Kotlin source tree matches the package segments");
    Ok(())
}

/// `MainActivity.kt` must sit at the application id's path, declare the
/// package and reference [`ACTIVITY_BASE_CLASS`].
fn check_main_activity(project: &FlutterProject, identity: &AppIdentity) -> Result<()> {
    let path = project.main_activity(&identity.package);
    if !path.exists() {
        return Err(CheckError::MainActivityMissing {
            package: identity.package.clone(),
            path,
        });
    }

    let content = read_text(&path)?;
    if !content.contains(&identity.package) {
        return Err(CheckError::MainActivityPackageMissing {
            package: identity.package.clone(),
            path,
        });
    }
    if !content.contains(ACTIVITY_BASE_CLASS) {
        return Err(CheckError::MainActivityBaseClassMissing { path });
    }

    debug!("MainActivity.kt is in place");
    Ok(())
}

/// `build.gradle` must carry the signing setup, the application id and a
/// literal version code.
fn check_build_gradle(project: &FlutterProject, identity: &AppIdentity) -> Result<()> {
    let path = project.app_build_gradle();
    let content = read_text(&path)?;

    if !content.contains(KEYSTORE_MARKER) {
        return Err(CheckError::KeystorePropertiesMissing { path });
    }
    if !content.contains(SIGNING_MARKER) {
        return Err(CheckError::SigningConfigsMissing { path });
    }
    if !content.contains(&identity.package) {
        return Err(CheckError::GradlePackageMissing {
            package: identity.package.clone(),
            path,
        });
    }
    if content.contains(DYNAMIC_VERSION_CODE) {
        return Err(CheckError::VersionCodeNotLiteral { path });
    }

    debug!("build.gradle release configuration present");
    Ok(())
}
