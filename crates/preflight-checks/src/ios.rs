//! iOS consistency checks

use tracing::debug;

use preflight_core::project::read_text;
use preflight_core::{AppIdentity, FlutterProject};

use crate::error::{CheckError, Result};

/// Run the iOS checks: display name in Info.plist, bundle id in the Xcode
/// project. Both files are opaque text to the checker.
pub fn check(project: &FlutterProject, identity: &AppIdentity) -> Result<()> {
    check_info_plist(project, identity)?;
    check_xcode_project(project, identity)?;
    Ok(())
}

fn check_info_plist(project: &FlutterProject, identity: &AppIdentity) -> Result<()> {
    let path = project.info_plist();
    let content = read_text(&path)?;

    if !content.contains(&identity.name) {
        return Err(CheckError::IosAppNameMissing {
            name: identity.name.clone(),
            path,
        });
    }

    debug!("Info.plist carries the app name");
    Ok(())
}

fn check_xcode_project(project: &FlutterProject, identity: &AppIdentity) -> Result<()> {
    let package = identity.effective_ios_package();
    let path = project.xcode_project();
    let content = read_text(&path)?;

    if !content.contains(package) {
        return Err(CheckError::IosPackageMissing {
            package: package.to_string(),
            path,
        });
    }

    debug!(%package, "Xcode project carries the bundle id");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const INFO_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>CFBundleDisplayName</key>
    <string>Woxxy</string>
    <key>CFBundleName</key>
    <string>Woxxy</string>
</dict>
</plist>
"#;

    const PBXPROJ: &str = r#"// !$*UTF8*$!
{
    buildSettings = {
        PRODUCT_BUNDLE_IDENTIFIER = com.example.woxxy;
        PRODUCT_NAME = "$(TARGET_NAME)";
    };
}
"#;

    fn create_ios_project(root: &Path) -> FlutterProject {
        std::fs::write(root.join("pubspec.yaml"), "name: woxxy\nversion: 1.0.0\n").unwrap();

        let runner = root.join("ios/Runner");
        std::fs::create_dir_all(&runner).unwrap();
        std::fs::write(runner.join("Info.plist"), INFO_PLIST).unwrap();

        let xcodeproj = root.join("ios/Runner.xcodeproj");
        std::fs::create_dir_all(&xcodeproj).unwrap();
        std::fs::write(xcodeproj.join("project.pbxproj"), PBXPROJ).unwrap();

        FlutterProject::open(root).unwrap()
    }

    fn identity(ios_package: Option<&str>) -> AppIdentity {
        AppIdentity {
            name: "Woxxy".to_string(),
            package: "com.example.woxxy".to_string(),
            ios_package: ios_package.map(str::to_string),
        }
    }

    #[test]
    fn test_conforming_project_passes() {
        let dir = tempfile::tempdir().unwrap();
        let project = create_ios_project(dir.path());
        assert!(check(&project, &identity(None)).is_ok());
    }

    #[test]
    fn test_app_name_missing_in_plist() {
        let dir = tempfile::tempdir().unwrap();
        let project = create_ios_project(dir.path());
        std::fs::write(
            dir.path().join("ios/Runner/Info.plist"),
            INFO_PLIST.replace("Woxxy", "Other"),
        )
        .unwrap();

        assert!(matches!(
            check(&project, &identity(None)).unwrap_err(),
            CheckError::IosAppNameMissing { .. }
        ));
    }

    #[test]
    fn test_bundle_id_missing_in_pbxproj() {
        let dir = tempfile::tempdir().unwrap();
        let project = create_ios_project(dir.path());
        std::fs::write(
            dir.path().join("ios/Runner.xcodeproj/project.pbxproj"),
            PBXPROJ.replace("com.example.woxxy", "com.example.other"),
        )
        .unwrap();

        match check(&project, &identity(None)).unwrap_err() {
            CheckError::IosPackageMissing { package, .. } => {
                assert_eq!(package, "com.example.woxxy");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ios_package_override_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let project = create_ios_project(dir.path());
        std::fs::write(
            dir.path().join("ios/Runner.xcodeproj/project.pbxproj"),
            PBXPROJ.replace("com.example.woxxy", "io.woxxyapp.mobile"),
        )
        .unwrap();

        // The Android id is absent from the pbxproj, but the override matches
        assert!(check(&project, &identity(Some("io.woxxyapp.mobile"))).is_ok());
        assert!(check(&project, &identity(None)).is_err());
    }

    #[test]
    fn test_substring_match_accepts_embedded_ids() {
        // The checks are substring tests: an id embedded in a longer one matches
        let dir = tempfile::tempdir().unwrap();
        let project = create_ios_project(dir.path());
        std::fs::write(
            dir.path().join("ios/Runner.xcodeproj/project.pbxproj"),
            PBXPROJ.replace("com.example.woxxy", "com.example.woxxy.beta"),
        )
        .unwrap();

        assert!(check(&project, &identity(None)).is_ok());
    }
}
