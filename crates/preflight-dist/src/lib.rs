//! Desktop release packaging
//!
//! Drives `flutter build` for a desktop target, packs the release bundle
//! into a platform-appropriate archive named after the app and version, and
//! delivers it to the user's Desktop.

pub mod archive;
pub mod error;
pub mod flutter;

pub use error::{DistError, Result};
pub use flutter::FlutterRunner;

use std::fmt;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use preflight_core::{version, FlutterProject};

/// Desktop build targets the packager supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopPlatform {
    Windows,
    Linux,
}

impl DesktopPlatform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }

    /// Subcommand passed to `flutter build`
    pub fn build_subcommand(self) -> &'static str {
        self.as_str()
    }

    /// Archive format conventional for the platform
    pub fn archive_extension(self) -> &'static str {
        match self {
            Self::Windows => "zip",
            Self::Linux => "tar.gz",
        }
    }

    /// Where `flutter build <platform> --release` leaves the runnable bundle
    pub fn release_dir(self, project: &FlutterProject) -> PathBuf {
        match self {
            Self::Windows => project.windows_release_dir(),
            Self::Linux => project.linux_release_dir(),
        }
    }
}

impl fmt::Display for DesktopPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved packaging parameters for one build
#[derive(Debug, Clone)]
pub struct DistConfig {
    /// Short app name, taken from the pubspec `name` field
    pub slug: String,
    /// App version, taken from `lib/config/version.dart`
    pub version: String,
    pub platform: DesktopPlatform,
}

impl DistConfig {
    /// Read slug and version out of the project. Fails when the version
    /// constant is missing, which doubles as the project-root guard.
    pub fn resolve(project: &FlutterProject, platform: DesktopPlatform) -> Result<Self> {
        let version_dart = project.require_version_dart()?;
        let version = version::dart_app_version(&version_dart)?;
        let slug = version::pubspec_name(&project.pubspec())?;
        Ok(Self {
            slug,
            version,
            platform,
        })
    }

    /// `<slug>-<version>-<platform>-x64.<ext>`
    pub fn archive_name(&self) -> String {
        format!(
            "{}-{}-{}-x64.{}",
            self.slug,
            self.version,
            self.platform,
            self.platform.archive_extension()
        )
    }
}

/// A delivered release archive
#[derive(Debug, Clone)]
pub struct DistArtifact {
    pub path: PathBuf,
    pub size: u64,
    pub sha256: String,
}

impl DistArtifact {
    /// Stat and hash an archive on disk
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let bytes = std::fs::read(&path)?;
        let sha256 = format!("{:x}", Sha256::digest(&bytes));
        Ok(Self {
            size: bytes.len() as u64,
            path,
            sha256,
        })
    }
}

/// Build, archive and deliver one desktop release.
///
/// The flutter steps run best effort. What decides success is the release
/// folder existing afterwards and the archive getting written and moved to
/// `dest_dir`.
pub fn package(
    project: &FlutterProject,
    platform: DesktopPlatform,
    runner: &FlutterRunner,
    dest_dir: &Path,
) -> Result<DistArtifact> {
    let config = DistConfig::resolve(project, platform)?;
    let flutter = runner.check_installed()?;
    debug!(flutter = %flutter.display(), "resolved build tool");

    info!(platform = %platform, slug = %config.slug, version = %config.version, "building release bundle");
    runner.clean(project.root())?;
    runner.pub_get(project.root())?;
    runner.build_release(platform, project.root())?;

    let release_dir = platform.release_dir(project);
    if !release_dir.is_dir() {
        return Err(DistError::ReleaseDirMissing { path: release_dir });
    }

    let staged = project.root().join(config.archive_name());
    info!(archive = %staged.display(), "packing release bundle");
    match platform {
        DesktopPlatform::Windows => archive::zip_dir(&release_dir, &staged)?,
        DesktopPlatform::Linux => archive::tar_gz_dir(&release_dir, &staged)?,
    }

    let delivered = deliver(&staged, dest_dir)?;
    DistArtifact::from_path(delivered)
}

/// Move an archive into `dest_dir`, replacing any previous delivery of the
/// same name. Returns the final path.
pub fn deliver(archive: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = archive.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "archive path has no file name",
        )
    })?;
    let target = dest_dir.join(name);
    if target.exists() {
        std::fs::remove_file(&target)?;
    }
    if std::fs::rename(archive, &target).is_err() {
        // Desktop may live on another filesystem
        std::fs::copy(archive, &target)?;
        std::fs::remove_file(archive)?;
    }
    Ok(target)
}

/// The delivery directory, `~/Desktop`
pub fn desktop_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join("Desktop"))
        .ok_or(DistError::HomeDirNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_project(root: &Path, version: &str) -> FlutterProject {
        std::fs::write(
            root.join("pubspec.yaml"),
            "name: woxxy\ndescription: A test app\nversion: 9.9.9+1\n",
        )
        .unwrap();
        let config = root.join("lib/config");
        std::fs::create_dir_all(&config).unwrap();
        std::fs::write(
            config.join("version.dart"),
            format!("const String APP_VERSION = '{version}';\n"),
        )
        .unwrap();
        FlutterProject::open(root).unwrap()
    }

    #[test]
    fn test_archive_name_per_platform() {
        let dir = tempfile::tempdir().unwrap();
        let project = create_project(dir.path(), "1.4.0");

        let windows = DistConfig::resolve(&project, DesktopPlatform::Windows).unwrap();
        assert_eq!(windows.archive_name(), "woxxy-1.4.0-windows-x64.zip");

        let linux = DistConfig::resolve(&project, DesktopPlatform::Linux).unwrap();
        assert_eq!(linux.archive_name(), "woxxy-1.4.0-linux-x64.tar.gz");
    }

    #[test]
    fn test_resolve_takes_version_from_dart_not_pubspec() {
        let dir = tempfile::tempdir().unwrap();
        let project = create_project(dir.path(), "2.0.1");

        let config = DistConfig::resolve(&project, DesktopPlatform::Linux).unwrap();
        assert_eq!(config.slug, "woxxy");
        assert_eq!(config.version, "2.0.1");
    }

    #[test]
    fn test_resolve_guards_against_wrong_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pubspec.yaml"), "name: woxxy\n").unwrap();
        let project = FlutterProject::open(dir.path()).unwrap();

        let err = DistConfig::resolve(&project, DesktopPlatform::Windows).unwrap_err();
        assert!(matches!(
            err,
            DistError::Core(preflight_core::CoreError::NotProjectRoot { .. })
        ));
    }

    #[test]
    fn test_artifact_hashes_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.zip");
        std::fs::write(&path, b"hello").unwrap();

        let artifact = DistArtifact::from_path(&path).unwrap();
        assert_eq!(artifact.size, 5);
        assert_eq!(
            artifact.sha256,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_deliver_replaces_previous_archive() {
        let dir = tempfile::tempdir().unwrap();
        let staged = dir.path().join("woxxy-1.0.0-linux-x64.tar.gz");
        std::fs::write(&staged, b"new bytes").unwrap();

        let desktop = dir.path().join("Desktop");
        std::fs::create_dir_all(&desktop).unwrap();
        std::fs::write(desktop.join("woxxy-1.0.0-linux-x64.tar.gz"), b"old").unwrap();

        let target = deliver(&staged, &desktop).unwrap();
        assert_eq!(target, desktop.join("woxxy-1.0.0-linux-x64.tar.gz"));
        assert_eq!(std::fs::read(&target).unwrap(), b"new bytes");
        assert!(!staged.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_package_archives_release_and_delivers() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let project = create_project(dir.path(), "2.0.1");

        // A flutter stand-in that succeeds without touching the tree
        let fake = dir.path().join("flutter");
        std::fs::write(&fake, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let release = dir.path().join("build/windows/x64/runner/Release");
        std::fs::create_dir_all(&release).unwrap();
        std::fs::write(release.join("woxxy.exe"), b"binary").unwrap();

        let desktop = dir.path().join("Desktop");
        std::fs::create_dir_all(&desktop).unwrap();

        let runner = FlutterRunner::with_flutter_path(fake.to_string_lossy().into_owned());
        let artifact = package(&project, DesktopPlatform::Windows, &runner, &desktop).unwrap();

        assert_eq!(artifact.path, desktop.join("woxxy-2.0.1-windows-x64.zip"));
        assert!(artifact.size > 0);
        assert_eq!(artifact.sha256.len(), 64);
        // The staging copy moved out of the project root
        assert!(!dir.path().join("woxxy-2.0.1-windows-x64.zip").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_package_fails_without_release_dir() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let project = create_project(dir.path(), "2.0.1");

        let fake = dir.path().join("flutter");
        std::fs::write(&fake, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let desktop = dir.path().join("Desktop");
        std::fs::create_dir_all(&desktop).unwrap();

        let runner = FlutterRunner::with_flutter_path(fake.to_string_lossy().into_owned());
        let err = package(&project, DesktopPlatform::Linux, &runner, &desktop).unwrap_err();
        assert!(matches!(err, DistError::ReleaseDirMissing { .. }));
    }
}
