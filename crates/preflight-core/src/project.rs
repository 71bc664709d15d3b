//! Flutter project layout
//!
//! Every path the pipeline touches is fixed by convention relative to the
//! project root. Centralizing them here keeps the checks and generators free
//! of path literals.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// A Flutter project checkout with the conventional layout
#[derive(Debug, Clone)]
pub struct FlutterProject {
    root: PathBuf,
}

impl FlutterProject {
    /// Open a project at `root`. The directory must contain a `pubspec.yaml`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.join("pubspec.yaml").exists() {
            return Err(CoreError::NotAProject { path: root });
        }
        Ok(Self { root })
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `lib/config/version.dart`, the canonical app version constant
    pub fn version_dart(&self) -> PathBuf {
        self.root.join("lib/config/version.dart")
    }

    /// `pubspec.yaml`
    pub fn pubspec(&self) -> PathBuf {
        self.root.join("pubspec.yaml")
    }

    /// Android manifest of the given build variant
    pub fn android_manifest(&self, variant: ManifestVariant) -> PathBuf {
        self.root
            .join("android/app/src")
            .join(variant.dir_name())
            .join("AndroidManifest.xml")
    }

    /// Root of the Kotlin source tree
    pub fn kotlin_root(&self) -> PathBuf {
        self.root.join("android/app/src/main/kotlin")
    }

    /// `MainActivity.kt` location for an application id
    pub fn main_activity(&self, package: &str) -> PathBuf {
        let mut path = self.kotlin_root();
        for segment in package.split('.') {
            path.push(segment);
        }
        path.join("MainActivity.kt")
    }

    /// App-module gradle build file
    pub fn app_build_gradle(&self) -> PathBuf {
        self.root.join("android/app/build.gradle")
    }

    /// Android resource root
    pub fn android_res(&self) -> PathBuf {
        self.root.join("android/app/src/main/res")
    }

    /// `ios/Runner/Info.plist`
    pub fn info_plist(&self) -> PathBuf {
        self.root.join("ios/Runner/Info.plist")
    }

    /// Xcode project file
    pub fn xcode_project(&self) -> PathBuf {
        self.root.join("ios/Runner.xcodeproj/project.pbxproj")
    }

    /// Master app icon used for launcher and app icon generation
    pub fn app_icon(&self) -> PathBuf {
        self.root.join("work/gfx/app-icon.png")
    }

    /// Master logo used for splash screens
    pub fn splash_logo(&self) -> PathBuf {
        self.root.join("work/gfx/logo.png")
    }

    /// iOS `AppIcon.appiconset` directory
    pub fn ios_appiconset(&self) -> PathBuf {
        self.root
            .join("ios/Runner/Assets.xcassets/AppIcon.appiconset")
    }

    /// Master App Store screenshots
    pub fn ios_screens_source(&self) -> PathBuf {
        self.root.join("work/gfx/ios/screens")
    }

    /// Output directory for resized screenshots of one device class
    pub fn ios_screens_target(&self, device: &str) -> PathBuf {
        self.root.join("work/gfx/ios").join(device)
    }

    /// Master Windows icon PNG
    pub fn windows_icon_png(&self) -> PathBuf {
        self.root.join("assets/icons/head.png")
    }

    /// Windows ICO output path
    pub fn windows_icon_ico(&self) -> PathBuf {
        self.root.join("assets/icons/head.ico")
    }

    /// Release bundle left by `flutter build windows --release`
    pub fn windows_release_dir(&self) -> PathBuf {
        self.root.join("build/windows/x64/runner/Release")
    }

    /// Release bundle left by `flutter build linux --release`
    pub fn linux_release_dir(&self) -> PathBuf {
        self.root.join("build/linux/x64/release/bundle")
    }

    /// The packager's root guard: `lib/config/version.dart` must exist.
    /// Returns its path on success.
    pub fn require_version_dart(&self) -> Result<PathBuf> {
        let path = self.version_dart();
        if !path.exists() {
            return Err(CoreError::NotProjectRoot { path });
        }
        Ok(path)
    }
}

/// Android manifest build variants, named after their source set directories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestVariant {
    Main,
    Debug,
}

impl ManifestVariant {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for ManifestVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Read a project file fully into a string, attaching the path on failure
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CoreError::file_read(path, source))
}
