//! Checker failure diagnostics
//!
//! Every way the checker can fail gets its own variant carrying the values
//! the operator needs. `hint()` names the file to inspect and `remediation()`
//! returns a paste-ready fix where one exists.

use std::path::{Path, PathBuf};

use thiserror::Error;

use preflight_core::ManifestVariant;

/// Result type for checker operations
pub type Result<T> = std::result::Result<T, CheckError>;

/// Gradle block that loads the signing keystore, pasted before `android {`
const KEYSTORE_PROPERTIES_SNIPPET: &str = r#"Open android/app/build.gradle and add the following lines before the android { ... } block:

def keystoreProperties = new Properties()
def keystorePropertiesFile = rootProject.file('key.properties')
if (keystorePropertiesFile.exists()) {
    keystoreProperties.load(new FileInputStream(keystorePropertiesFile))
}"#;

/// Release signing configuration, pasted inside `android {`
const SIGNING_CONFIGS_SNIPPET: &str = r#"Open android/app/build.gradle and add the following lines inside the android { ... } block,
DELETE the buildTypes { ... } block and replace everything with:

    signingConfigs {
        release {
            keyAlias keystoreProperties['keyAlias']
            keyPassword keystoreProperties['keyPassword']
            storeFile keystoreProperties['storeFile'] ? file(keystoreProperties['storeFile']) : null
            storePassword keystoreProperties['storePassword']
        }
    }

    buildTypes {
        release {
            signingConfig signingConfigs.release
        }
    }"#;

/// A failed consistency check
#[derive(Error, Debug)]
pub enum CheckError {
    /// version.dart and pubspec.yaml disagree
    #[error("version number in version.dart and pubspec.yaml are different")]
    VersionMismatch { dart: String, pubspec: String },

    /// Display name missing from an Android manifest
    #[error("app name '{name}' not found in the {variant} AndroidManifest.xml (android:label)")]
    AndroidAppNameMissing {
        name: String,
        variant: ManifestVariant,
        path: PathBuf,
    },

    /// Application id missing from an Android manifest
    #[error("package '{package}' not found in the {variant} AndroidManifest.xml")]
    AndroidPackageMissing {
        package: String,
        variant: ManifestVariant,
        path: PathBuf,
    },

    /// A Kotlin source directory is not a segment of the application id
    #[error("package name not found in folder structure ({dir})")]
    StrayKotlinDir { dir: PathBuf },

    /// MainActivity.kt missing at the application id's path
    #[error("MainActivity.kt not found for package '{package}'")]
    MainActivityMissing { package: String, path: PathBuf },

    /// MainActivity.kt does not declare the application id
    #[error("package '{package}' not found in MainActivity.kt")]
    MainActivityPackageMissing { package: String, path: PathBuf },

    /// MainActivity.kt does not reference the required base class
    #[error("FlutterFragmentActivity not found in MainActivity.kt")]
    MainActivityBaseClassMissing { path: PathBuf },

    /// build.gradle misses the keystore properties loader
    #[error("keystoreProperties not found in android/app/build.gradle")]
    KeystorePropertiesMissing { path: PathBuf },

    /// build.gradle misses the release signing configuration
    #[error("signingConfigs not found in android/app/build.gradle")]
    SigningConfigsMissing { path: PathBuf },

    /// build.gradle misses the application id
    #[error("package '{package}' not found in android/app/build.gradle (applicationId)")]
    GradlePackageMissing { package: String, path: PathBuf },

    /// versionCode is computed instead of a literal number
    #[error("versionCode must be a real number in android/app/build.gradle")]
    VersionCodeNotLiteral { path: PathBuf },

    /// Display name missing from Info.plist
    #[error("app name '{name}' not found in Info.plist (CFBundleDisplayName / CFBundleName)")]
    IosAppNameMissing { name: String, path: PathBuf },

    /// Bundle id missing from the Xcode project
    #[error(
        "package '{package}' not found in project.pbxproj (PRODUCT_NAME and PRODUCT_BUNDLE_IDENTIFIER)"
    )]
    IosPackageMissing { package: String, path: PathBuf },

    /// Core project model failure (unreadable files, missing markers)
    #[error(transparent)]
    Core(#[from] preflight_core::CoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Extra diagnostic lines printed after the message
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::VersionMismatch { dart, pubspec } => Some(format!(
                "version.dart: {dart}\npubspec.yaml: {pubspec}"
            )),
            _ => None,
        }
    }

    /// The file to inspect for this failure
    pub fn hint(&self) -> Option<&Path> {
        match self {
            Self::AndroidAppNameMissing { path, .. }
            | Self::AndroidPackageMissing { path, .. }
            | Self::MainActivityMissing { path, .. }
            | Self::MainActivityPackageMissing { path, .. }
            | Self::MainActivityBaseClassMissing { path }
            | Self::KeystorePropertiesMissing { path }
            | Self::SigningConfigsMissing { path }
            | Self::GradlePackageMissing { path, .. }
            | Self::VersionCodeNotLiteral { path }
            | Self::IosAppNameMissing { path, .. }
            | Self::IosPackageMissing { path, .. } => Some(path),
            Self::StrayKotlinDir { dir } => Some(dir),
            _ => None,
        }
    }

    /// A paste-ready gradle snippet fixing the failure
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::KeystorePropertiesMissing { .. } => Some(KEYSTORE_PROPERTIES_SNIPPET),
            Self::SigningConfigsMissing { .. } => Some(SIGNING_CONFIGS_SNIPPET),
            Self::VersionCodeNotLiteral { .. } => {
                Some("Change flutterVersionCode.toInteger() to a real number")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_mismatch_detail_lists_both_values() {
        let err = CheckError::VersionMismatch {
            dart: "1.0.0".to_string(),
            pubspec: "1.0.1".to_string(),
        };
        let detail = err.detail().unwrap();
        assert!(detail.contains("version.dart: 1.0.0"));
        assert!(detail.contains("pubspec.yaml: 1.0.1"));
    }

    #[test]
    fn test_gradle_failures_carry_remediation() {
        let keystore = CheckError::KeystorePropertiesMissing {
            path: PathBuf::from("android/app/build.gradle"),
        };
        assert!(keystore.remediation().unwrap().contains("keystoreProperties"));

        let signing = CheckError::SigningConfigsMissing {
            path: PathBuf::from("android/app/build.gradle"),
        };
        assert!(signing.remediation().unwrap().contains("signingConfigs"));
        assert!(signing.remediation().unwrap().contains("buildTypes"));
    }

    #[test]
    fn test_hint_points_at_the_manifest() {
        let err = CheckError::AndroidAppNameMissing {
            name: "Woxxy".to_string(),
            variant: ManifestVariant::Debug,
            path: PathBuf::from("android/app/src/debug/AndroidManifest.xml"),
        };
        assert_eq!(
            err.hint().unwrap(),
            Path::new("android/app/src/debug/AndroidManifest.xml")
        );
        assert!(err.to_string().contains("debug"));
    }
}
