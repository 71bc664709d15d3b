//! App identity loaded from the app info JSON

use std::path::Path;

use serde::Deserialize;

use crate::error::{CoreError, Result};

/// Identity of the app being released, as declared in the app info JSON.
///
/// The file carries the display name and the Android application id, plus an
/// optional bundle id for apps that ship under a different identifier on the
/// App Store. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AppIdentity {
    /// Display name shown to users
    pub name: String,

    /// Android application id (reverse-DNS)
    pub package: String,

    /// iOS bundle id, when it differs from the Android application id
    #[serde(rename = "ios-package")]
    pub ios_package: Option<String>,
}

impl AppIdentity {
    /// Load the identity from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::AppInfoRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| CoreError::AppInfoParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Bundle id to check on iOS: the override when present, otherwise the
    /// Android application id.
    pub fn effective_ios_package(&self) -> &str {
        self.ios_package.as_deref().unwrap_or(&self.package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_app_info(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("app_info.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_app_info(
            &dir,
            r#"{"name": "Woxxy", "package": "com.example.woxxy", "ios-package": "com.example.woxxy.ios"}"#,
        );

        let identity = AppIdentity::load(&path).unwrap();
        assert_eq!(identity.name, "Woxxy");
        assert_eq!(identity.package, "com.example.woxxy");
        assert_eq!(identity.effective_ios_package(), "com.example.woxxy.ios");
    }

    #[test]
    fn test_ios_package_falls_back_to_package() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_app_info(&dir, r#"{"name": "Woxxy", "package": "com.example.woxxy"}"#);

        let identity = AppIdentity::load(&path).unwrap();
        assert_eq!(identity.effective_ios_package(), "com.example.woxxy");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_app_info(
            &dir,
            r#"{"name": "Woxxy", "package": "com.example.woxxy", "store-url": "https://example.com"}"#,
        );

        assert!(AppIdentity::load(&path).is_ok());
    }

    #[test]
    fn test_missing_package_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_app_info(&dir, r#"{"name": "Woxxy"}"#);

        let err = AppIdentity::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::AppInfoParse { .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppIdentity::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CoreError::AppInfoRead { .. }));
    }
}
