//! Asset generation for release packaging
//!
//! Resizes master artwork into the launcher icons, splash logos and store
//! screenshots each platform expects, at the conventional output paths.
//! Existing outputs are overwritten silently.

pub mod error;
pub mod icons;
pub mod screens;
pub mod splash;

pub use error::{AssetError, Result};

use std::path::Path;

use image::DynamicImage;

/// Open a master image, failing with a clear error when it does not exist.
pub fn open_master(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(AssetError::SourceMissing {
            path: path.to_path_buf(),
        });
    }
    image::open(path).map_err(|e| AssetError::image(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_master_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_master(&dir.path().join("app-icon.png")).unwrap_err();
        assert!(matches!(err, AssetError::SourceMissing { .. }));
    }

    #[test]
    fn test_open_master_reads_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app-icon.png");
        image::RgbaImage::new(4, 4).save(&path).unwrap();

        let img = open_master(&path).unwrap();
        assert_eq!((img.width(), img.height()), (4, 4));
    }
}
