//! Android splash logo generation
//!
//! The master logo is resized to a per-density target width, keeping its
//! aspect ratio and alpha channel, and dropped into every qualified
//! `drawable-*` directory under the Android res tree.

use std::path::PathBuf;

use image::imageops::FilterType;
use tracing::debug;

use preflight_core::FlutterProject;

use crate::error::{AssetError, Result};
use crate::open_master;

/// Target splash width in pixels per drawable density qualifier
pub const SPLASH_WIDTHS: &[(&str, u32)] = &[
    ("hdpi", 396),
    ("mdpi", 264),
    ("xhdpi", 528),
    ("xxhdpi", 792),
    ("xxxhdpi", 1057),
];

/// File name written into each drawable directory
pub const SPLASH_FILE: &str = "splash.png";

/// Render the splash logo into every `drawable-<density>` directory with a
/// known density qualifier. Unqualified `drawable` and unknown qualifiers
/// (`drawable-v21` and the like) are left alone. Returns the written paths.
pub fn generate_splash(project: &FlutterProject) -> Result<Vec<PathBuf>> {
    let master = open_master(&project.splash_logo())?;
    let res = project.android_res();

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(&res)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with("drawable") {
            dirs.push(name);
        }
    }
    dirs.sort();

    let mut written = Vec::new();
    for name in dirs {
        let Some(qualifier) = name.split('-').nth(1) else {
            continue;
        };
        let Some(&(_, width)) = SPLASH_WIDTHS.iter().find(|(q, _)| *q == qualifier) else {
            continue;
        };

        // Scale the height with the master's aspect ratio, truncating
        let height = (u64::from(width) * u64::from(master.height()) / u64::from(master.width()))
            as u32;
        debug!(dir = %name, width, height, "rendering splash logo");

        let logo = master.resize_exact(width, height, FilterType::Lanczos3);
        let path = res.join(&name).join(SPLASH_FILE);
        logo.save(&path).map_err(|e| AssetError::image(&path, e))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn create_project(root: &Path, drawable_dirs: &[&str]) -> FlutterProject {
        std::fs::write(root.join("pubspec.yaml"), "name: woxxy\nversion: 1.0.0\n").unwrap();
        let gfx = root.join("work/gfx");
        std::fs::create_dir_all(&gfx).unwrap();
        image::RgbaImage::from_pixel(800, 600, image::Rgba([0, 0, 0, 128]))
            .save(gfx.join("logo.png"))
            .unwrap();
        for dir in drawable_dirs {
            std::fs::create_dir_all(root.join("android/app/src/main/res").join(dir)).unwrap();
        }
        FlutterProject::open(root).unwrap()
    }

    #[test]
    fn test_splash_scales_to_density_width() {
        let dir = tempfile::tempdir().unwrap();
        let project = create_project(dir.path(), &["drawable-hdpi", "drawable-xxxhdpi"]);

        let written = generate_splash(&project).unwrap();
        assert_eq!(written.len(), 2);

        let res = dir.path().join("android/app/src/main/res");
        let hdpi = image::open(res.join("drawable-hdpi/splash.png")).unwrap();
        assert_eq!((hdpi.width(), hdpi.height()), (396, 297));

        // 1057 * 600 / 800 = 792.75, truncated
        let xxxhdpi = image::open(res.join("drawable-xxxhdpi/splash.png")).unwrap();
        assert_eq!((xxxhdpi.width(), xxxhdpi.height()), (1057, 792));
    }

    #[test]
    fn test_splash_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let project = create_project(dir.path(), &["drawable-mdpi"]);

        generate_splash(&project).unwrap();
        let splash = image::open(
            dir.path()
                .join("android/app/src/main/res/drawable-mdpi/splash.png"),
        )
        .unwrap();
        assert!(splash.color().has_alpha());
    }

    #[test]
    fn test_unqualified_and_unknown_dirs_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let project = create_project(dir.path(), &["drawable", "drawable-v21", "mipmap-hdpi"]);

        let written = generate_splash(&project).unwrap();
        assert!(written.is_empty());
        let res = dir.path().join("android/app/src/main/res");
        assert!(!res.join("drawable/splash.png").exists());
        assert!(!res.join("drawable-v21/splash.png").exists());
    }

    #[test]
    fn test_no_drawable_dirs_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let project = create_project(dir.path(), &["mipmap-hdpi"]);

        assert!(generate_splash(&project).unwrap().is_empty());
    }

    #[test]
    fn test_missing_logo_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pubspec.yaml"), "name: woxxy\n").unwrap();
        let project = FlutterProject::open(dir.path()).unwrap();

        assert!(matches!(
            generate_splash(&project).unwrap_err(),
            AssetError::SourceMissing { .. }
        ));
    }
}
