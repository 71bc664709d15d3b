//! App Store screenshot resizing
//!
//! Master screenshots are resized once per supported device class into
//! sibling output directories, keeping their file names so store listing
//! order survives the resize.

use std::path::PathBuf;

use image::imageops::FilterType;
use tracing::debug;

use preflight_core::FlutterProject;

use crate::error::{AssetError, Result};

/// Device classes and their App Store screenshot size in pixels
pub const SCREEN_TARGETS: &[(&str, u32, u32)] = &[
    ("6_7", 1290, 2796),
    ("6_5", 1242, 2688),
    ("5_5", 1242, 2208),
];

/// Resize every master screenshot into each device-class directory.
/// Dotfiles in the source directory are ignored. Returns the written paths.
pub fn generate_screens(project: &FlutterProject) -> Result<Vec<PathBuf>> {
    let source = project.ios_screens_source();
    if !source.is_dir() {
        return Err(AssetError::SourceMissing { path: source });
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(&source)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    names.sort();

    for &(device, _, _) in SCREEN_TARGETS {
        std::fs::create_dir_all(project.ios_screens_target(device))?;
    }

    let mut written = Vec::new();
    for name in &names {
        let path = source.join(name);
        let master = image::open(&path).map_err(|e| AssetError::image(&path, e))?;
        for &(device, width, height) in SCREEN_TARGETS {
            debug!(file = %name, device, width, height, "rendering screenshot");
            let out = project.ios_screens_target(device).join(name);
            master
                .resize_exact(width, height, FilterType::Lanczos3)
                .save(&out)
                .map_err(|e| AssetError::image(&out, e))?;
            written.push(out);
        }
    }

    Ok(written)
}
