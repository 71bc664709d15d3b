//! Launcher and app icon generation
//!
//! One master PNG is resized into every density slot the platforms expect.
//! Android gets RGB PNGs per mipmap density (launcher plus the two adaptive
//! layers), iOS gets RGB JPEGs for the full appiconset, Windows gets a single
//! multi-frame ICO.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use preflight_core::FlutterProject;

use crate::error::{AssetError, Result};
use crate::open_master;

/// Android launcher densities and their icon edge in pixels
pub const ANDROID_DENSITIES: &[(&str, u32)] = &[
    ("mipmap-hdpi", 72),
    ("mipmap-mdpi", 48),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// Files written per density: the launcher icon and the adaptive layers
pub const ANDROID_LAUNCHER_FILES: &[&str] =
    &["ic_launcher.png", "ic_launcher_fore.png", "ic_launcher_back.png"];

/// One slot of the iOS appiconset: point-size label, scale, pixel edge.
/// The label keeps its decimal point where Xcode does (`83.5`).
#[derive(Debug, Clone, Copy)]
pub struct IosIconSlot {
    pub points: &'static str,
    pub scale: u32,
    pub pixels: u32,
}

/// Every slot Xcode expects in `AppIcon.appiconset`
pub const IOS_ICON_SLOTS: &[IosIconSlot] = &[
    IosIconSlot { points: "20", scale: 1, pixels: 20 },
    IosIconSlot { points: "20", scale: 2, pixels: 40 },
    IosIconSlot { points: "20", scale: 3, pixels: 60 },
    IosIconSlot { points: "29", scale: 1, pixels: 29 },
    IosIconSlot { points: "29", scale: 2, pixels: 58 },
    IosIconSlot { points: "29", scale: 3, pixels: 87 },
    IosIconSlot { points: "40", scale: 1, pixels: 40 },
    IosIconSlot { points: "40", scale: 2, pixels: 80 },
    IosIconSlot { points: "40", scale: 3, pixels: 120 },
    IosIconSlot { points: "60", scale: 2, pixels: 120 },
    IosIconSlot { points: "60", scale: 3, pixels: 180 },
    IosIconSlot { points: "76", scale: 1, pixels: 76 },
    IosIconSlot { points: "76", scale: 2, pixels: 152 },
    IosIconSlot { points: "83.5", scale: 2, pixels: 167 },
    IosIconSlot { points: "1024", scale: 1, pixels: 1024 },
];

/// Frame edges packed into the Windows ICO
pub const WINDOWS_ICO_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256];

/// Resize the master icon into every Android mipmap density.
/// Returns the written paths.
pub fn generate_android_icons(project: &FlutterProject) -> Result<Vec<PathBuf>> {
    let master = open_master(&project.app_icon())?;
    let res = project.android_res();
    let mut written = Vec::new();

    for &(density, size) in ANDROID_DENSITIES {
        debug!(density, size, "rendering launcher icon");
        let icon = master.resize_exact(size, size, FilterType::Lanczos3).to_rgb8();

        let dir = res.join(density);
        std::fs::create_dir_all(&dir)?;
        for name in ANDROID_LAUNCHER_FILES {
            let path = dir.join(name);
            icon.save(&path).map_err(|e| AssetError::image(&path, e))?;
            written.push(path);
        }
    }

    Ok(written)
}

/// Render the full `AppIcon.appiconset` as RGB JPEGs.
/// Returns the written paths.
pub fn generate_ios_icons(project: &FlutterProject) -> Result<Vec<PathBuf>> {
    let master = open_master(&project.app_icon())?;
    let dir = project.ios_appiconset();
    std::fs::create_dir_all(&dir)?;
    let mut written = Vec::new();

    for slot in IOS_ICON_SLOTS {
        debug!(
            points = slot.points,
            scale = slot.scale,
            pixels = slot.pixels,
            "rendering app icon"
        );
        let icon = master
            .resize_exact(slot.pixels, slot.pixels, FilterType::Lanczos3)
            .to_rgb8();

        let path = dir.join(format!("Icon-App-{0}x{0}@{1}x.jpg", slot.points, slot.scale));
        icon.save(&path).map_err(|e| AssetError::image(&path, e))?;
        written.push(path);
    }

    Ok(written)
}

/// Pack the master Windows icon into a multi-frame RGBA ICO.
/// Returns the written path.
pub fn generate_windows_icon(project: &FlutterProject) -> Result<PathBuf> {
    let master = open_master(&project.windows_icon_png())?;
    let out = project.windows_icon_ico();

    // Each frame is PNG-encoded in memory, then packed into the ICO index
    let mut encoded_frames = Vec::with_capacity(WINDOWS_ICO_SIZES.len());
    for &size in WINDOWS_ICO_SIZES {
        debug!(size, "rendering ICO frame");
        let frame = master.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();
        let mut encoded = Vec::new();
        PngEncoder::new(&mut encoded)
            .write_image(frame.as_raw(), size, size, ExtendedColorType::Rgba8)
            .map_err(|e| AssetError::image(&out, e))?;
        encoded_frames.push((encoded, size));
    }

    let frames = encoded_frames
        .iter()
        .map(|(data, size)| IcoFrame::as_png(data, *size, *size, ExtendedColorType::Rgba8))
        .collect::<image::ImageResult<Vec<_>>>()
        .map_err(|e| AssetError::image(&out, e))?;

    let file = File::create(&out)?;
    IcoEncoder::new(BufWriter::new(file))
        .encode_images(&frames)
        .map_err(|e| AssetError::image(&out, e))?;

    Ok(out)
}
