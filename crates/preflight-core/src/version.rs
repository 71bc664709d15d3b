//! Version and pubspec line scanning
//!
//! `version.dart` and `pubspec.yaml` are deliberately not parsed as Dart or
//! YAML. The first matching line wins and the value is extracted textually,
//! so the pipeline accepts exactly what the hand-edited files contain.

use std::path::Path;

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::project::read_text;

/// Marker scanned for in `version.dart`
pub const VERSION_MARKER: &str = "APP_VERSION";

/// Extract the app version from a `version.dart` file: the first quoted value
/// on the first line containing [`VERSION_MARKER`].
pub fn dart_app_version(path: &Path) -> Result<String> {
    let content = read_text(path)?;

    for line in content.lines() {
        if line.contains(VERSION_MARKER) {
            let version = first_quoted(line).filter(|v| !v.is_empty());
            debug!(?version, "found version marker line");
            return version
                .map(str::to_string)
                .ok_or_else(|| CoreError::VersionNotFound {
                    marker: VERSION_MARKER,
                    path: path.to_path_buf(),
                });
        }
    }

    Err(CoreError::VersionNotFound {
        marker: VERSION_MARKER,
        path: path.to_path_buf(),
    })
}

/// Extract the `version:` value from `pubspec.yaml`
pub fn pubspec_version(path: &Path) -> Result<String> {
    pubspec_field(path, "version")
}

/// Extract the `name:` value from `pubspec.yaml`, the artifact slug
pub fn pubspec_name(path: &Path) -> Result<String> {
    pubspec_field(path, "name")
}

fn pubspec_field(path: &Path, field: &'static str) -> Result<String> {
    let content = read_text(path)?;
    let prefix = format!("{field}:");

    for line in content.lines() {
        if line.starts_with(&prefix) {
            // Value runs to the next colon, if any
            if let Some(value) = line.split(':').nth(1) {
                return Ok(value.trim().to_string());
            }
        }
    }

    Err(CoreError::PubspecFieldMissing {
        field,
        path: path.to_path_buf(),
    })
}

/// First single-quoted token on the line, falling back to double quotes.
/// An unterminated quote yields the rest of the line.
fn first_quoted(line: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if let Some(start) = line.find(quote) {
            let rest = &line[start + 1..];
            let end = rest.find(quote).unwrap_or(rest.len());
            return Some(&rest[..end]);
        }
    }
    None
}
