//! Core project model shared by the preflight crates
//!
//! Holds the app identity, the conventional Flutter project layout, and the
//! textual version extraction everything else builds on.

pub mod error;
pub mod identity;
pub mod project;
pub mod version;

pub use error::{CoreError, Result};
pub use identity::AppIdentity;
pub use project::{FlutterProject, ManifestVariant};
