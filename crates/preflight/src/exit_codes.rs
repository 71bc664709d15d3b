//! Exit codes for the CLI

#![allow(dead_code)]

/// Success
pub const SUCCESS: i32 = 0;

/// General error, including a failed check
pub const ERROR: i32 = 1;

/// User cancelled
pub const CANCELLED: i32 = 130;
