// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Path utility functions for resolving target-relative directories.
//!
//! This module provides the directory walk used to turn a configured, possibly
//! ascending, relative directory into a location under (or above) a build
//! target's root.

pub mod path_utils;

// Re-export for convenience
pub use path_utils::*;
