// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging setup for the planner binaries.
//!
//! Library crates only emit `tracing` events; binaries call [`init`] once to
//! install a subscriber that writes to stderr, keeping stdout free for
//! machine-readable output.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Default level when neither `RUST_LOG` nor an explicit level is given.
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Build the filter used by [`init`]
///
/// `RUST_LOG` wins when set and valid; otherwise `level` is parsed, falling back to
/// [`DEFAULT_LEVEL`] when it is absent or unrecognised.
pub fn filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.and_then(|l| l.parse::<Level>().ok()).unwrap_or(DEFAULT_LEVEL);
        EnvFilter::default().add_directive(level.into())
    })
}

/// Install the global stderr subscriber
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init(level: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
