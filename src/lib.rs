// SPDX-License-Identifier: CC0-1.0

//! protoplan umbrella crate.
//!
//! Re-exports the planning entry points so a build script can depend on a single
//! crate. The functional code lives in the workspace member crates under
//! `primitives/` and `compiler/`.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use protoplan::{plan_target, SearchPathLocator, Target};
//!
//! let target = Target::from_root("/pkg/Sources/Foo");
//! let commands = plan_target(&target, Path::new("/pkg/.build/Foo"), &SearchPathLocator::new())?;
//! for command in &commands {
//!     println!("{} {:?}", command.executable.display(), command.arguments);
//! }
//! # Ok::<(), protoplan::PipelineError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![doc(test(attr(warn(unused))))]

pub use config::{ConfigError, Configuration, InvocationSpec, CONFIGURATION_FILENAME};
pub use pipeline::{
    plan, plan_target, PipelineError, ResolvedPaths, SearchPathLocator, StaticToolLocator,
    ToolError, ToolLocator, Toolchain, PROTOC_PATH_ENV,
};
pub use types::{CommandDescriptor, Generator, Target, PROTO_EXTENSION};

/// Miscellaneous metadata about the protoplan workspace.
pub mod protoplan_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
