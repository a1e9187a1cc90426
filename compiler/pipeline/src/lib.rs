// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Planning pipeline that turns a target's `protobuf-options.json` into
//! `protoc` command descriptors.
//!
//! Nothing here runs a process. The pipeline reads one configuration file,
//! validates it, resolves tools and directories, and returns descriptors the host
//! build system executes and caches on its own.
//!
//! ## Module Organization
//!
//! - `tool_locator` - Lookup of executables by well-known name
//! - `toolchain` - Precedence rules for `protoc` and its plugins
//! - `path_resolver` - Per-invocation directories and files
//! - `invocation_builder` - Argument assembly and output prediction
//! - `orchestration` - Entry points (`plan`, `plan_target`)

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while planning a target.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// A required tool could not be resolved.
    #[error(transparent)]
    Tool(#[from] tool_locator::ToolError),
}

// Module declarations
pub mod invocation_builder;
pub mod orchestration;
pub mod path_resolver;
pub mod tool_locator;
pub mod toolchain;

// Re-export public API from orchestration module
pub use orchestration::{plan, plan_target};
pub use path_resolver::ResolvedPaths;
pub use tool_locator::{SearchPathLocator, StaticToolLocator, ToolError, ToolLocator};
pub use toolchain::{Toolchain, PROTOC_PATH_ENV};
