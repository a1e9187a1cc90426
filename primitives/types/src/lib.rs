// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Core types shared by the protoplan crates
//!
//! This crate defines the vocabulary of the planner: the build [`Target`] being
//! planned, the code [`Generator`]s that can be wired into a `protoc` invocation,
//! and the [`CommandDescriptor`] handed to the host build system. None of these
//! types perform I/O.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Planned, unexecuted compiler invocations.
///
/// This module provides the `CommandDescriptor` type that carries the executable,
/// argument list and declared input/output files of one `protoc` run.
pub mod command;
/// Code generator plugins known to the planner.
///
/// This module provides the `Generator` enum with the plugin name, command-line
/// prefix and output suffix for each supported `protoc` plugin.
pub mod generator;

/// Re-export the `CommandDescriptor` type for convenience.
pub use command::CommandDescriptor;
/// Re-export the `Generator` enum for convenience.
pub use generator::Generator;

/// File extension every input definition file must carry.
pub const PROTO_EXTENSION: &str = ".proto";

/// Well-known tool name of the protocol buffer compiler.
pub const PROTOC_TOOL_NAME: &str = "protoc";

/// Returns the stem of a `.proto` file name, or `None` when the name lacks the extension.
///
/// Only the final path component is considered, so `nested/foo.proto` yields `foo`.
///
/// # Examples
///
/// ```
/// assert_eq!(types::proto_stem("foo.proto"), Some("foo"));
/// assert_eq!(types::proto_stem("foo.v1.proto"), Some("foo.v1"));
/// assert_eq!(types::proto_stem("foo.txt"), None);
/// ```
pub fn proto_stem(file: &str) -> Option<&str> {
    let name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    name.strip_suffix(PROTO_EXTENSION)
}

/// A build target whose sources are generated from `.proto` files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    /// Target name used in display labels
    pub name: String,
    /// Root directory of the target, where its configuration lives
    pub root: PathBuf,
}

impl Target {
    /// Create a new target from its name and root directory
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), root: root.into() }
    }

    /// Create a target named after the last component of `root`
    ///
    /// Falls back to the full path when `root` has no final component (e.g. `/`).
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        Self { name, root }
    }

    /// Root directory of the target
    pub fn root(&self) -> &Path { &self.root }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.name) }
}
