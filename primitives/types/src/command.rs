// SPDX-License-Identifier: CC0-1.0

//! Planned `protoc` invocations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One planned, unexecuted compiler invocation.
///
/// This is the whole contract with the host build system: it runs `executable`
/// with `arguments`, reruns it when any of `input_files` changes, and caches on
/// `output_files`. List order is part of the contract, since equal
/// configurations must produce byte-identical descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDescriptor {
    /// Human-readable label shown by the build system
    pub display_name: String,
    /// Compiler executable
    pub executable: PathBuf,
    /// Ordered argument list
    pub arguments: Vec<String>,
    /// Files whose change must trigger a rerun
    pub input_files: Vec<PathBuf>,
    /// Files the invocation is predicted to produce
    pub output_files: Vec<PathBuf>,
}

impl CommandDescriptor {
    /// Whether the invocation is predicted to produce any file
    pub fn produces_output(&self) -> bool { !self.output_files.is_empty() }
}
