// SPDX-License-Identifier: CC0-1.0

//! Path Resolution
//!
//! Computes everything an invocation needs to know about the filesystem: the
//! executables, the directory holding its `.proto` files, the output directory and
//! the module-mapping file.

use std::path::{Path, PathBuf};

use config::InvocationSpec;
use path::{resolve_source_directory, resolve_target_file};
use types::{Generator, Target};

use crate::toolchain::Toolchain;

/// Filesystem locations for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// `protoc` executable
    pub compiler: PathBuf,
    /// Data-model generator plugin
    pub data_model_plugin: PathBuf,
    /// Service generator plugin
    pub service_plugin: PathBuf,
    /// Directory holding the invocation's `.proto` files, also the include path
    pub source_directory: PathBuf,
    /// Directory receiving generated files
    pub output_directory: PathBuf,
    /// Module-mapping file, when configured
    pub module_mapping: Option<PathBuf>,
}

impl ResolvedPaths {
    /// Resolve the paths of `invocation` within `target`
    ///
    /// The source directory is walked from the target root; the module mapping is
    /// always relative to the target root, not to the source directory.
    pub fn resolve(
        target: &Target,
        invocation: &InvocationSpec,
        toolchain: &Toolchain,
        output_directory: &Path,
    ) -> Self {
        let root = target.root();
        Self {
            compiler: toolchain.protoc.clone(),
            data_model_plugin: toolchain.data_model_plugin.clone(),
            service_plugin: toolchain.service_plugin.clone(),
            source_directory: resolve_source_directory(root, invocation.source_directory.as_deref()),
            output_directory: output_directory.to_path_buf(),
            module_mapping: invocation
                .module_mapping
                .as_deref()
                .map(|mapping| resolve_target_file(root, mapping)),
        }
    }

    /// Plugin executable for `generator`
    pub fn plugin(&self, generator: Generator) -> &Path {
        match generator {
            Generator::DataModel => &self.data_model_plugin,
            Generator::Service => &self.service_plugin,
        }
    }
}
