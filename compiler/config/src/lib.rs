// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! protoplan Configuration
//!
//! This crate provides the per-target configuration for protoplan.
//! Each build target carries a `protobuf-options.json` file at its root that
//! specifies:
//! - An optional explicit path to `protoc`
//! - One or more invocations, each naming a directory of `.proto` files and the
//!   generators to run over them
//!
//! The document is read fresh on every planning run and validated before any
//! planning happens. No default configuration is ever synthesized.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::PROTO_EXTENSION;

/// Fixed name of the configuration file at the root of each target
pub const CONFIGURATION_FILENAME: &str = "protobuf-options.json";

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to decode the JSON configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// A source file does not carry the `.proto` extension
    #[error(
        "Invalid input file extension: `{file}` in invocation {invocation} (expected `{expected}`)",
        expected = PROTO_EXTENSION
    )]
    InvalidInputFileExtension {
        /// Index of the offending invocation
        invocation: usize,
        /// Offending source file entry
        file: String,
    },
}

/// Root configuration document for one build target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Explicit override for the `protoc` executable
    #[serde(default, rename = "protocPath", alias = "compilerPath", skip_serializing_if = "Option::is_none")]
    pub compiler_path: Option<String>,
    /// Generation units, planned in order
    pub invocations: Vec<InvocationSpec>,
}

/// One unit of code generation
///
/// The generator option lists are tri-state: `None` disables the generator,
/// while `Some(vec![])` enables it with no extra options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationSpec {
    /// Directory holding the source files, relative to the target root
    #[serde(
        default,
        rename = "protoFilesDirectory",
        alias = "sourceDirectory",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_directory: Option<String>,
    /// File names of the `.proto` inputs
    #[serde(rename = "protoFiles", alias = "sourceFiles")]
    pub source_files: Vec<String>,
    /// Module-mapping file, relative to the target root
    #[serde(default, rename = "moduleMapping", skip_serializing_if = "Option::is_none")]
    pub module_mapping: Option<String>,
    /// Data-model generator options; presence enables the generator
    #[serde(
        default,
        rename = "protobufOptions",
        alias = "dataModelOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_model_options: Option<Vec<String>>,
    /// Service generator options; presence enables the generator
    #[serde(default, rename = "gRPCOptions", alias = "serviceOptions", skip_serializing_if = "Option::is_none")]
    pub service_options: Option<Vec<String>>,
}

impl InvocationSpec {
    /// Whether the data-model generator is enabled
    pub fn has_data_model(&self) -> bool { self.data_model_options.is_some() }

    /// Whether the service generator is enabled
    pub fn has_service(&self) -> bool { self.service_options.is_some() }
}

impl Configuration {
    /// Load the configuration of the target rooted at `target_root`
    ///
    /// Reads `<target_root>/protobuf-options.json`.
    pub fn load<P: AsRef<Path>>(target_root: P) -> Result<Self, ConfigError> {
        Self::from_file(Self::path_for(target_root))
    }

    /// Path of the configuration file for the target rooted at `target_root`
    pub fn path_for<P: AsRef<Path>>(target_root: P) -> PathBuf {
        target_root.as_ref().join(CONFIGURATION_FILENAME)
    }

    /// Load configuration from a JSON file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::FileRead(e),
        })?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            invocations = config.invocations.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Decode configuration from a JSON string
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Check that every source file of every invocation is a `.proto` file
    ///
    /// Fails on the first offending entry; a single bad entry rejects the whole
    /// configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, invocation) in self.invocations.iter().enumerate() {
            for file in &invocation.source_files {
                if !file.ends_with(PROTO_EXTENSION) {
                    return Err(ConfigError::InvalidInputFileExtension {
                        invocation: index,
                        file: file.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Load and validate the configuration of the target rooted at `target_root`
    pub fn load_validated<P: AsRef<Path>>(target_root: P) -> Result<Self, ConfigError> {
        let config = Self::load(target_root)?;
        config.validate()?;
        Ok(config)
    }
}
