// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Collection of utilities for the protoplan CLI.
//!
//! The binary is the marshalling layer between a host build system and the
//! planner: it turns flags into a [`Target`] and a tool locator, runs the
//! pipeline, and prints the descriptors as JSON.

use std::path::{Path, PathBuf};

use config::Configuration;
use pipeline::{SearchPathLocator, ToolLocator};
use thiserror::Error;
use types::Target;

/// Errors that can occur during CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Planning failed.
    #[error(transparent)]
    Pipeline(#[from] pipeline::PipelineError),
    /// Configuration failed to load or validate.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// A directory given on the command line could not be resolved.
    #[error("Failed to resolve directory {path}: {source}")]
    Directory {
        /// Directory as given
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Descriptors could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Parse a `name=path` tool override.
pub fn parse_tool_override(s: &str) -> std::result::Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=PATH, got `{}`", s)),
    }
}

/// Make `path` absolute against the current directory without touching the filesystem.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|source| CliError::Directory { path: path.to_path_buf(), source })
}

/// Build the target for `target_dir`, named `name` or after the directory.
pub fn target_for(target_dir: &Path, name: Option<String>) -> Result<Target> {
    let root = target_dir
        .canonicalize()
        .map_err(|source| CliError::Directory { path: target_dir.to_path_buf(), source })?;
    Ok(match name {
        Some(name) => Target::new(name, root),
        None => Target::from_root(root),
    })
}

/// Locator searching `PATH`, with the given overrides pinned.
pub fn locator_with_overrides(overrides: Vec<(String, PathBuf)>) -> SearchPathLocator {
    overrides
        .into_iter()
        .fold(SearchPathLocator::new(), |locator, (name, path)| locator.with_override(name, path))
}

/// Plan `target` and render the descriptors as JSON.
pub fn plan_json(
    target: &Target,
    output_dir: &Path,
    locator: &dyn ToolLocator,
    pretty: bool,
) -> Result<String> {
    let commands = pipeline::plan_target(target, output_dir, locator)?;
    let json =
        if pretty { serde_json::to_string_pretty(&commands)? } else { serde_json::to_string(&commands)? };
    Ok(json)
}

/// Load and validate the configuration of `target`, returning its invocation count.
pub fn validate(target: &Target) -> Result<usize> {
    let configuration = Configuration::load_validated(target.root())?;
    Ok(configuration.invocations.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_override() {
        assert_eq!(
            parse_tool_override("protoc=/opt/bin/protoc"),
            Ok(("protoc".to_string(), PathBuf::from("/opt/bin/protoc")))
        );
        assert_eq!(
            parse_tool_override("protoc-gen-swift=C:/tools/a=b.exe"),
            Ok(("protoc-gen-swift".to_string(), PathBuf::from("C:/tools/a=b.exe")))
        );
        assert!(parse_tool_override("protoc").is_err());
        assert!(parse_tool_override("=path").is_err());
        assert!(parse_tool_override("protoc=").is_err());
    }

    #[test]
    fn test_absolute() {
        let abs = absolute(Path::new("/already/absolute")).expect("absolute path");
        assert_eq!(abs, PathBuf::from("/already/absolute"));
        let rel = absolute(Path::new("relative/out")).expect("relative path");
        assert!(rel.is_absolute());
        assert!(rel.ends_with("relative/out"));
    }

    #[test]
    fn test_locator_with_overrides() {
        let locator = locator_with_overrides(vec![("protoc".to_string(), PathBuf::from("/x/protoc"))]);
        assert_eq!(locator.locate("protoc").expect("override should resolve"), PathBuf::from("/x/protoc"));
    }
}
