// SPDX-License-Identifier: CC0-1.0

//! Tool Location
//!
//! The host build system knows where `protoc` and its plugins live. This module
//! models that knowledge as the [`ToolLocator`] trait, with one implementation
//! backed by `PATH` and one backed by a fixed table.

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating a tool
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool with this name is known
    #[error("Tool not found: {0}")]
    NotFound(String),
    /// Searching `PATH` for the tool failed
    #[error("Failed to locate tool `{name}`: {source}")]
    Lookup {
        /// Name of the tool being looked up
        name: String,
        /// Underlying search error
        #[source]
        source: which::Error,
    },
}

/// Lookup of executables by well-known tool name
///
/// Implementations must fail loudly: a missing tool is an error, never a
/// silently defaulted path.
pub trait ToolLocator: Send + Sync {
    /// Absolute path of the executable named `name`
    fn locate(&self, name: &str) -> Result<PathBuf, ToolError>;
}

/// Locator that consults explicit overrides, then searches `PATH`
#[derive(Debug, Clone, Default)]
pub struct SearchPathLocator {
    overrides: BTreeMap<String, PathBuf>,
}

impl SearchPathLocator {
    /// Create a locator with no overrides
    pub fn new() -> Self { Self::default() }

    /// Pin `name` to `path`, bypassing the `PATH` search
    pub fn with_override(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.overrides.insert(name.into(), path.into());
        self
    }
}

impl ToolLocator for SearchPathLocator {
    fn locate(&self, name: &str) -> Result<PathBuf, ToolError> {
        if let Some(path) = self.overrides.get(name) {
            return Ok(path.clone());
        }
        which::which(name).map_err(|source| ToolError::Lookup { name: name.to_string(), source })
    }
}

/// Locator backed by a fixed name-to-path table
#[derive(Debug, Clone, Default)]
pub struct StaticToolLocator {
    tools: BTreeMap<String, PathBuf>,
}

impl StaticToolLocator {
    /// Create an empty locator
    pub fn new() -> Self { Self::default() }

    /// Register `name` at `path`
    pub fn with_tool(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.tools.insert(name.into(), path.into());
        self
    }
}

impl ToolLocator for StaticToolLocator {
    fn locate(&self, name: &str) -> Result<PathBuf, ToolError> {
        self.tools.get(name).cloned().ok_or_else(|| ToolError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_locator() {
        let locator = StaticToolLocator::new().with_tool("protoc", "/opt/bin/protoc");
        assert_eq!(locator.locate("protoc").expect("protoc should resolve"), PathBuf::from("/opt/bin/protoc"));
        match locator.locate("protoc-gen-swift").expect_err("Expected missing tool") {
            ToolError::NotFound(name) => assert_eq!(name, "protoc-gen-swift"),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_search_path_override() {
        let locator = SearchPathLocator::new().with_override("protoc", "/pinned/protoc");
        assert_eq!(locator.locate("protoc").expect("override should resolve"), PathBuf::from("/pinned/protoc"));
    }

    #[test]
    fn test_search_path_missing_tool() {
        let locator = SearchPathLocator::new();
        let err = locator
            .locate("protoplan-definitely-not-an-installed-tool")
            .expect_err("Expected lookup failure");
        assert!(matches!(err, ToolError::Lookup { .. }));
        assert!(err.to_string().contains("protoplan-definitely-not-an-installed-tool"));
    }
}
