// SPDX-License-Identifier: CC0-1.0

//! Toolchain Resolution
//!
//! Resolves the three executables a plan needs. `protoc` follows a three-tier
//! precedence (configuration, then `PROTOC_PATH`, then the tool locator); the two
//! generator plugins always come from the tool locator.

use std::ffi::OsString;
use std::path::PathBuf;

use types::{Generator, PROTOC_TOOL_NAME};

use crate::tool_locator::{ToolError, ToolLocator};

/// Environment variable overriding the `protoc` location
pub const PROTOC_PATH_ENV: &str = "PROTOC_PATH";

/// Resolved executables for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// `protoc` executable
    pub protoc: PathBuf,
    /// Data-model generator plugin
    pub data_model_plugin: PathBuf,
    /// Service generator plugin
    pub service_plugin: PathBuf,
}

impl Toolchain {
    /// Resolve the toolchain, reading `PROTOC_PATH` from the process environment
    pub fn resolve(
        configured_protoc: Option<&str>,
        locator: &dyn ToolLocator,
    ) -> Result<Self, ToolError> {
        Self::resolve_with_env(configured_protoc, std::env::var_os(PROTOC_PATH_ENV), locator)
    }

    /// Resolve the toolchain with an explicit environment override
    ///
    /// An empty override is treated as unset.
    pub fn resolve_with_env(
        configured_protoc: Option<&str>,
        env_protoc: Option<OsString>,
        locator: &dyn ToolLocator,
    ) -> Result<Self, ToolError> {
        let protoc = match (configured_protoc, env_protoc) {
            (Some(configured), _) => PathBuf::from(configured),
            (None, Some(env)) if !env.is_empty() => PathBuf::from(env),
            _ => locator.locate(PROTOC_TOOL_NAME)?,
        };

        let data_model_plugin = locator.locate(Generator::DataModel.tool_name())?;
        let service_plugin = locator.locate(Generator::Service.tool_name())?;

        tracing::debug!(
            protoc = %protoc.display(),
            data_model_plugin = %data_model_plugin.display(),
            service_plugin = %service_plugin.display(),
            "resolved toolchain"
        );

        Ok(Self { protoc, data_model_plugin, service_plugin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool_locator::StaticToolLocator;

    fn full_locator() -> StaticToolLocator {
        StaticToolLocator::new()
            .with_tool("protoc", "/locator/protoc")
            .with_tool("protoc-gen-swift", "/locator/protoc-gen-swift")
            .with_tool("protoc-gen-grpc-swift", "/locator/protoc-gen-grpc-swift")
    }

    #[test]
    fn test_configured_path_wins() {
        let toolchain = Toolchain::resolve_with_env(
            Some("/configured/protoc"),
            Some(OsString::from("/env/protoc")),
            &full_locator(),
        )
        .expect("Failed to resolve toolchain");
        assert_eq!(toolchain.protoc, PathBuf::from("/configured/protoc"));
        assert_eq!(toolchain.data_model_plugin, PathBuf::from("/locator/protoc-gen-swift"));
        assert_eq!(toolchain.service_plugin, PathBuf::from("/locator/protoc-gen-grpc-swift"));
    }

    #[test]
    fn test_env_before_locator() {
        let toolchain =
            Toolchain::resolve_with_env(None, Some(OsString::from("/env/protoc")), &full_locator())
                .expect("Failed to resolve toolchain");
        assert_eq!(toolchain.protoc, PathBuf::from("/env/protoc"));

        let toolchain = Toolchain::resolve_with_env(None, Some(OsString::new()), &full_locator())
            .expect("Failed to resolve toolchain");
        assert_eq!(toolchain.protoc, PathBuf::from("/locator/protoc"));
    }

    #[test]
    fn test_locator_fallback() {
        let toolchain = Toolchain::resolve_with_env(None, None, &full_locator())
            .expect("Failed to resolve toolchain");
        assert_eq!(toolchain.protoc, PathBuf::from("/locator/protoc"));
        assert_eq!(toolchain.service_plugin, PathBuf::from("/locator/protoc-gen-grpc-swift"));
    }

    #[test]
    fn test_missing_tools_are_fatal() {
        // No protoc anywhere
        let locator = StaticToolLocator::new()
            .with_tool("protoc-gen-swift", "/locator/protoc-gen-swift")
            .with_tool("protoc-gen-grpc-swift", "/locator/protoc-gen-grpc-swift");
        match Toolchain::resolve_with_env(None, None, &locator).expect_err("Expected missing protoc") {
            ToolError::NotFound(name) => assert_eq!(name, "protoc"),
            other => panic!("Expected NotFound error, got {:?}", other),
        }

        // Plugins have no override tier, even when protoc is configured
        let locator = StaticToolLocator::new().with_tool("protoc-gen-swift", "/locator/protoc-gen-swift");
        match Toolchain::resolve_with_env(Some("/configured/protoc"), None, &locator)
            .expect_err("Expected missing service plugin")
        {
            ToolError::NotFound(name) => assert_eq!(name, "protoc-gen-grpc-swift"),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }
}
