// SPDX-License-Identifier: CC0-1.0

//! Pipeline orchestration for the planning entry points.
//!
//! This module ties the loader, validator, toolchain, path resolver and invocation
//! builder together. A target either plans completely or yields an error; partial
//! plans are never returned.

use std::path::Path;

use config::Configuration;
use types::{CommandDescriptor, Target};

use crate::invocation_builder::build_command;
use crate::path_resolver::ResolvedPaths;
use crate::tool_locator::ToolLocator;
use crate::toolchain::Toolchain;
use crate::Result;

/// Plan every invocation of the target rooted at `target.root`.
///
/// Reads `protobuf-options.json`, validates it, resolves the toolchain through
/// `locator` and builds one descriptor per configured invocation, in order.
///
/// # Returns
///
/// Returns the descriptors, or the first error: a missing or malformed
/// configuration, an invalid source file extension, or an unresolvable tool.
pub fn plan_target(
    target: &Target,
    output_directory: &Path,
    locator: &dyn ToolLocator,
) -> Result<Vec<CommandDescriptor>> {
    let configuration = Configuration::load_validated(target.root())?;
    let toolchain = Toolchain::resolve(configuration.compiler_path.as_deref(), locator)?;
    Ok(plan_validated(target, &configuration, &toolchain, output_directory))
}

/// Plan an already loaded configuration against a resolved toolchain.
///
/// The configuration is validated first, so an invalid source file in any
/// invocation rejects the whole target.
pub fn plan(
    target: &Target,
    configuration: &Configuration,
    toolchain: &Toolchain,
    output_directory: &Path,
) -> Result<Vec<CommandDescriptor>> {
    configuration.validate()?;
    Ok(plan_validated(target, configuration, toolchain, output_directory))
}

fn plan_validated(
    target: &Target,
    configuration: &Configuration,
    toolchain: &Toolchain,
    output_directory: &Path,
) -> Vec<CommandDescriptor> {
    let commands: Vec<CommandDescriptor> = configuration
        .invocations
        .iter()
        .enumerate()
        .map(|(index, invocation)| {
            let paths = ResolvedPaths::resolve(target, invocation, toolchain, output_directory);
            if !invocation.has_data_model() && !invocation.has_service() {
                tracing::warn!(
                    target_name = %target,
                    invocation = index,
                    "no generator configured; the command will only parse its inputs"
                );
            }
            let command = build_command(target, invocation, &paths);
            tracing::debug!(
                target_name = %target,
                invocation = index,
                source_directory = %paths.source_directory.display(),
                inputs = command.input_files.len(),
                outputs = command.output_files.len(),
                "planned invocation"
            );
            command
        })
        .collect();

    tracing::info!(target_name = %target, commands = commands.len(), "planned target");
    commands
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn toolchain() -> Toolchain {
        Toolchain {
            protoc: PathBuf::from("/bin/protoc"),
            data_model_plugin: PathBuf::from("/bin/protoc-gen-swift"),
            service_plugin: PathBuf::from("/bin/protoc-gen-grpc-swift"),
        }
    }

    #[test]
    fn test_plan_preserves_invocation_order() {
        let configuration = Configuration::from_json(
            r#"{"invocations": [
                {"protoFiles": ["first.proto"], "protobufOptions": []},
                {"protoFilesDirectory": "../Shared", "protoFiles": ["second.proto"], "gRPCOptions": []}
            ]}"#,
        )
        .expect("Failed to parse config");
        let target = Target::new("Foo", "/pkg/Sources/Foo");
        let commands = plan(&target, &configuration, &toolchain(), Path::new("/out"))
            .expect("Failed to plan target");

        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].output_files, vec![PathBuf::from("/out/first.pb.swift")]);
        assert_eq!(commands[1].output_files, vec![PathBuf::from("/out/second.grpc.swift")]);
        assert_eq!(commands[1].input_files[0], PathBuf::from("/pkg/Sources/Shared/second.proto"));
    }

    #[test]
    fn test_plan_rejects_whole_target() {
        let configuration = Configuration::from_json(
            r#"{"invocations": [
                {"protoFiles": ["good.proto"], "protobufOptions": []},
                {"protoFiles": ["bad.txt"], "protobufOptions": []}
            ]}"#,
        )
        .expect("Failed to parse config");
        let target = Target::new("Foo", "/pkg/Sources/Foo");
        let result = plan(&target, &configuration, &toolchain(), Path::new("/out"));
        assert!(matches!(
            result,
            Err(crate::PipelineError::Config(config::ConfigError::InvalidInputFileExtension { .. }))
        ));
    }
}
