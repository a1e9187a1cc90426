// SPDX-License-Identifier: CC0-1.0

//! Invocation Builder
//!
//! Assembles the `protoc` argument list for one invocation and predicts the files
//! it will read and write. Arguments are emitted in a fixed order:
//!
//! 1. per enabled generator: plugin registration, output directory, module mapping
//! 2. the shared `-I <source directory>` include path
//! 3. data-model options, then service options, in configured order
//! 4. the bare source file names, in configured order

use std::path::Path;

use config::InvocationSpec;
use types::{proto_stem, CommandDescriptor, Generator, Target};

use crate::path_resolver::ResolvedPaths;

/// Include-path flag, followed by the directory as a separate argument
const INCLUDE_FLAG: &str = "-I";

/// Label shown by the host build system for every planned command
pub fn display_name(target: &Target) -> String {
    format!("{}: Generating swift files from proto files", target.name)
}

/// Generators enabled for `invocation`, with their configured options
///
/// Presence of the option list enables a generator; an empty list still counts.
pub fn enabled_generators(invocation: &InvocationSpec) -> Vec<(Generator, &[String])> {
    Generator::ALL
        .into_iter()
        .filter_map(|generator| {
            let options = match generator {
                Generator::DataModel => invocation.data_model_options.as_deref(),
                Generator::Service => invocation.service_options.as_deref(),
            };
            options.map(|options| (generator, options))
        })
        .collect()
}

fn path_arg(path: &Path) -> String { path.display().to_string() }

/// Build the command descriptor for one invocation
///
/// `invocation` is expected to have passed validation. A source file lacking the
/// `.proto` extension is used whole as the output stem.
pub fn build_command(
    target: &Target,
    invocation: &InvocationSpec,
    paths: &ResolvedPaths,
) -> CommandDescriptor {
    let generators = enabled_generators(invocation);
    let output_directory = path_arg(&paths.output_directory);
    let module_mapping = paths.module_mapping.as_deref().map(path_arg);

    let mut arguments = Vec::new();

    for (generator, _) in &generators {
        arguments.push(generator.plugin_arg(&path_arg(paths.plugin(*generator))));
        arguments.push(generator.out_arg(&output_directory));
        if let Some(mapping) = &module_mapping {
            arguments.push(generator.module_mapping_arg(mapping));
        }
    }

    arguments.push(INCLUDE_FLAG.to_string());
    arguments.push(path_arg(&paths.source_directory));

    for (generator, options) in &generators {
        arguments.extend(options.iter().map(|option| generator.opt_arg(option)));
    }

    let mut input_files = Vec::with_capacity(invocation.source_files.len() + 1);
    let mut output_files = Vec::with_capacity(invocation.source_files.len() * generators.len());

    for file in &invocation.source_files {
        arguments.push(file.clone());
        input_files.push(paths.source_directory.join(file));

        let stem = proto_stem(file).unwrap_or(file);
        for (generator, _) in &generators {
            output_files.push(paths.output_directory.join(generator.output_file_name(stem)));
        }
    }

    // A plugin upgrade must invalidate previously generated files
    input_files.push(paths.data_model_plugin.clone());

    CommandDescriptor {
        display_name: display_name(target),
        executable: paths.compiler.clone(),
        arguments,
        input_files,
        output_files,
    }
}
