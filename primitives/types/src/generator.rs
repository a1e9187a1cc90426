// SPDX-License-Identifier: CC0-1.0

//! Code generator plugins wired into `protoc`.
//!
//! Each generator is a `protoc` plugin executable. The planner needs three facts
//! about it: the tool name used to locate it, the prefix of its `--<prefix>_out` /
//! `--<prefix>_opt` flags, and the suffix of the files it emits. The suffixes must
//! match what the plugins actually write, since the host build system tracks the
//! predicted outputs instead of scanning the output directory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// `protoc` plugins the planner knows how to wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generator {
    /// Message/struct bindings (`protoc-gen-swift`)
    #[serde(rename = "data_model")]
    DataModel,
    /// RPC service bindings (`protoc-gen-grpc-swift`)
    #[serde(rename = "service")]
    Service,
}

/// Metadata for a generator variant.
struct GeneratorMetadata {
    as_str: &'static str,
    tool_name: &'static str,
    flag_prefix: &'static str,
    output_suffix: &'static str,
}

const GENERATOR_METADATA: [GeneratorMetadata; 2] = [
    GeneratorMetadata {
        as_str: "data_model",
        tool_name: "protoc-gen-swift",
        flag_prefix: "swift",
        output_suffix: ".pb.swift",
    },
    GeneratorMetadata {
        as_str: "service",
        tool_name: "protoc-gen-grpc-swift",
        flag_prefix: "grpc-swift",
        output_suffix: ".grpc.swift",
    },
];

/// Generator option naming the module-mapping file.
const MODULE_MAPPINGS_OPTION: &str = "ProtoPathModuleMappings";

impl Generator {
    /// All generators, in the order their arguments are emitted.
    pub const ALL: [Generator; 2] = [Generator::DataModel, Generator::Service];

    fn metadata(&self) -> &'static GeneratorMetadata {
        let index = match self {
            Generator::DataModel => 0,
            Generator::Service => 1,
        };
        &GENERATOR_METADATA[index]
    }

    /// Get the string representation of the generator name.
    pub fn as_str(&self) -> &'static str { self.metadata().as_str }

    /// Tool name used to locate the plugin executable.
    pub fn tool_name(&self) -> &'static str { self.metadata().tool_name }

    /// Prefix of the `--<prefix>_out` and `--<prefix>_opt` flags.
    pub fn flag_prefix(&self) -> &'static str { self.metadata().flag_prefix }

    /// Suffix appended to the input stem for each emitted file.
    pub fn output_suffix(&self) -> &'static str { self.metadata().output_suffix }

    /// `--plugin=<tool>=<path>` argument registering the plugin with `protoc`.
    pub fn plugin_arg(&self, plugin_path: &str) -> String {
        format!("--plugin={}={}", self.tool_name(), plugin_path)
    }

    /// `--<prefix>_out=<dir>` argument selecting the output directory.
    pub fn out_arg(&self, output_dir: &str) -> String {
        format!("--{}_out={}", self.flag_prefix(), output_dir)
    }

    /// `--<prefix>_opt=<option>` argument passing one option to the plugin.
    pub fn opt_arg(&self, option: &str) -> String {
        format!("--{}_opt={}", self.flag_prefix(), option)
    }

    /// Plugin option pointing the generator at a module-mapping file.
    pub fn module_mapping_arg(&self, mapping_file: &str) -> String {
        self.opt_arg(&format!("{}={}", MODULE_MAPPINGS_OPTION, mapping_file))
    }

    /// Name of the file emitted for an input with the given stem.
    pub fn output_file_name(&self, stem: &str) -> String {
        format!("{}{}", stem, self.output_suffix())
    }
}

impl FromStr for Generator {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|g| g.as_str() == s || g.tool_name() == s)
            .ok_or_else(|| format!("Unknown generator: {}", s))
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert_eq!(Generator::DataModel.plugin_arg("/bin/gen"), "--plugin=protoc-gen-swift=/bin/gen");
        assert_eq!(Generator::DataModel.out_arg("/out"), "--swift_out=/out");
        assert_eq!(Generator::Service.out_arg("/out"), "--grpc-swift_out=/out");
        assert_eq!(Generator::Service.opt_arg("Client=true"), "--grpc-swift_opt=Client=true");
        assert_eq!(
            Generator::DataModel.module_mapping_arg("/t/map.asciipb"),
            "--swift_opt=ProtoPathModuleMappings=/t/map.asciipb"
        );
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(Generator::DataModel.output_file_name("foo"), "foo.pb.swift");
        assert_eq!(Generator::Service.output_file_name("foo"), "foo.grpc.swift");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("data_model".parse::<Generator>(), Ok(Generator::DataModel));
        assert_eq!("protoc-gen-grpc-swift".parse::<Generator>(), Ok(Generator::Service));
        assert!("protoc-gen-go".parse::<Generator>().is_err());
    }
}
