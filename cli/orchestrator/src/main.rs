// SPDX-License-Identifier: CC0-1.0

//! protoplan CLI
//!
//! This binary exposes the planner to a host build system: it prints the
//! `protoc` commands a target needs as JSON, without running any of them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use protoplan_cli::{
    absolute, locator_with_overrides, parse_tool_override, plan_json, target_for, validate,
};

/// Command-line interface configuration for protoplan.
#[derive(Parser, Debug)]
#[command(name = "protoplan", about = "Plan protoc invocations for a build target", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,
}

/// Available protoplan commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the planned protoc commands of a target as JSON
    Plan {
        /// Root directory of the target, holding protobuf-options.json
        #[arg(long)]
        target_dir: PathBuf,
        /// Directory receiving generated sources
        #[arg(long)]
        output_dir: PathBuf,
        /// Target name used in command labels (defaults to the directory name)
        #[arg(long)]
        target_name: Option<String>,
        /// Pin a tool location, e.g. --tool protoc-gen-swift=/opt/bin/protoc-gen-swift
        #[arg(long = "tool", value_name = "NAME=PATH", value_parser = parse_tool_override)]
        tools: Vec<(String, PathBuf)>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Load and validate the configuration of a target
    Validate {
        /// Root directory of the target, holding protobuf-options.json
        #[arg(long)]
        target_dir: PathBuf,
    },
}

/// Main entry point for the protoplan application.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let result = match cli.cmd {
        Commands::Plan { target_dir, output_dir, target_name, tools, pretty } => {
            target_for(&target_dir, target_name).and_then(|target| {
                let output_dir = absolute(&output_dir)?;
                let locator = locator_with_overrides(tools);
                let json = plan_json(&target, &output_dir, &locator, pretty)?;
                println!("{}", json);
                Ok(())
            })
        }
        Commands::Validate { target_dir } => target_for(&target_dir, None).and_then(|target| {
            let invocations = validate(&target)?;
            println!("{}: {} invocation(s) OK", target, invocations);
            Ok(())
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "planning failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
