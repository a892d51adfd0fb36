//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod inspect;
mod pipeline;
mod template;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use tea_core::domain::common::Parameter;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a template descriptor
    Template(SourceArgs),
    /// Decode a pipeline descriptor
    Pipeline(SourceArgs),
    /// Decode a descriptor of whichever kind it declares
    Inspect(SourceArgs),
}

/// Where to read a descriptor from
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Path to the descriptor file, or `-` to read stdin
    pub path: String,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Template(args) => template::handle_template_command(&args, config),
        Commands::Pipeline(args) => pipeline::handle_pipeline_command(&args, config),
        Commands::Inspect(args) => inspect::handle_inspect_command(&args, config),
    }
}

/// Print an entity as pretty JSON
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize entity")?;
    println!("{}", json);
    Ok(())
}

/// Render parameters as `name: type, ...`
fn format_params(params: &[Parameter]) -> String {
    params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.param_type))
        .collect::<Vec<_>>()
        .join(", ")
}
