//! Tea CLI
//!
//! Command-line interface for decoding Tea template and pipeline descriptors.

mod commands;
mod config;
mod input;

use clap::Parser;
use colored::*;
use commands::{Commands, handle_command};
use config::{Config, OutputFormat};
use std::process::ExitCode;
use tea_yaml::DecodeError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "tea")]
#[command(about = "Tea deployment descriptor tool", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "TEA_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Output format for decoded descriptors
    #[arg(long, value_enum, env = "TEA_OUTPUT_FORMAT", default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config { format: cli.format };

    match handle_command(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", describe_error(&err));
            ExitCode::FAILURE
        }
    }
}

/// One-line failure report, naming the category of decode errors
fn describe_error(err: &anyhow::Error) -> String {
    let label = "error".red().bold();
    match err.downcast_ref::<DecodeError>() {
        Some(decode) => format!("{} ({}): {}", label, decode.category(), decode),
        None => format!("{}: {:#}", label, err),
    }
}
