//! Configuration module
//!
//! Settings shared by every command, collected from flags and environment.

use clap::ValueEnum;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// How decoded entities are printed
    pub format: OutputFormat,
}

/// Output format for decoded entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable summary
    Text,
    /// Pretty-printed JSON of the whole entity
    Json,
}
