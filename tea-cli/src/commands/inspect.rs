//! Inspect command handler
//!
//! Decodes a descriptor of either kind, picked from its `kind` entry.

use anyhow::Result;
use colored::*;
use tea_yaml::{AnyDocument, decode_any};

use super::SourceArgs;
use super::pipeline::show_pipeline;
use super::template::show_template;
use crate::config::{Config, OutputFormat};
use crate::input;

pub fn handle_inspect_command(args: &SourceArgs, config: &Config) -> Result<()> {
    let reader = input::open(&args.path)?;
    let document = decode_any(reader).inspect_err(|e| {
        tracing::debug!("Descriptor decode failed ({}): {}", e.category(), e);
    })?;

    tracing::info!("Decoded {} {}", document.kind(), document.name());

    if config.format == OutputFormat::Text {
        println!("Kind: {}\n", document.kind().to_string().yellow());
    }

    match &document {
        AnyDocument::Template(template) => show_template(template, config),
        AnyDocument::Pipeline(pipeline) => show_pipeline(pipeline, config),
    }
}
