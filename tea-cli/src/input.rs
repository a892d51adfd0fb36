//! Descriptor input
//!
//! Acquires the stream a descriptor is decoded from: a file, or stdin.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, Read};

/// Path argument that selects stdin
pub const STDIN: &str = "-";

/// Open the descriptor at `path` for reading
pub fn open(path: &str) -> Result<Box<dyn Read>> {
    if path == STDIN {
        tracing::debug!("Reading descriptor from stdin");
        return Ok(Box::new(io::stdin().lock()));
    }

    tracing::debug!("Reading descriptor from {}", path);
    let file =
        File::open(path).with_context(|| format!("Failed to open descriptor file: {}", path))?;
    Ok(Box::new(BufReader::new(file)))
}
