//! Tea YAML Decoding
//!
//! This crate turns descriptor documents into Tea entities. It includes:
//! - Settings loading: document text to a generic string-keyed mapping
//! - Kind discrimination: the top-level `kind` literal must match the request
//! - Structural decoding: the mapping onto a Template or Pipeline entity
//!
//! Every decode call builds its own loader state; nothing is shared between
//! calls, so decodes can run concurrently on separate threads. The crate
//! never logs or prints. Failures come back as [`DecodeError`].

pub mod error;
pub mod kind;
pub mod parser;
pub mod settings;

pub use error::{DecodeError, ErrorCategory, Result};
pub use kind::check_kind;
pub use parser::{
    AnyDocument, decode, decode_any, decode_any_str, decode_pipeline, decode_pipeline_str,
    decode_settings, decode_template, decode_template_str,
};
pub use settings::Settings;

pub use tea_core::{Document, Handle, Kind, Pipeline, Template};
