//! Tea Core
//!
//! Entity models for Tea deployment descriptors.
//!
//! This crate contains:
//! - Domain types: the Template and Pipeline entity graphs and their shared parts
//! - Handle: the owning wrapper handed back by the decode entry points

pub mod domain;
pub mod handle;

pub use domain::document::{Document, Kind, UnknownKind};
pub use handle::{Handle, Pipeline, Template};
