//! Core domain types
//!
//! Template and pipeline entities are immutable value trees built once per
//! decode call and owned by whoever asked for the decode. Cross references
//! (work dependencies, deployment targets) stay plain names and are never
//! resolved in this crate.

pub mod common;
pub mod document;
pub mod pipeline;
pub mod template;

use serde::{Deserialize, Deserializer};

/// Deserialize a field where an explicit null means the same as absence.
///
/// Used together with `#[serde(default)]` so that `key:` with no value
/// decodes to the zero value of the field type.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
