//! Kind discriminator
//!
//! Checks the top-level `kind` entry before any structural decoding, so a
//! document of the wrong kind is reported as such instead of as a confusing
//! field mismatch.

use serde_yaml::Value;
use tea_core::Kind;

use crate::error::{DecodeError, Result};
use crate::settings::Settings;

/// Fail unless the document's `kind` is exactly `expected`
///
/// A missing `kind` never matches.
pub fn check_kind(settings: &Settings, expected: Kind) -> Result<()> {
    match found_kind(settings) {
        Some(found) if found == expected.as_str() => Ok(()),
        found => Err(DecodeError::kind_mismatch(found, expected.as_str())),
    }
}

/// Work out which kind a document declares
pub(crate) fn detect_kind(settings: &Settings) -> Result<Kind> {
    let found = found_kind(settings);
    found
        .as_deref()
        .and_then(|literal| literal.parse::<Kind>().ok())
        .ok_or_else(|| {
            let expected = Kind::ALL.map(|kind| kind.as_str()).join(" or ");
            DecodeError::kind_mismatch(found.clone(), expected)
        })
}

/// Text of the `kind` entry; non-string scalars are rendered as written
///
/// A tag on the entry is dropped, so `kind: !x template` reads as `template`.
fn found_kind(settings: &Settings) -> Option<String> {
    let mut value = settings.kind()?;
    while let Value::Tagged(tagged) = value {
        value = &tagged.value;
    }
    match value {
        Value::String(kind) => Some(kind.clone()),
        Value::Number(kind) => Some(kind.to_string()),
        Value::Bool(kind) => Some(kind.to_string()),
        _ => None,
    }
}
