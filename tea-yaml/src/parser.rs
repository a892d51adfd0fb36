//! Descriptor decoding
//!
//! Every entry point runs the same three steps: load the settings, check the
//! `kind`, then decode the mapping onto the entity shape. [`decode`] is that
//! routine, parameterized by the target [`Document`] type; the named entry
//! points only fix the shape.
//!
//! Structural decoding follows these rules:
//! - Scalars must already have the field's type; `42` is not a string
//! - `type` of a classification must be `client` or `server`
//! - Absent or null keys leave the field at its zero value, except the
//!   payload key of each kind (`classification`, `steps`), which must exist
//! - Unknown keys are ignored, including number or boolean keys, which the
//!   loader turns into strings
//! - `<<` merge keys are applied before decoding
//! - The first mismatch fails the whole decode

use std::io::Read;

use tea_core::domain::pipeline::PipelineEntity;
use tea_core::domain::template::TemplateEntity;
use tea_core::{Document, Handle, Kind, Pipeline, Template};

use crate::error::{DecodeError, Result};
use crate::kind::{check_kind, detect_kind};
use crate::settings::Settings;

/// Decode a document of kind `D::KIND` from a stream
///
/// # Errors
/// Returns an error if:
/// - The stream is not a well-formed document ([`DecodeError::Parse`])
/// - The document's `kind` is not `D::KIND` ([`DecodeError::KindMismatch`])
/// - A field does not fit the entity shape ([`DecodeError::Structure`])
pub fn decode<D: Document>(reader: impl Read) -> Result<Handle<D>> {
    decode_settings(Settings::from_reader(reader)?)
}

/// Decode already loaded settings as `D`
pub fn decode_settings<D: Document>(settings: Settings) -> Result<Handle<D>> {
    check_kind(&settings, D::KIND)?;
    decode_structure(settings).map(Handle::new)
}

fn decode_structure<D: Document>(settings: Settings) -> Result<D> {
    serde_yaml::from_value(settings.into_value()).map_err(|e| DecodeError::structure(D::KIND, e))
}

/// Decode a template document from a stream
///
/// # Example
/// ```
/// use tea_yaml::decode_template;
///
/// let source = r#"
/// name: evaluate
/// kind: template
/// classification:
///   - type: server
///     task:
///       cmd:
///         - python getEvaluateModel.py ModelPath TargetPath
/// "#;
///
/// let template = decode_template(source.as_bytes())?;
/// assert_eq!(template.name, "evaluate");
/// assert_eq!(template.classification.len(), 1);
/// # Ok::<(), tea_yaml::DecodeError>(())
/// ```
pub fn decode_template(reader: impl Read) -> Result<Template> {
    decode::<TemplateEntity>(reader)
}

/// Decode a pipeline document from a stream
pub fn decode_pipeline(reader: impl Read) -> Result<Pipeline> {
    decode::<PipelineEntity>(reader)
}

pub fn decode_template_str(source: &str) -> Result<Template> {
    decode_template(source.as_bytes())
}

pub fn decode_pipeline_str(source: &str) -> Result<Pipeline> {
    decode_pipeline(source.as_bytes())
}

/// A decoded document of either kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyDocument {
    Template(Template),
    Pipeline(Pipeline),
}

impl AnyDocument {
    pub fn kind(&self) -> Kind {
        match self {
            AnyDocument::Template(_) => Kind::Template,
            AnyDocument::Pipeline(_) => Kind::Pipeline,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnyDocument::Template(template) => &template.name,
            AnyDocument::Pipeline(pipeline) => &pipeline.name,
        }
    }
}

/// Decode a document of whichever kind it declares
///
/// A missing or unrecognized `kind` is a [`DecodeError::KindMismatch`]
/// expecting any of the known kinds.
pub fn decode_any(reader: impl Read) -> Result<AnyDocument> {
    let settings = Settings::from_reader(reader)?;
    match detect_kind(&settings)? {
        Kind::Template => decode_settings(settings).map(AnyDocument::Template),
        Kind::Pipeline => decode_settings(settings).map(AnyDocument::Pipeline),
    }
}

pub fn decode_any_str(source: &str) -> Result<AnyDocument> {
    decode_any(source.as_bytes())
}
