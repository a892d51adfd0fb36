//! Document kinds
//!
//! Every descriptor carries a top-level `kind` literal naming the entity
//! shape it describes. [`Document`] ties an entity type to that literal so a
//! single decode routine can serve both shapes.

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::pipeline::PipelineEntity;
use super::template::TemplateEntity;

/// The `kind` discriminator of a descriptor document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Template,
    Pipeline,
}

impl Kind {
    /// Every recognized kind, in declaration order
    pub const ALL: [Kind; 2] = [Kind::Template, Kind::Pipeline];

    /// The literal used for this kind in documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Template => "template",
            Kind::Pipeline => "pipeline",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the kind literals
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown document kind: {0}")]
pub struct UnknownKind(pub String);

impl std::str::FromStr for Kind {
    type Err = UnknownKind;

    /// Matches the literal exactly; `Template` or ` template` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// An entity shape that can be decoded from a descriptor document
pub trait Document: DeserializeOwned {
    /// The `kind` literal a document must carry to decode into this shape
    const KIND: Kind;
}

impl Document for TemplateEntity {
    const KIND: Kind = Kind::Template;
}

impl Document for PipelineEntity {
    const KIND: Kind = Kind::Pipeline;
}
