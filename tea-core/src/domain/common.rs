//! Types shared by templates and pipelines

use serde::{Deserialize, Serialize};

use super::nullable;

/// A named argument or return slot
///
/// `param_type` is a free-form tag such as `int`, `string` or `list[int]`.
/// It is carried as written and never checked against a type system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub param_type: String,
}

/// A named network endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Endpoint address in `host:port` form
    #[serde(default, deserialize_with = "nullable")]
    pub socket: String,
}
