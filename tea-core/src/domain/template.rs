//! Template domain types

use serde::{Deserialize, Serialize};

use super::common::{Node, Parameter};
use super::nullable;

/// Template definition
///
/// A reusable task description with one classification per deployment role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntity {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Must be present in the document, even if empty
    #[serde(deserialize_with = "nullable")]
    pub classification: Vec<Classification>,
}

impl TemplateEntity {
    /// First classification declared for `role`
    pub fn classification(&self, role: Role) -> Option<&Classification> {
        self.classification.iter().find(|c| c.role == role)
    }

    /// Roles in declaration order
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.classification.iter().map(|c| c.role)
    }
}

/// Deployment role of a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Server,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Server => "server",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a template does for one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub role: Role,

    #[serde(default, deserialize_with = "nullable")]
    pub task: Task,

    /// Long-running service; usually only declared for clients
    #[serde(default, deserialize_with = "nullable")]
    pub service: Service,

    #[serde(default, deserialize_with = "nullable")]
    pub nodes: Vec<Node>,
}

/// Startup task run once when the role is deployed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Shell command lines, run in order
    #[serde(default, deserialize_with = "nullable")]
    pub cmd: Vec<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub args: Vec<Parameter>,
}

/// Long-running service and the API it exposes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Process launch commands
    #[serde(default, deserialize_with = "nullable")]
    pub entry: Vec<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub api: Vec<Api>,
}

impl Service {
    /// True when the document declared no service at all
    pub fn is_empty(&self) -> bool {
        self.entry.is_empty() && self.api.is_empty()
    }
}

/// One endpoint of a service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Api {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Request path, e.g. `/api/getQualifiedEmployee`
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,

    #[serde(default, deserialize_with = "nullable")]
    pub args: Vec<Parameter>,

    #[serde(rename = "return", default, deserialize_with = "nullable")]
    pub returns: Vec<Parameter>,
}
