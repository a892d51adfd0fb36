//! Pipeline domain types

use serde::{Deserialize, Serialize};

use super::common::{Node, Parameter};
use super::nullable;

/// Pipeline definition
///
/// Steps run in declaration order. Work names, dependencies and deployment
/// targets are free text here; an orchestration layer owns resolving them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEntity {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Endpoints that deployments may refer to by name
    #[serde(default, deserialize_with = "nullable")]
    pub nodes: Vec<Node>,

    /// Must be present in the document, even if empty
    #[serde(deserialize_with = "nullable")]
    pub steps: Vec<Step>,
}

impl PipelineEntity {
    /// Every work item, step by step, in declaration order
    pub fn works(&self) -> impl Iterator<Item = &Work> + '_ {
        self.steps.iter().flat_map(|step| step.works.iter())
    }

    /// First work item with the given name
    pub fn work(&self, name: &str) -> Option<&Work> {
        self.works().find(|work| work.name == name)
    }

    /// First node with the given name
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }
}

/// A named group of works
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable")]
    pub works: Vec<Work>,
}

/// One deployable unit instantiating a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    /// Template reference, not resolved here
    #[serde(default, deserialize_with = "nullable")]
    pub template: String,

    /// Conventionally `<step>/<index>`
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable")]
    pub description: String,

    #[serde(default, deserialize_with = "nullable")]
    pub parameters: Vec<Parameter>,

    #[serde(default, deserialize_with = "nullable")]
    pub deployment: Deployment,

    #[serde(default, deserialize_with = "nullable")]
    pub dependencies: Vec<Dependency>,

    /// Finally online: keep running after the pipeline completes.
    /// Absent means done once the task finishes.
    #[serde(default, deserialize_with = "nullable")]
    pub serving: bool,
}

impl Work {
    pub fn is_serving(&self) -> bool {
        self.serving
    }

    /// Names of the works this one depends on, in declaration order
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.dependencies.iter().map(|d| d.dependency.as_str())
    }
}

/// Node names a work is deployed to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    #[serde(default, deserialize_with = "nullable")]
    pub client: String,

    #[serde(default, deserialize_with = "nullable")]
    pub server: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Name of another work in the same or an earlier step
    #[serde(default, deserialize_with = "nullable")]
    pub dependency: String,
}
