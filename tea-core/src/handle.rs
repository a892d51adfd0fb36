//! Owning handle over a decoded entity
//!
//! The decode entry points return entities wrapped in a [`Handle`]. The
//! handle owns the entity tree behind a single allocation so it can be moved
//! around without copying the tree. There is no setter: once returned, an
//! entity is read-only.

use serde::Serialize;

use crate::domain::pipeline::PipelineEntity;
use crate::domain::template::TemplateEntity;

/// A decoded template
pub type Template = Handle<TemplateEntity>;

/// A decoded pipeline
pub type Pipeline = Handle<PipelineEntity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Handle<E> {
    entity: Box<E>,
}

impl<E> Handle<E> {
    pub fn new(entity: E) -> Self {
        Self {
            entity: Box::new(entity),
        }
    }

    pub fn entity(&self) -> &E {
        &self.entity
    }

    /// Take the entity out of the handle
    pub fn into_inner(self) -> E {
        *self.entity
    }
}

impl<E> std::ops::Deref for Handle<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.entity
    }
}

impl<E> AsRef<E> for Handle<E> {
    fn as_ref(&self) -> &E {
        &self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_read_access() {
        let handle = Template::new(TemplateEntity {
            name: "evaluate".to_string(),
            classification: Vec::new(),
        });

        assert_eq!(handle.name, "evaluate");
        assert_eq!(handle.entity().name, "evaluate");
        assert_eq!(handle.as_ref().classification.len(), 0);
    }

    #[test]
    fn test_handle_into_inner() {
        let entity = PipelineEntity {
            name: "default".to_string(),
            ..PipelineEntity::default()
        };
        let handle = Pipeline::new(entity.clone());

        assert_eq!(handle.into_inner(), entity);
    }

    #[test]
    fn test_handle_serializes_as_entity() {
        let handle = Pipeline::new(PipelineEntity {
            name: "default".to_string(),
            ..PipelineEntity::default()
        });

        let json = serde_json::to_value(&handle).unwrap();
        assert_eq!(json["name"], "default");
        assert!(json["steps"].as_array().unwrap().is_empty());
    }
}
