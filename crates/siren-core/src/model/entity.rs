use serde_json::{Map, Value};

use crate::error::Result;
use crate::model::action::{Action, Actions};
use crate::model::link::Link;
use crate::model::sub_entity::SubEntity;
use crate::model::tokens::Classes;
use crate::serializer::{JsonSerializer, SirenSerializer};

/// The root of a Siren document.
///
/// Every member is optional; an entity with nothing set encodes as `{}`.
/// Collections are either absent or non-empty; an empty collection assigned
/// directly encodes as if absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    pub classes: Option<Classes>,
    /// Domain state, passed through untouched.
    pub properties: Option<Map<String, Value>>,
    pub entities: Option<Vec<SubEntity>>,
    pub links: Option<Vec<Link>>,
    pub actions: Option<Actions>,
    pub title: Option<String>,
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

impl Entity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_classes(mut self, classes: Classes) -> Self {
        self.classes = Some(classes);
        self
    }

    #[must_use]
    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Set one property, creating the properties object if needed.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn with_entities(mut self, entities: impl IntoIterator<Item = SubEntity>) -> Self {
        self.entities = non_empty(entities.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links = non_empty(links.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: Actions) -> Self {
        self.actions = if actions.is_empty() {
            None
        } else {
            Some(actions)
        };
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// First link carrying the given relation.
    #[must_use]
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links
            .as_ref()
            .and_then(|links| links.iter().find(|l| l.rel.contains(rel)))
    }

    #[must_use]
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.as_ref().and_then(|actions| actions.get(name))
    }

    /// Encode with the default serializer options.
    #[must_use]
    pub fn to_json(&self) -> Value {
        JsonSerializer::default().entity(self)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }
}
