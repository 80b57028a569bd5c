//! Encoding of the Siren model into JSON.
//!
//! Optional members are emitted only when present. Member order within each
//! object is fixed, so the same model always renders to the same text:
//!
//! - entity: `class`, `properties`, `entities`, `links`, `actions`, `title`
//!   (embedded representations append `rel`)
//! - link: `class`, `rel`, `href`, `title`, `type`
//! - action: `name`, `class`, `method`, `href`, `title`, `type`, `fields`
//! - field: `name`, `class`, then `type`, `schema` or `fields` depending on
//!   the variant, then `value`, `title`

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::SerializerOptions;
use crate::model::{
    Action, Classes, DefaultField, EmbeddedLink, EmbeddedRepresentation, Entity, Field, Link,
    MimeType, NestedField, Rel, SchemaField, SubEntity,
};

/// A target format for Siren documents.
///
/// Implementors provide one encoding per node kind; the provided methods
/// dispatch sub-entities and fields to the matching variant.
pub trait SirenSerializer {
    type Output;

    fn entity(&self, entity: &Entity) -> Self::Output;

    fn embedded_representation(&self, representation: &EmbeddedRepresentation) -> Self::Output;

    fn embedded_link(&self, link: &EmbeddedLink) -> Self::Output;

    fn link(&self, link: &Link) -> Self::Output;

    fn action(&self, action: &Action) -> Self::Output;

    fn default_field(&self, field: &DefaultField) -> Self::Output;

    fn schema_field(&self, field: &SchemaField) -> Self::Output;

    fn nested_field(&self, field: &NestedField) -> Self::Output;

    fn sub_entity(&self, sub_entity: &SubEntity) -> Self::Output {
        sub_entity.to_json(self)
    }

    fn field(&self, field: &Field) -> Self::Output {
        field.to_json(self)
    }
}

/// Encodes the model as a [`serde_json::Value`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    options: SerializerOptions,
}

fn string_array<'a>(tokens: impl IntoIterator<Item = &'a String>) -> Value {
    Value::Array(tokens.into_iter().cloned().map(Value::String).collect())
}

fn insert_classes(object: &mut Map<String, Value>, classes: Option<&Classes>) {
    if let Some(classes) = classes {
        object.insert("class".to_string(), string_array(classes));
    }
}

fn insert_title(object: &mut Map<String, Value>, title: Option<&str>) {
    if let Some(title) = title {
        object.insert("title".to_string(), Value::String(title.to_string()));
    }
}

fn insert_type(object: &mut Map<String, Value>, media_type: Option<&MimeType>) {
    if let Some(media_type) = media_type {
        object.insert("type".to_string(), Value::String(media_type.format()));
    }
}

impl JsonSerializer {
    #[must_use]
    pub const fn new(options: SerializerOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &SerializerOptions {
        &self.options
    }

    fn entity_object(&self, entity: &Entity) -> Map<String, Value> {
        let mut object = Map::new();
        insert_classes(&mut object, entity.classes.as_ref());
        if let Some(properties) = &entity.properties {
            object.insert("properties".to_string(), Value::Object(properties.clone()));
        }
        if let Some(entities) = entity.entities.as_ref().filter(|e| !e.is_empty()) {
            let encoded = entities.iter().map(|e| self.sub_entity(e)).collect();
            object.insert("entities".to_string(), Value::Array(encoded));
        }
        if let Some(links) = entity.links.as_ref().filter(|l| !l.is_empty()) {
            let encoded = links.iter().map(|l| self.link(l)).collect();
            object.insert("links".to_string(), Value::Array(encoded));
        }
        if let Some(actions) = entity.actions.as_ref().filter(|a| !a.is_empty()) {
            let encoded = actions.iter().map(|a| self.action(a)).collect();
            object.insert("actions".to_string(), Value::Array(encoded));
        }
        insert_title(&mut object, entity.title.as_deref());
        object
    }

    fn link_object(
        rel: &Rel,
        href: &str,
        classes: Option<&Classes>,
        media_type: Option<&MimeType>,
        title: Option<&str>,
    ) -> Value {
        let mut object = Map::new();
        insert_classes(&mut object, classes);
        object.insert("rel".to_string(), string_array(rel));
        object.insert("href".to_string(), Value::String(href.to_string()));
        insert_title(&mut object, title);
        insert_type(&mut object, media_type);
        Value::Object(object)
    }

    // Shared head of every field encoding: `name` then `class`.
    fn field_head(name: &str, classes: Option<&Classes>) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert("name".to_string(), Value::String(name.to_string()));
        insert_classes(&mut object, classes);
        object
    }

    fn field_tail(mut object: Map<String, Value>, value: Option<&Value>, title: Option<&str>) -> Value {
        if let Some(value) = value {
            object.insert("value".to_string(), value.clone());
        }
        insert_title(&mut object, title);
        Value::Object(object)
    }
}

impl SirenSerializer for JsonSerializer {
    type Output = Value;

    fn entity(&self, entity: &Entity) -> Value {
        log::debug!(
            "Serializing entity{}",
            entity
                .title
                .as_deref()
                .map(|t| format!(" '{}'", t))
                .unwrap_or_default()
        );
        Value::Object(self.entity_object(entity))
    }

    fn embedded_representation(&self, representation: &EmbeddedRepresentation) -> Value {
        log::trace!("Serializing embedded representation rel={}", representation.rel);
        let mut object = self.entity_object(&representation.entity);
        object.insert("rel".to_string(), string_array(&representation.rel));
        Value::Object(object)
    }

    fn embedded_link(&self, link: &EmbeddedLink) -> Value {
        log::trace!("Serializing embedded link rel={} href={}", link.rel, link.href);
        Self::link_object(
            &link.rel,
            &link.href,
            link.classes.as_ref(),
            link.media_type.as_ref(),
            link.title.as_deref(),
        )
    }

    fn link(&self, link: &Link) -> Value {
        if self.options.link_details {
            Self::link_object(
                &link.rel,
                &link.href,
                link.classes.as_ref(),
                link.media_type.as_ref(),
                link.title.as_deref(),
            )
        } else {
            Self::link_object(&link.rel, &link.href, None, None, None)
        }
    }

    fn action(&self, action: &Action) -> Value {
        log::trace!("Serializing action '{}'", action.name);
        let mut object = Map::new();
        object.insert("name".to_string(), Value::String(action.name.clone()));
        insert_classes(&mut object, action.classes.as_ref());
        match action.method {
            Some(method) => {
                object.insert("method".to_string(), Value::String(method.as_str().to_string()));
            }
            None if self.options.explicit_get_method => {
                object.insert(
                    "method".to_string(),
                    Value::String(action.effective_method().as_str().to_string()),
                );
            }
            None => {}
        }
        object.insert("href".to_string(), Value::String(action.href.clone()));
        insert_title(&mut object, action.title.as_deref());
        insert_type(&mut object, action.media_type.as_ref());
        if let Some(fields) = &action.fields {
            let encoded = fields.iter().map(|f| self.field(f)).collect();
            object.insert("fields".to_string(), Value::Array(encoded));
        }
        Value::Object(object)
    }

    fn default_field(&self, field: &DefaultField) -> Value {
        let mut object = Self::field_head(&field.name, field.classes.as_ref());
        object.insert(
            "type".to_string(),
            Value::String(field.field_type.as_str().to_string()),
        );
        Self::field_tail(object, field.value.as_ref(), field.title.as_deref())
    }

    fn schema_field(&self, field: &SchemaField) -> Value {
        let mut object = Self::field_head(&field.name, field.classes.as_ref());
        object.insert("schema".to_string(), field.schema.clone());
        Self::field_tail(object, field.value.as_ref(), field.title.as_deref())
    }

    fn nested_field(&self, field: &NestedField) -> Value {
        let mut object = Self::field_head(&field.name, field.classes.as_ref());
        let encoded = field.fields.iter().map(|f| self.field(f)).collect();
        object.insert("fields".to_string(), Value::Array(encoded));
        Self::field_tail(object, field.value.as_ref(), field.title.as_deref())
    }
}

// Every node serializes through serde as its Siren JSON form.
macro_rules! serialize_via_json {
    ($ty:ty, $method:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                JsonSerializer::default().$method(self).serialize(serializer)
            }
        }
    };
}

serialize_via_json!(Entity, entity);
serialize_via_json!(SubEntity, sub_entity);
serialize_via_json!(Link, link);
serialize_via_json!(Action, action);
serialize_via_json!(Field, field);
