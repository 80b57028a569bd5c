pub mod action;
pub mod entity;
pub mod field;
pub mod fields;
pub mod link;
pub mod method;
pub mod mime;
pub mod sub_entity;
pub mod tokens;

pub use action::{Action, Actions};
pub use entity::Entity;
pub use field::{DefaultField, Field, FieldType, NestedField, SchemaField};
pub use fields::Fields;
pub use link::Link;
pub use method::Method;
pub use mime::MimeType;
pub use sub_entity::{EmbeddedLink, EmbeddedRepresentation, SubEntity};
pub use tokens::{Classes, Rel};
