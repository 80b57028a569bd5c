//! Siren hypermedia model and serializer.
//!
//! This crate defines the Siren node types (Entity, SubEntity, Link,
//! Action, Field) as immutable values and encodes them into the Siren
//! JSON representation.
//!
//! # Example
//!
//! ```
//! use siren_core::{Entity, Link, Rel};
//!
//! let order = Entity::new()
//!     .with_links([Link::new(Rel::of("self"), "http://x/1")])
//!     .with_title("Order");
//!
//! assert_eq!(
//!     order.to_json_string().unwrap(),
//!     r#"{"links":[{"rel":["self"],"href":"http://x/1"}],"title":"Order"}"#
//! );
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod model;
pub mod serializer;

pub use config::SerializerOptions;
pub use error::{Error, Result};
pub use model::{
    Action, Actions, Classes, EmbeddedLink, EmbeddedRepresentation, Entity, Field, FieldType,
    Fields, Link, Method, MimeType, Rel, SubEntity,
};
pub use serializer::{JsonSerializer, SirenSerializer};
