use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::model::fields::Fields;
use crate::model::tokens::Classes;
use crate::serializer::SirenSerializer;

/// Input type of a [`DefaultField`], mirroring the HTML5 input types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Hidden,
    Search,
    Tel,
    Url,
    Email,
    Password,
    Datetime,
    Date,
    Month,
    Week,
    Time,
    DatetimeLocal,
    Number,
    Range,
    Color,
    Checkbox,
    Radio,
    File,
    #[default]
    #[serde(other)]
    Text,
}

impl FieldType {
    pub const ALL: [FieldType; 19] = [
        Self::Hidden,
        Self::Text,
        Self::Search,
        Self::Tel,
        Self::Url,
        Self::Email,
        Self::Password,
        Self::Datetime,
        Self::Date,
        Self::Month,
        Self::Week,
        Self::Time,
        Self::DatetimeLocal,
        Self::Number,
        Self::Range,
        Self::Color,
        Self::Checkbox,
        Self::Radio,
        Self::File,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Text => "text",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Email => "email",
            Self::Password => "password",
            Self::Datetime => "datetime",
            Self::Date => "date",
            Self::Month => "month",
            Self::Week => "week",
            Self::Time => "time",
            Self::DatetimeLocal => "datetime-local",
            Self::Number => "number",
            Self::Range => "range",
            Self::Color => "color",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::File => "file",
        }
    }

    /// Look up a type by its token. Unknown tokens become [`FieldType::Text`].
    #[must_use]
    pub fn from_str_lenient(token: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == token)
            .unwrap_or_else(|| {
                log::warn!("Unknown field type '{}', falling back to text", token);
                Self::Text
            })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FieldType {
    fn from(token: &str) -> Self {
        Self::from_str_lenient(token)
    }
}

// Generates the optional-attribute updaters every field variant shares.
macro_rules! field_attributes {
    ($name:ident) => {
        impl $name {
            #[must_use]
            pub fn with_classes(mut self, classes: Classes) -> Self {
                self.classes = Some(classes);
                self
            }

            #[must_use]
            pub fn with_value(mut self, value: Value) -> Self {
                self.value = Some(value);
                self
            }

            #[must_use]
            pub fn with_title(mut self, title: impl Into<String>) -> Self {
                self.title = Some(title.into());
                self
            }
        }
    };
}

/// A field with a fixed input type.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultField {
    pub name: String,
    pub field_type: FieldType,
    pub classes: Option<Classes>,
    pub value: Option<Value>,
    pub title: Option<String>,
}

/// A field whose expected value is described by a JSON schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub schema: Value,
    pub classes: Option<Classes>,
    pub value: Option<Value>,
    pub title: Option<String>,
}

/// A field grouping further fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedField {
    pub name: String,
    pub fields: Fields,
    pub classes: Option<Classes>,
    pub value: Option<Value>,
    pub title: Option<String>,
}

field_attributes!(DefaultField);
field_attributes!(SchemaField);
field_attributes!(NestedField);

/// One input of an [`Action`](crate::model::Action).
///
/// Exactly one of a type, a schema or nested fields is carried, decided by
/// the constructor used. Fields of different variants are never equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Default(DefaultField),
    Schema(SchemaField),
    Nested(NestedField),
}

impl Field {
    /// A typed field.
    #[must_use]
    pub fn of(name: impl Into<String>, field_type: FieldType) -> Self {
        Self::Default(DefaultField {
            name: name.into(),
            field_type,
            classes: None,
            value: None,
            title: None,
        })
    }

    /// A text field.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::of(name, FieldType::Text)
    }

    #[must_use]
    pub fn schema(name: impl Into<String>, schema: Value) -> Self {
        Self::Schema(SchemaField {
            name: name.into(),
            schema,
            classes: None,
            value: None,
            title: None,
        })
    }

    #[must_use]
    pub fn nested(name: impl Into<String>, fields: Fields) -> Self {
        Self::Nested(NestedField {
            name: name.into(),
            fields,
            classes: None,
            value: None,
            title: None,
        })
    }

    /// Apply the handler matching this field's variant.
    pub fn fold<X>(
        &self,
        default: impl FnOnce(&DefaultField) -> X,
        schema: impl FnOnce(&SchemaField) -> X,
        nested: impl FnOnce(&NestedField) -> X,
    ) -> X {
        match self {
            Self::Default(f) => default(f),
            Self::Schema(f) => schema(f),
            Self::Nested(f) => nested(f),
        }
    }

    /// Run the handler matching this field's variant for its effect.
    pub fn consume(
        &self,
        default: impl FnOnce(&DefaultField),
        schema: impl FnOnce(&SchemaField),
        nested: impl FnOnce(&NestedField),
    ) {
        self.fold(default, schema, nested);
    }

    pub fn to_json<S: SirenSerializer + ?Sized>(&self, serializer: &S) -> S::Output {
        self.fold(
            |f| serializer.default_field(f),
            |f| serializer.schema_field(f),
            |f| serializer.nested_field(f),
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Default(f) => &f.name,
            Self::Schema(f) => &f.name,
            Self::Nested(f) => &f.name,
        }
    }

    #[must_use]
    pub fn classes(&self) -> Option<&Classes> {
        match self {
            Self::Default(f) => f.classes.as_ref(),
            Self::Schema(f) => f.classes.as_ref(),
            Self::Nested(f) => f.classes.as_ref(),
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Default(f) => f.value.as_ref(),
            Self::Schema(f) => f.value.as_ref(),
            Self::Nested(f) => f.value.as_ref(),
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Default(f) => f.title.as_deref(),
            Self::Schema(f) => f.title.as_deref(),
            Self::Nested(f) => f.title.as_deref(),
        }
    }

    #[must_use]
    pub fn with_classes(self, classes: Classes) -> Self {
        match self {
            Self::Default(f) => Self::Default(f.with_classes(classes)),
            Self::Schema(f) => Self::Schema(f.with_classes(classes)),
            Self::Nested(f) => Self::Nested(f.with_classes(classes)),
        }
    }

    #[must_use]
    pub fn with_value(self, value: Value) -> Self {
        match self {
            Self::Default(f) => Self::Default(f.with_value(value)),
            Self::Schema(f) => Self::Schema(f.with_value(value)),
            Self::Nested(f) => Self::Nested(f.with_value(value)),
        }
    }

    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        match self {
            Self::Default(f) => Self::Default(f.with_title(title)),
            Self::Schema(f) => Self::Schema(f.with_title(title)),
            Self::Nested(f) => Self::Nested(f.with_title(title)),
        }
    }
}

impl From<DefaultField> for Field {
    fn from(field: DefaultField) -> Self {
        Self::Default(field)
    }
}

impl From<SchemaField> for Field {
    fn from(field: SchemaField) -> Self {
        Self::Schema(field)
    }
}

impl From<NestedField> for Field {
    fn from(field: NestedField) -> Self {
        Self::Nested(field)
    }
}
