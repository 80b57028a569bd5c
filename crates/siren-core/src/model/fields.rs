use crate::error::{Error, Result};
use crate::model::field::Field;

/// Ordered collection of [`Field`]s with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Vec<Field>);

impl Fields {
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Collect fields, failing on the first repeated name.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Result<Self> {
        fields
            .into_iter()
            .try_fold(Self::empty(), |acc, field| acc.append(field))
    }

    /// A new collection with `field` added at the end.
    pub fn append(mut self, field: Field) -> Result<Self> {
        if self.get(field.name()).is_some() {
            log::debug!("Rejecting duplicate field name '{}'", field.name());
            return Err(Error::DuplicateFieldName(field.name().to_string()));
        }
        self.0.push(field);
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.0.iter().find(|f| f.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
