use crate::error::{Error, Result};
use crate::model::fields::Fields;
use crate::model::method::Method;
use crate::model::mime::MimeType;
use crate::model::tokens::Classes;

/// A state transition a client may invoke.
///
/// A missing method means GET, and a missing type means the client should
/// submit `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub name: String,
    pub href: String,
    pub method: Option<Method>,
    pub classes: Option<Classes>,
    pub title: Option<String>,
    pub media_type: Option<MimeType>,
    pub fields: Option<Fields>,
}

impl Action {
    #[must_use]
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            method: None,
            classes: None,
            title: None,
            media_type: None,
            fields: None,
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    #[must_use]
    pub fn with_classes(mut self, classes: Classes) -> Self {
        self.classes = Some(classes);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, media_type: MimeType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = Some(fields);
        self
    }

    #[must_use]
    pub fn effective_method(&self) -> Method {
        self.method.unwrap_or_default()
    }
}

/// Ordered collection of [`Action`]s with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Actions(Vec<Action>);

impl Actions {
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn new(actions: impl IntoIterator<Item = Action>) -> Result<Self> {
        actions
            .into_iter()
            .try_fold(Self::empty(), |acc, action| acc.append(action))
    }

    pub fn append(mut self, action: Action) -> Result<Self> {
        if self.get(&action.name).is_some() {
            log::debug!("Rejecting duplicate action name '{}'", action.name);
            return Err(Error::DuplicateActionName(action.name));
        }
        self.0.push(action);
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Action> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
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

impl<'a> IntoIterator for &'a Actions {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::{Field, FieldType};

    #[test]
    fn test_action_new() {
        let action = Action::new("add-item", "http://x/orders/1/items");
        assert_eq!(action.name, "add-item");
        assert!(action.method.is_none());
        assert!(action.fields.is_none());
        assert_eq!(action.effective_method(), Method::Get);
    }

    #[test]
    fn test_action_builder() {
        let fields = Fields::new(vec![Field::of("quantity", FieldType::Number)]).unwrap();
        let action = Action::new("add-item", "http://x/orders/1/items")
            .with_method(Method::Post)
            .with_title("Add Item")
            .with_type(MimeType::json())
            .with_classes(Classes::of("cart"))
            .with_fields(fields.clone());

        assert_eq!(action.effective_method(), Method::Post);
        assert_eq!(action.title, Some("Add Item".to_string()));
        assert_eq!(action.media_type, Some(MimeType::json()));
        assert_eq!(action.fields, Some(fields));
    }

    #[test]
    fn test_actions_reject_duplicate_names() {
        let result = Actions::new(vec![
            Action::new("delete", "http://x/1").with_method(Method::Delete),
            Action::new("delete", "http://x/2"),
        ]);
        match result {
            Err(Error::DuplicateActionName(name)) => assert_eq!(name, "delete"),
            other => panic!("expected duplicate action name, got {:?}", other),
        }
    }

    #[test]
    fn test_actions_lookup_and_order() {
        let actions = Actions::new(vec![
            Action::new("update", "http://x/1").with_method(Method::Put),
            Action::new("delete", "http://x/1").with_method(Method::Delete),
        ])
        .unwrap();

        let names: Vec<&str> = actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["update", "delete"]);
        assert_eq!(
            actions.get("delete").map(Action::effective_method),
            Some(Method::Delete)
        );
        assert!(actions.get("create").is_none());
    }
}
