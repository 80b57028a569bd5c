use crate::model::mime::MimeType;
use crate::model::tokens::{Classes, Rel};

/// A navigational link to a related resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    pub rel: Rel,
    pub href: String,
    pub classes: Option<Classes>,
    pub media_type: Option<MimeType>,
    pub title: Option<String>,
}

impl Link {
    #[must_use]
    pub fn new(rel: Rel, href: impl Into<String>) -> Self {
        Self {
            rel,
            href: href.into(),
            classes: None,
            media_type: None,
            title: None,
        }
    }

    #[must_use]
    pub fn with_classes(mut self, classes: Classes) -> Self {
        self.classes = Some(classes);
        self
    }

    #[must_use]
    pub fn with_type(mut self, media_type: MimeType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
