use crate::model::entity::Entity;
use crate::model::link::Link;
use crate::model::mime::MimeType;
use crate::model::tokens::{Classes, Rel};
use crate::serializer::SirenSerializer;

/// A sub-entity whose full state is inlined.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedRepresentation {
    pub rel: Rel,
    pub entity: Entity,
}

/// A sub-entity given only as a pointer.
///
/// Same attributes as a [`Link`]; the two convert into each other without
/// loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmbeddedLink {
    pub rel: Rel,
    pub href: String,
    pub classes: Option<Classes>,
    pub media_type: Option<MimeType>,
    pub title: Option<String>,
}

impl EmbeddedLink {
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

    #[must_use]
    pub fn to_link(&self) -> Link {
        Link {
            rel: self.rel.clone(),
            href: self.href.clone(),
            classes: self.classes.clone(),
            media_type: self.media_type.clone(),
            title: self.title.clone(),
        }
    }
}

impl From<Link> for EmbeddedLink {
    fn from(link: Link) -> Self {
        Self {
            rel: link.rel,
            href: link.href,
            classes: link.classes,
            media_type: link.media_type,
            title: link.title,
        }
    }
}

impl From<EmbeddedLink> for Link {
    fn from(link: EmbeddedLink) -> Self {
        Self {
            rel: link.rel,
            href: link.href,
            classes: link.classes,
            media_type: link.media_type,
            title: link.title,
        }
    }
}

/// A resource related to its parent entity, either inlined or linked.
#[derive(Debug, Clone, PartialEq)]
pub enum SubEntity {
    Representation(EmbeddedRepresentation),
    Link(EmbeddedLink),
}

impl SubEntity {
    #[must_use]
    pub fn representation(rel: Rel, entity: Entity) -> Self {
        Self::Representation(EmbeddedRepresentation { rel, entity })
    }

    #[must_use]
    pub fn link(rel: Rel, href: impl Into<String>) -> Self {
        Self::Link(EmbeddedLink::new(rel, href))
    }

    /// Embed an existing link, keeping all of its attributes.
    #[must_use]
    pub fn embedded_link(link: Link) -> Self {
        Self::Link(link.into())
    }

    #[must_use]
    pub fn rel(&self) -> &Rel {
        match self {
            Self::Representation(r) => &r.rel,
            Self::Link(l) => &l.rel,
        }
    }

    pub fn fold<X>(
        &self,
        representation: impl FnOnce(&EmbeddedRepresentation) -> X,
        link: impl FnOnce(&EmbeddedLink) -> X,
    ) -> X {
        match self {
            Self::Representation(r) => representation(r),
            Self::Link(l) => link(l),
        }
    }

    pub fn to_json<S: SirenSerializer + ?Sized>(&self, serializer: &S) -> S::Output {
        self.fold(
            |r| serializer.embedded_representation(r),
            |l| serializer.embedded_link(l),
        )
    }
}

impl From<Link> for SubEntity {
    fn from(link: Link) -> Self {
        Self::embedded_link(link)
    }
}

impl From<EmbeddedLink> for SubEntity {
    fn from(link: EmbeddedLink) -> Self {
        Self::Link(link)
    }
}

impl From<EmbeddedRepresentation> for SubEntity {
    fn from(representation: EmbeddedRepresentation) -> Self {
        Self::Representation(representation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_link() -> EmbeddedLink {
        EmbeddedLink::new(Rel::item(), "http://x/items/1")
            .with_classes(Classes::of("item"))
            .with_type(MimeType::siren())
            .with_title("Item 1")
    }

    #[test]
    fn test_link_constructor_leaves_optionals_absent() {
        let sub = SubEntity::link(Rel::item(), "http://x/items/1");
        match sub {
            SubEntity::Link(l) => {
                assert!(l.classes.is_none());
                assert!(l.media_type.is_none());
                assert!(l.title.is_none());
            }
            SubEntity::Representation(_) => panic!("expected embedded link"),
        }
    }

    #[test]
    fn test_embedded_link_equality_covers_every_attribute() {
        let base = full_link();
        assert_eq!(base, full_link());

        let mut changed = vec![
            base.clone().with_classes(Classes::of("other")),
            base.clone().with_type(MimeType::json()),
            base.clone().with_title("Item 2"),
        ];
        let mut other_rel = base.clone();
        other_rel.rel = Rel::of("related");
        changed.push(other_rel);
        let mut other_href = base.clone();
        other_href.href = "http://x/items/2".to_string();
        changed.push(other_href);

        for variant in changed {
            assert_ne!(base, variant);
        }
    }

    #[test]
    fn test_to_link_copies_all_attributes() {
        let embedded = full_link();
        let link = embedded.to_link();
        assert_eq!(link.rel, embedded.rel);
        assert_eq!(link.href, embedded.href);
        assert_eq!(link.classes, embedded.classes);
        assert_eq!(link.media_type, embedded.media_type);
        assert_eq!(link.title, embedded.title);
        assert_eq!(EmbeddedLink::from(link), embedded);
    }

    #[test]
    fn test_embedded_link_from_link() {
        let link = Link::new(Rel::up(), "http://x/").with_title("Home");
        let sub = SubEntity::from(link.clone());
        assert_eq!(sub.rel(), &Rel::up());
        assert!(matches!(sub, SubEntity::Link(ref l) if l.to_link() == link));
    }

    #[test]
    fn test_fold_dispatch() {
        let representation =
            SubEntity::representation(Rel::item(), Entity::new().with_title("Item 1"));
        let link = SubEntity::link(Rel::item(), "http://x/items/1");

        assert_eq!(representation.fold(|_| "representation", |_| "link"), "representation");
        assert_eq!(link.fold(|_| "representation", |_| "link"), "link");
    }
}
