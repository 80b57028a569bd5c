use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

macro_rules! define_token_set {
    ($name:ident, $kind:expr, $doc:expr) => {
        #[doc = $doc]
        ///
        /// Never empty, and each token appears once. Iteration follows
        /// insertion order; equality and hashing ignore it.
        #[derive(Debug, Clone)]
        pub struct $name(Vec<String>);

        impl $name {
            /// A set holding exactly one token.
            #[must_use]
            pub fn of(token: impl Into<String>) -> Self {
                Self(vec![token.into()])
            }

            pub fn new<I, S>(tokens: I) -> Result<Self>
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                let mut collected: Vec<String> = Vec::new();
                for token in tokens {
                    let token = token.into();
                    if collected.contains(&token) {
                        return Err(Error::DuplicateToken { kind: $kind, token });
                    }
                    collected.push(token);
                }
                if collected.is_empty() {
                    return Err(Error::EmptyTokenSet { kind: $kind });
                }
                Ok(Self(collected))
            }

            #[must_use]
            pub fn contains(&self, token: &str) -> bool {
                self.0.iter().any(|t| t == token)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, String> {
                self.0.iter()
            }

            #[allow(clippy::len_without_is_empty)]
            #[must_use]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            #[must_use]
            pub fn first(&self) -> &str {
                // `of` and `new` are the only constructors and never yield an empty set.
                &self.0[0]
            }

            #[must_use]
            pub fn as_slice(&self) -> &[String] {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.len() == other.0.len() && self.0.iter().all(|t| other.contains(t))
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                let mut sorted: Vec<&String> = self.0.iter().collect();
                sorted.sort();
                sorted.hash(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.join(" "))
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self::of(token)
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a String;
            type IntoIter = std::slice::Iter<'a, String>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

define_token_set!(
    Classes,
    "classes",
    "Semantic classes of an entity, link, action or field."
);
define_token_set!(Rel, "rel", "Link relation types.");

impl Rel {
    #[must_use]
    pub fn self_() -> Self {
        Self::of("self")
    }

    #[must_use]
    pub fn next() -> Self {
        Self::of("next")
    }

    #[must_use]
    pub fn prev() -> Self {
        Self::of("prev")
    }

    #[must_use]
    pub fn collection() -> Self {
        Self::of("collection")
    }

    #[must_use]
    pub fn item() -> Self {
        Self::of("item")
    }

    #[must_use]
    pub fn up() -> Self {
        Self::of("up")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_classes_of() {
        let classes = Classes::of("order");
        assert_eq!(classes.len(), 1);
        assert_eq!(classes.first(), "order");
        assert!(classes.contains("order"));
        assert!(!classes.contains("item"));
    }

    #[test]
    fn test_classes_preserve_insertion_order() {
        let classes = Classes::new(["order", "draft", "archived"]).unwrap();
        let tokens: Vec<&str> = classes.iter().map(String::as_str).collect();
        assert_eq!(tokens, vec!["order", "draft", "archived"]);
    }

    #[test]
    fn test_empty_token_set_rejected() {
        let result = Rel::new(Vec::<String>::new());
        assert!(matches!(result, Err(Error::EmptyTokenSet { kind: "rel" })));
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let result = Classes::new(["order", "draft", "order"]);
        match result {
            Err(Error::DuplicateToken { kind, token }) => {
                assert_eq!(kind, "classes");
                assert_eq!(token, "order");
            }
            other => panic!("expected duplicate token error, got {:?}", other),
        }
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Rel::new(["self", "item"]).unwrap();
        let b = Rel::new(["item", "self"]).unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_inequality_on_different_content() {
        assert_ne!(Rel::of("self"), Rel::of("next"));
        assert_ne!(Rel::of("self"), Rel::new(["self", "next"]).unwrap());
    }

    #[test]
    fn test_display_joins_tokens() {
        let rel = Rel::new(["self", "canonical"]).unwrap();
        assert_eq!(rel.to_string(), "self canonical");
    }

    #[test]
    fn test_well_known_relations() {
        assert_eq!(Rel::self_().first(), "self");
        assert_eq!(Rel::item(), Rel::from("item"));
        assert_eq!(Rel::collection().first(), "collection");
    }
}
