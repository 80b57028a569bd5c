use std::fmt;

/// A structured media type (`type/subtype` plus parameters).
///
/// Parameters render in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeType {
    pub main_type: String,
    pub sub_type: String,
    pub parameters: Vec<(String, String)>,
}

impl MimeType {
    #[must_use]
    pub fn new(main_type: impl Into<String>, sub_type: impl Into<String>) -> Self {
        Self {
            main_type: main_type.into(),
            sub_type: sub_type.into(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((name.into(), value.into()));
        self
    }

    /// `application/json`
    #[must_use]
    pub fn json() -> Self {
        Self::new("application", "json")
    }

    /// `application/vnd.siren+json`
    #[must_use]
    pub fn siren() -> Self {
        Self::new("application", "vnd.siren+json")
    }

    /// `application/x-www-form-urlencoded`, the type Siren assumes for
    /// actions that declare none.
    #[must_use]
    pub fn form_urlencoded() -> Self {
        Self::new("application", "x-www-form-urlencoded")
    }

    /// Canonical string rendering, e.g. `text/html;charset=utf-8`.
    #[must_use]
    pub fn format(&self) -> String {
        let mut out = format!("{}/{}", self.main_type, self.sub_type);
        for (name, value) in &self.parameters {
            out.push(';');
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }
        out
    }

    /// Whether the type/subtype pair matches, ignoring parameters.
    #[must_use]
    pub fn matches(&self, other: &MimeType) -> bool {
        self.main_type.eq_ignore_ascii_case(&other.main_type)
            && self.sub_type.eq_ignore_ascii_case(&other.sub_type)
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
