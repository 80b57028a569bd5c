//! Serializer options.
//!
//! Options are plain data and can be kept in a TOML file next to the rest
//! of a hosting application's configuration:
//!
//! ```toml
//! link_details = true
//! explicit_get_method = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Knobs for [`JsonSerializer`](crate::serializer::JsonSerializer).
///
/// The defaults produce the minimal document: links carry only `rel` and
/// `href`, and actions without a method omit `method`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerializerOptions {
    /// Emit `class`, `title` and `type` on entries of an entity's `links`.
    pub link_details: bool,

    /// Emit `"method": "GET"` for actions that declare no method.
    pub explicit_get_method: bool,
}

impl SerializerOptions {
    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains keys other
    /// than the known options.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        let options: Self = toml::from_str(&content).map_err(|e| {
            Error::InvalidData(format!(
                "failed to parse serializer options from {}: {}",
                path.display(),
                e
            ))
        })?;
        log::debug!("Loaded serializer options from {}: {:?}", path.display(), options);
        Ok(options)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::InvalidData(format!("failed to parse serializer options: {}", e)))
    }

    #[must_use]
    pub fn with_link_details(mut self, enabled: bool) -> Self {
        self.link_details = enabled;
        self
    }

    #[must_use]
    pub fn with_explicit_get_method(mut self, enabled: bool) -> Self {
        self.explicit_get_method = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = SerializerOptions::default();
        assert!(!options.link_details);
        assert!(!options.explicit_get_method);
    }

    #[test]
    fn test_from_toml_str() {
        let options = SerializerOptions::from_toml_str("link_details = true").unwrap();
        assert!(options.link_details);
        assert!(!options.explicit_get_method);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = SerializerOptions::from_toml_str("link_detail = true");
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("siren.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"link_details = true\nexplicit_get_method = true\n")
            .unwrap();

        let options = SerializerOptions::load(&path).unwrap();
        assert_eq!(
            options,
            SerializerOptions::default()
                .with_link_details(true)
                .with_explicit_get_method(true)
        );
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let options = SerializerOptions::load(&path).unwrap();
        assert_eq!(options, SerializerOptions::default());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = SerializerOptions::load(Path::new("/nonexistent/path/siren.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml [[[[").unwrap();

        assert!(SerializerOptions::load(&path).is_err());
    }
}
