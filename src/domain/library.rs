//! Third-party library versions requested by components

use std::fmt;

use semver::Version;
use serde::Serialize;

/// A third-party library a component links against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryVersion {
    /// Crate name, e.g. "serde_json"
    pub name: String,
    /// Requested version
    pub version: Version,
    /// Short note shown in the chain listing, e.g. "JSON library"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl LibraryVersion {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            purpose: None,
        }
    }

    /// Decode a packed `major * 10000 + minor * 100 + patch` version number.
    ///
    /// # Examples
    /// ```
    /// use cpm_chain::domain::LibraryVersion;
    ///
    /// let lib = LibraryVersion::from_packed("itertools", 1300);
    /// assert_eq!(lib.to_string(), "itertools 0.13.0");
    /// ```
    pub fn from_packed(name: impl Into<String>, packed: u32) -> Self {
        let major = packed / 10_000;
        let minor = (packed % 10_000) / 100;
        let patch = packed % 100;
        Self::new(
            name,
            Version::new(u64::from(major), u64::from(minor), u64::from(patch)),
        )
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Listing label: `name version (purpose)`.
    pub fn label(&self) -> String {
        match &self.purpose {
            Some(purpose) => format!("{self} ({purpose})"),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{}.{}",
            self.name, self.version.major, self.version.minor, self.version.patch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_packed_version_when_decoding_then_splits_decimal_fields() {
        let lib = LibraryVersion::from_packed("fmt", 100_201);
        assert_eq!(lib.version, Version::new(10, 2, 1));
    }

    #[test]
    fn given_packed_zero_major_when_decoding_then_keeps_minor_and_patch() {
        let lib = LibraryVersion::from_packed("tracing", 141);
        assert_eq!(lib.version, Version::new(0, 1, 41));
    }

    #[test]
    fn given_prerelease_when_displaying_then_shows_numeric_fields_only() {
        let lib = LibraryVersion::new("demo", Version::parse("1.2.3-alpha.1").unwrap());
        assert_eq!(lib.to_string(), "demo 1.2.3");
    }

    #[test]
    fn given_purpose_when_labelling_then_appends_it_in_parentheses() {
        let lib = LibraryVersion::new("serde_json", Version::new(1, 0, 140)).with_purpose("JSON library");
        assert_eq!(lib.label(), "serde_json 1.0.140 (JSON library)");
    }
}
