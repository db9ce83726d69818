//! The validated plugin key type.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{make_valid, validate, KeyError, KeyResult};

/// A canonical plugin key: non-empty, lowercase ASCII letters and digits only.
///
/// A `PluginKey` can only be obtained through [`PluginKey::parse`] (strict)
/// or [`PluginKey::derive`] (corrective), so holding one means the value has
/// already been checked. Deserialization is strict as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluginKey(String);

impl PluginKey {
    /// Accept `key` only if it is already canonical.
    pub fn parse(key: &str) -> KeyResult<Self> {
        validate(key)?;
        Ok(Self(key.to_string()))
    }

    /// Derive a key from a free-form name such as a project or assembly name.
    pub fn derive(name: &str) -> KeyResult<Self> {
        make_valid(name).map(Self)
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PluginKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PluginKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for PluginKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for PluginKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PluginKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PluginKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for PluginKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PluginKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(value.as_str())?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for PluginKey {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PluginKey> for String {
    fn from(key: PluginKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_parse_is_strict() {
        assert_eq!(PluginKey::parse("fooanalyzers").unwrap(), "fooanalyzers");
        assert!(PluginKey::parse("Foo.Analyzers").is_err());
        assert_eq!(PluginKey::parse(""), Err(KeyError::Empty));
    }

    #[test]
    fn test_derive_corrects() {
        let key = PluginKey::derive("Bar.Analyzers").unwrap();
        assert_eq!(key.as_str(), "baranalyzers");
        assert!(PluginKey::derive("....").is_err());
    }

    #[test]
    fn test_from_str_and_try_from() {
        let key: PluginKey = "abc123".parse().unwrap();
        assert_eq!(key, "abc123");

        assert!("ABC".parse::<PluginKey>().is_err());
        assert!(PluginKey::try_from("a b".to_string()).is_err());
        assert_eq!(PluginKey::try_from("xyz").unwrap().into_inner(), "xyz");
    }

    #[test]
    fn test_display_and_deref() {
        let key = PluginKey::derive(" My Plugin ").unwrap();
        assert_eq!(key.to_string(), "myplugin");
        assert_eq!(key.len(), 8);
        assert!(key.starts_with("my"));
    }

    #[test]
    fn test_borrow_lookup() {
        let mut keys = HashSet::new();
        keys.insert(PluginKey::parse("alpha").unwrap());
        assert!(keys.contains("alpha"));
        assert!(!keys.contains("beta"));
    }

    #[test]
    fn test_serde_roundtrip_is_transparent() {
        let key = PluginKey::parse("sonarplugin").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"sonarplugin\"");

        let back: PluginKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_deserialize_rejects_non_canonical() {
        let err = serde_json::from_str::<PluginKey>("\"Foo.Analyzers\"").unwrap_err();
        assert!(err.to_string().contains("Invalid plugin key"));

        assert!(serde_json::from_str::<PluginKey>("\"\"").is_err());
    }
}
