//! Key resolution for packaging pipelines.
//!
//! A caller either supplies an explicit key, which must already be canonical,
//! or a free-form name the key is derived from. An explicit key always wins
//! and is never corrected.

use serde::{Deserialize, Serialize};

use super::{KeyError, KeyResult, PluginKey};

/// Where a resolved key comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    /// An explicit key, checked strictly.
    Explicit,
    /// Derived from a fallback name.
    Derived,
    /// Nothing to resolve from.
    None,
}

/// Inputs a plugin key can be resolved from.
///
/// Used as the `[plugin]` section of the configuration file:
///
/// ```toml
/// [plugin]
/// name = "Foo.Analyzers"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySource {
    /// Explicit key, expected to be canonical already.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Free-form name (project or assembly name) to derive a key from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl KeySource {
    /// A source holding an explicit key.
    pub fn explicit(key: impl Into<String>) -> Self {
        Self { key: Some(key.into()), name: None }
    }

    /// A source holding only a name to derive from.
    pub fn derived(name: impl Into<String>) -> Self {
        Self { key: None, name: Some(name.into()) }
    }

    /// Set the fallback name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn origin(&self) -> KeyOrigin {
        match (&self.key, &self.name) {
            (Some(_), _) => KeyOrigin::Explicit,
            (None, Some(_)) => KeyOrigin::Derived,
            (None, None) => KeyOrigin::None,
        }
    }

    /// Resolve the plugin key.
    ///
    /// An explicit key goes through strict validation and an invalid one is
    /// an error even when a name is also present.
    pub fn resolve(&self) -> KeyResult<PluginKey> {
        let origin = self.origin();
        let resolved = match (&self.key, &self.name) {
            (Some(key), _) => PluginKey::parse(key),
            (None, Some(name)) => PluginKey::derive(name),
            (None, None) => Err(KeyError::Missing),
        }?;

        tracing::debug!(key = %resolved, ?origin, "Resolved plugin key");
        Ok(resolved)
    }
}
