//! Operator-authored configuration overrides.

use std::path::Path;

use figment::Figment;
use figment::providers::{Format, Toml};
use serde::{Deserialize, Serialize};

use crate::{ConfigResult, Fragments, Scope};

/// User-supplied fragments for each scope, keyed by filename.
///
/// Override filenames are used verbatim. An override replaces any generated
/// fragment with the same filename and is included even when nothing else
/// would produce that filename. Host overrides apply to every host.
///
/// The store deserialises from a table with optional `common`, `users` and
/// `host` sub-tables:
///
/// ```toml
/// [common]
/// "chop-generated-settings.xml" = "<yandex><custom/></yandex>"
///
/// [users]
/// "readonly.xml" = "<yandex><profiles/></yandex>"
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverrideStore {
    common: Fragments,
    users: Fragments,
    host: Fragments,
}

impl OverrideStore {
    /// Create a store from the three scope mappings.
    #[must_use]
    pub const fn new(common: Fragments, users: Fragments, host: Fragments) -> Self {
        Self {
            common,
            users,
            host,
        }
    }

    /// Overrides applied to the bundle of `scope`.
    #[must_use]
    pub const fn for_scope(&self, scope: Scope) -> &Fragments {
        match scope {
            Scope::Common => &self.common,
            Scope::Users => &self.users,
            Scope::Host => &self.host,
        }
    }

    /// Insert an override, returning the content it replaced.
    pub fn insert(
        &mut self,
        scope: Scope,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<String> {
        let target = match scope {
            Scope::Common => &mut self.common,
            Scope::Users => &mut self.users,
            Scope::Host => &mut self.host,
        };
        target.insert(filename.into(), content.into())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_override(
        mut self,
        scope: Scope,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.insert(scope, filename, content);
        self
    }

    /// Whether no scope carries any override.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Scope::ALL
            .into_iter()
            .all(|scope| self.for_scope(scope).is_empty())
    }

    /// Extract the store from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Extract`] when the merged configuration
    /// does not describe an override store.
    pub fn from_figment(figment: &Figment) -> ConfigResult<Self> {
        Ok(figment.extract()?)
    }

    /// Load the store from a TOML file at `path`.
    ///
    /// A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Extract`] when the file cannot be parsed
    /// or contains unexpected keys.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let figment = Figment::from(Toml::file(path.as_ref()));
        let store = Self::from_figment(&figment)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            common = store.common.len(),
            users = store.users.len(),
            host = store.host.len(),
            "loaded configuration overrides"
        );
        Ok(store)
    }
}
