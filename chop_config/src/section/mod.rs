//! Closed set of configuration sections and their generated filenames.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Token prepended to every generated fragment filename.
pub const FRAGMENT_PREFIX: &str = "chop-generated";

/// Extension appended to every generated fragment filename.
pub const FRAGMENT_EXTENSION: &str = "xml";

/// A named unit of `ClickHouse` configuration rendered by the content provider.
///
/// The serialised form of each variant is its [`token`](Self::token), so
/// sections can be used as keys in configuration files.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// Cluster topology (`remote_servers`).
    RemoteServers,
    /// General server settings, cluster-wide or host-scoped.
    Settings,
    /// User definitions.
    Users,
    /// Quota definitions.
    Quotas,
    /// Settings profiles.
    Profiles,
    /// Per-host macros (shard, replica, installation names).
    Macros,
    /// Per-host listening ports.
    Ports,
    /// Per-host coordination service (`ZooKeeper` or Keeper) settings.
    CoordinationService,
}

impl Section {
    /// Every section, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::RemoteServers,
        Self::Settings,
        Self::Users,
        Self::Quotas,
        Self::Profiles,
        Self::Macros,
        Self::Ports,
        Self::CoordinationService,
    ];

    /// Stable name of the section used in filenames and configuration keys.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::RemoteServers => "remote-servers",
            Self::Settings => "settings",
            Self::Users => "users",
            Self::Quotas => "quotas",
            Self::Profiles => "profiles",
            Self::Macros => "macros",
            Self::Ports => "ports",
            Self::CoordinationService => "coordination-service",
        }
    }

    /// Filename under which the section's rendered content is published.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chop_config::Section;
    ///
    /// assert_eq!(
    ///     Section::Settings.fragment_filename(),
    ///     "chop-generated-settings.xml"
    /// );
    /// ```
    #[must_use]
    pub fn fragment_filename(self) -> String {
        format!("{FRAGMENT_PREFIX}-{}.{FRAGMENT_EXTENSION}", self.token())
    }
}

/// Free-function form of [`Section::fragment_filename`].
#[must_use]
pub fn fragment_filename(section: Section) -> String {
    section.fragment_filename()
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Section {
    type Err = ConfigError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.token() == token)
            .ok_or_else(|| ConfigError::UnknownSection {
                token: token.to_owned(),
            })
    }
}
