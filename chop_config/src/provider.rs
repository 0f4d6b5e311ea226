//! Collaborator contract for rendered section content.

use std::collections::BTreeMap;
use std::sync::Arc;

use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::{ConfigResult, Scope, Section, merge_fragments};

/// Mapping from filename to fragment content.
pub type Fragments = BTreeMap<String, String>;

/// Source of rendered configuration sections.
///
/// Implementations render content from a cluster specification. Every method
/// is total: `None` means the section has nothing to contribute for the given
/// context and is never treated as a failure. Builds may run concurrently, so
/// implementations shared across threads should be `Sync`.
pub trait SectionContentProvider {
    /// Identity of a single host in the cluster.
    type Host: ?Sized;

    /// Cluster topology.
    fn remote_servers(&self) -> Option<String>;

    /// General settings; cluster-wide when `host` is `None`.
    fn settings(&self, host: Option<&Self::Host>) -> Option<String>;

    /// User definitions.
    fn users(&self) -> Option<String>;

    /// Quota definitions.
    fn quotas(&self) -> Option<String>;

    /// Settings profiles.
    fn profiles(&self) -> Option<String>;

    /// Macros for `host`.
    fn host_macros(&self, host: &Self::Host) -> Option<String>;

    /// Listening ports for `host`.
    fn host_ports(&self, host: &Self::Host) -> Option<String>;

    /// Coordination service settings for `host`.
    fn host_coordination_service(&self, host: &Self::Host) -> Option<String>;

    /// Extra files deployed with `scope`.
    ///
    /// When `include_unspecified` is set, files that were not assigned to any
    /// scope are returned as well. `host` is only supplied for
    /// [`Scope::Host`].
    fn files(&self, scope: Scope, include_unspecified: bool, host: Option<&Self::Host>) -> Fragments;
}

/// Drops content that is present but empty.
///
/// Generators that predate optional content signal "nothing to render" with
/// an empty string; both forms are treated as absent.
#[must_use]
pub fn non_empty(content: Option<String>) -> Option<String> {
    content.filter(|text| !text.is_empty())
}

macro_rules! forward_provider {
    () => {
        type Host = P::Host;

        fn remote_servers(&self) -> Option<String> {
            (**self).remote_servers()
        }

        fn settings(&self, host: Option<&Self::Host>) -> Option<String> {
            (**self).settings(host)
        }

        fn users(&self) -> Option<String> {
            (**self).users()
        }

        fn quotas(&self) -> Option<String> {
            (**self).quotas()
        }

        fn profiles(&self) -> Option<String> {
            (**self).profiles()
        }

        fn host_macros(&self, host: &Self::Host) -> Option<String> {
            (**self).host_macros(host)
        }

        fn host_ports(&self, host: &Self::Host) -> Option<String> {
            (**self).host_ports(host)
        }

        fn host_coordination_service(&self, host: &Self::Host) -> Option<String> {
            (**self).host_coordination_service(host)
        }

        fn files(
            &self,
            scope: Scope,
            include_unspecified: bool,
            host: Option<&Self::Host>,
        ) -> Fragments {
            (**self).files(scope, include_unspecified, host)
        }
    };
}

impl<P: SectionContentProvider + ?Sized> SectionContentProvider for &P {
    forward_provider!();
}

impl<P: SectionContentProvider + ?Sized> SectionContentProvider for Arc<P> {
    forward_provider!();
}

/// Provider backed by pre-rendered content.
///
/// Cluster-wide sections are keyed by [`Section`]; host sections are keyed by
/// host name and then by section. Hosts are identified by name, so the
/// associated host type is `str`.
///
/// ```rust
/// use chop_config::{Scope, Section, SectionContentProvider, StaticProvider};
///
/// let provider = StaticProvider::default()
///     .with_host_section("chi-demo-0-0", Section::Macros, "<yandex><macros/></yandex>")
///     .with_unspecified_file("extra.xml", "<yandex/>");
///
/// assert!(provider.host_macros("chi-demo-0-0").is_some());
/// assert!(provider.host_macros("chi-demo-0-1").is_none());
/// assert!(provider.files(Scope::Users, false, None).is_empty());
/// assert_eq!(provider.files(Scope::Common, true, None).len(), 1);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticProvider {
    sections: BTreeMap<Section, String>,
    hosts: BTreeMap<String, BTreeMap<Section, String>>,
    files: BTreeMap<Scope, Fragments>,
    unspecified_files: Fragments,
    host_files: BTreeMap<String, Fragments>,
}

impl StaticProvider {
    /// Set the cluster-wide content of `section`.
    #[must_use]
    pub fn with_section(mut self, section: Section, content: impl Into<String>) -> Self {
        self.sections.insert(section, content.into());
        self
    }

    /// Set the content of `section` for the host named `host`.
    #[must_use]
    pub fn with_host_section(
        mut self,
        host: impl Into<String>,
        section: Section,
        content: impl Into<String>,
    ) -> Self {
        self.hosts
            .entry(host.into())
            .or_default()
            .insert(section, content.into());
        self
    }

    /// Add an extra file deployed with `scope`.
    #[must_use]
    pub fn with_file(
        mut self,
        scope: Scope,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.files
            .entry(scope)
            .or_default()
            .insert(filename.into(), content.into());
        self
    }

    /// Add an extra file that is not assigned to any scope.
    #[must_use]
    pub fn with_unspecified_file(
        mut self,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.unspecified_files
            .insert(filename.into(), content.into());
        self
    }

    /// Add an extra file deployed only to the host named `host`.
    #[must_use]
    pub fn with_host_file(
        mut self,
        host: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.host_files
            .entry(host.into())
            .or_default()
            .insert(filename.into(), content.into());
        self
    }

    /// Extract a provider from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Extract`] when the figment does not
    /// describe a valid provider.
    pub fn from_figment(figment: &Figment) -> ConfigResult<Self> {
        Ok(figment.extract()?)
    }

    fn section(&self, section: Section) -> Option<String> {
        self.sections.get(&section).cloned()
    }

    fn host_section(&self, host: &str, section: Section) -> Option<String> {
        self.hosts
            .get(host)
            .and_then(|sections| sections.get(&section))
            .cloned()
    }
}

impl SectionContentProvider for StaticProvider {
    type Host = str;

    fn remote_servers(&self) -> Option<String> {
        self.section(Section::RemoteServers)
    }

    fn settings(&self, host: Option<&str>) -> Option<String> {
        host.map_or_else(
            || self.section(Section::Settings),
            |name| self.host_section(name, Section::Settings),
        )
    }

    fn users(&self) -> Option<String> {
        self.section(Section::Users)
    }

    fn quotas(&self) -> Option<String> {
        self.section(Section::Quotas)
    }

    fn profiles(&self) -> Option<String> {
        self.section(Section::Profiles)
    }

    fn host_macros(&self, host: &str) -> Option<String> {
        self.host_section(host, Section::Macros)
    }

    fn host_ports(&self, host: &str) -> Option<String> {
        self.host_section(host, Section::Ports)
    }

    fn host_coordination_service(&self, host: &str) -> Option<String> {
        self.host_section(host, Section::CoordinationService)
    }

    fn files(&self, scope: Scope, include_unspecified: bool, host: Option<&str>) -> Fragments {
        let mut files = Fragments::new();
        if include_unspecified {
            merge_fragments(&mut files, self.unspecified_files.clone());
        }
        if let Some(scoped) = self.files.get(&scope) {
            merge_fragments(&mut files, scoped.clone());
        }
        if let Some(per_host) = host.and_then(|name| self.host_files.get(name)) {
            merge_fragments(&mut files, per_host.clone());
        }
        files
    }
}
