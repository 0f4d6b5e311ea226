//! Aggregation scopes and the sections that participate in each.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Section;

/// One of the three contexts a bundle is assembled for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Cluster-wide configuration shared by every host.
    Common,
    /// Access control: users, quotas and profiles.
    Users,
    /// Configuration specific to a single host.
    Host,
}

impl Scope {
    /// Every scope, in assembly order.
    pub const ALL: [Self; 3] = [Self::Common, Self::Users, Self::Host];

    /// Lowercase name of the scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Users => "users",
            Self::Host => "host",
        }
    }

    /// Whether files without an explicit scope are deployed alongside this
    /// scope's own files.
    ///
    /// The users scope only ever receives files that were explicitly assigned
    /// to it.
    #[must_use]
    pub const fn includes_unspecified_files(self) -> bool {
        match self {
            Self::Common | Self::Host => true,
            Self::Users => false,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A section restricted to the fixed list of one scope.
pub trait ScopedSection: Copy + Into<Section> + 'static {
    /// Scope whose bundle renders these sections.
    const SCOPE: Scope;

    /// Participating sections, in assembly order.
    const ALL: &'static [Self];
}

/// Sections assembled into the common bundle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CommonSection {
    /// Cluster topology.
    RemoteServers,
    /// Cluster-wide settings.
    Settings,
}

impl ScopedSection for CommonSection {
    const SCOPE: Scope = Scope::Common;
    const ALL: &'static [Self] = &[Self::RemoteServers, Self::Settings];
}

impl From<CommonSection> for Section {
    fn from(section: CommonSection) -> Self {
        match section {
            CommonSection::RemoteServers => Self::RemoteServers,
            CommonSection::Settings => Self::Settings,
        }
    }
}

/// Sections assembled into the users bundle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UsersSection {
    /// User definitions.
    Users,
    /// Quota definitions.
    Quotas,
    /// Settings profiles.
    Profiles,
}

impl ScopedSection for UsersSection {
    const SCOPE: Scope = Scope::Users;
    const ALL: &'static [Self] = &[Self::Users, Self::Quotas, Self::Profiles];
}

impl From<UsersSection> for Section {
    fn from(section: UsersSection) -> Self {
        match section {
            UsersSection::Users => Self::Users,
            UsersSection::Quotas => Self::Quotas,
            UsersSection::Profiles => Self::Profiles,
        }
    }
}

/// Sections assembled into each host bundle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HostSection {
    /// Shard and replica macros.
    Macros,
    /// Listening ports.
    Ports,
    /// Coordination service endpoints.
    CoordinationService,
    /// Host-scoped settings.
    Settings,
}

impl ScopedSection for HostSection {
    const SCOPE: Scope = Scope::Host;
    const ALL: &'static [Self] = &[
        Self::Macros,
        Self::Ports,
        Self::CoordinationService,
        Self::Settings,
    ];
}

impl From<HostSection> for Section {
    fn from(section: HostSection) -> Self {
        match section {
            HostSection::Macros => Self::Macros,
            HostSection::Ports => Self::Ports,
            HostSection::CoordinationService => Self::CoordinationService,
            HostSection::Settings => Self::Settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections_of<S: ScopedSection>() -> Vec<Section> {
        S::ALL.iter().copied().map(Into::into).collect()
    }

    #[test]
    fn scopes_render_their_fixed_section_lists() {
        assert_eq!(
            sections_of::<CommonSection>(),
            vec![Section::RemoteServers, Section::Settings]
        );
        assert_eq!(
            sections_of::<UsersSection>(),
            vec![Section::Users, Section::Quotas, Section::Profiles]
        );
        assert_eq!(
            sections_of::<HostSection>(),
            vec![
                Section::Macros,
                Section::Ports,
                Section::CoordinationService,
                Section::Settings,
            ]
        );
    }

    #[test]
    fn only_users_scope_skips_unspecified_files() {
        assert!(Scope::Common.includes_unspecified_files());
        assert!(!Scope::Users.includes_unspecified_files());
        assert!(Scope::Host.includes_unspecified_files());
    }

    #[test]
    fn scoped_sections_report_their_scope() {
        assert_eq!(CommonSection::SCOPE, Scope::Common);
        assert_eq!(UsersSection::SCOPE, Scope::Users);
        assert_eq!(HostSection::SCOPE, Scope::Host);
    }
}
