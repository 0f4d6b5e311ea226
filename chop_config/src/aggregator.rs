//! Assembly of the common, users and host bundles.

use crate::{
    Bundle, BundleComposer, CommonSection, HostSection, OverrideStore, Scope, ScopedSection,
    SectionContentProvider, UsersSection,
};

/// Builds configuration bundles from a content provider and overrides.
///
/// Every bundle is recomputed from scratch on each call. The aggregator holds
/// no mutable state, so it can be shared between threads whenever the
/// provider can.
///
/// Each build follows the same sequence:
///
/// 1. every section of the scope, in order, under its generated filename,
///    skipping sections without content;
/// 2. the provider's extra files for the scope;
/// 3. the scope's overrides.
///
/// Later steps replace earlier ones on filename collision, so overrides
/// always have the final word.
#[derive(Clone, Debug)]
pub struct ConfigAggregator<P> {
    provider: P,
    overrides: OverrideStore,
}

impl<P> ConfigAggregator<P> {
    /// Create an aggregator over `provider` and `overrides`.
    #[must_use]
    pub const fn new(provider: P, overrides: OverrideStore) -> Self {
        Self {
            provider,
            overrides,
        }
    }

    /// Borrow the content provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Borrow the override store.
    #[must_use]
    pub const fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }
}

impl<P: SectionContentProvider> ConfigAggregator<P> {
    /// Build the cluster-wide bundle: remote servers, settings, common files
    /// and common overrides.
    #[must_use]
    pub fn build_common(&self) -> Bundle {
        self.assemble::<CommonSection, _>(None, |section| match section {
            CommonSection::RemoteServers => self.provider.remote_servers(),
            CommonSection::Settings => self.provider.settings(None),
        })
    }

    /// Build the users bundle: users, quotas, profiles, users files and users
    /// overrides.
    #[must_use]
    pub fn build_users(&self) -> Bundle {
        self.assemble::<UsersSection, _>(None, |section| match section {
            UsersSection::Users => self.provider.users(),
            UsersSection::Quotas => self.provider.quotas(),
            UsersSection::Profiles => self.provider.profiles(),
        })
    }

    /// Build the bundle for `host`: macros, ports, coordination service,
    /// host settings, host files and host overrides.
    ///
    /// Only `host`'s own content is consulted; the host overrides are shared
    /// by every host.
    #[must_use]
    pub fn build_host(&self, host: &P::Host) -> Bundle {
        self.assemble::<HostSection, _>(Some(host), |section| match section {
            HostSection::Macros => self.provider.host_macros(host),
            HostSection::Ports => self.provider.host_ports(host),
            HostSection::CoordinationService => self.provider.host_coordination_service(host),
            HostSection::Settings => self.provider.settings(Some(host)),
        })
    }

    /// Build the bundle of any scope.
    ///
    /// `host` is ignored for the common and users scopes. Returns `None` when
    /// the host scope is requested without a host.
    #[must_use]
    pub fn build(&self, scope: Scope, host: Option<&P::Host>) -> Option<Bundle> {
        match scope {
            Scope::Common => Some(self.build_common()),
            Scope::Users => Some(self.build_users()),
            Scope::Host => host.map(|target| self.build_host(target)),
        }
    }

    /// Build host bundles for every host in `hosts`, preserving input order.
    #[must_use]
    pub fn build_hosts<'h, I>(&self, hosts: I) -> Vec<Bundle>
    where
        I: IntoIterator<Item = &'h P::Host>,
        P::Host: 'h,
    {
        hosts.into_iter().map(|host| self.build_host(host)).collect()
    }

    fn assemble<S, F>(&self, host: Option<&P::Host>, mut render: F) -> Bundle
    where
        S: ScopedSection,
        F: FnMut(S) -> Option<String>,
    {
        let mut composer = BundleComposer::new(S::SCOPE);
        for &section in S::ALL {
            composer.push_section(section.into(), render(section));
        }
        composer.push_files(self.provider.files(
            S::SCOPE,
            S::SCOPE.includes_unspecified_files(),
            host,
        ));
        composer.push_overrides(self.overrides.for_scope(S::SCOPE).clone());
        composer.finish()
    }
}
