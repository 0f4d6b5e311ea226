//! Aggregation and naming layer for operator-managed `ClickHouse` configuration.
//!
//! A [`ConfigAggregator`] combines rendered configuration sections supplied by
//! a [`SectionContentProvider`] with operator-authored overrides held in an
//! [`OverrideStore`], producing one [`Bundle`] per scope:
//!
//! - the common bundle (`config.d`): remote servers and cluster-wide settings;
//! - the users bundle (`users.d`): users, quotas and profiles;
//! - the host bundle (`conf.d`): macros, ports, coordination service and
//!   host-scoped settings for a single replica.
//!
//! Every bundle is assembled in three ordered layers. Named sections come
//! first under their generated filenames, then the scope's extra files, then
//! the scope's overrides. Later layers replace earlier ones on filename
//! collision, and sections without content produce no fragment at all.
//!
//! ```rust
//! use chop_config::{ConfigAggregator, OverrideStore, Scope, Section, StaticProvider};
//!
//! let provider = StaticProvider::default()
//!     .with_section(Section::RemoteServers, "<yandex><remote_servers/></yandex>");
//! let overrides = OverrideStore::default()
//!     .with_override(Scope::Common, "custom.xml", "<yandex/>");
//!
//! let aggregator = ConfigAggregator::new(provider, overrides);
//! let bundle = aggregator.build_common();
//!
//! assert_eq!(
//!     bundle.get("chop-generated-remote-servers.xml"),
//!     Some("<yandex><remote_servers/></yandex>")
//! );
//! assert_eq!(bundle.get("custom.xml"), Some("<yandex/>"));
//! assert!(!bundle.contains("chop-generated-settings.xml"));
//! ```

mod aggregator;
pub mod bundle;
mod error;
mod overrides;
mod provider;
mod scope;
mod section;

pub use aggregator::ConfigAggregator;
pub use bundle::{Bundle, BundleComposer, Fragment, FragmentLayer, FragmentSource, merge_fragments};
pub use error::{ConfigError, ConfigResult};
pub use overrides::OverrideStore;
pub use provider::{Fragments, SectionContentProvider, StaticProvider, non_empty};
pub use scope::{CommonSection, HostSection, Scope, ScopedSection, UsersSection};
pub use section::{FRAGMENT_EXTENSION, FRAGMENT_PREFIX, Section, fragment_filename};
