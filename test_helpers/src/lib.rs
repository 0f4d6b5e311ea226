//! Test helpers shared across crates.
//!
//! This crate provides a call-recording wrapper around content providers, a
//! sample cluster fixture and helpers for running code inside a
//! [`figment::Jail`].

pub mod jail;
pub mod recording;

pub use recording::{FilesCall, RecordingProvider};

use chop_config::{Scope, Section, StaticProvider};

/// Host names used by [`sample_cluster`].
pub const SAMPLE_HOSTS: [&str; 2] = ["chi-demo-0-0", "chi-demo-0-1"];

/// A two-replica cluster with content for every section.
///
/// Only the first host has coordination service settings, and each scope
/// carries one extra file plus one unspecified file.
#[must_use]
pub fn sample_cluster() -> StaticProvider {
    let [first, second] = SAMPLE_HOSTS;
    StaticProvider::default()
        .with_section(Section::RemoteServers, "<yandex><remote_servers/></yandex>")
        .with_section(Section::Settings, "<yandex><max_connections>4096</max_connections></yandex>")
        .with_section(Section::Users, "<yandex><users/></yandex>")
        .with_section(Section::Quotas, "<yandex><quotas/></yandex>")
        .with_section(Section::Profiles, "<yandex><profiles/></yandex>")
        .with_host_section(
            first,
            Section::Macros,
            "<yandex><macros><replica>0</replica></macros></yandex>",
        )
        .with_host_section(first, Section::Ports, "<yandex><tcp_port>9000</tcp_port></yandex>")
        .with_host_section(first, Section::CoordinationService, "<yandex><zookeeper/></yandex>")
        .with_host_section(
            first,
            Section::Settings,
            "<yandex><listen_host>0.0.0.0</listen_host></yandex>",
        )
        .with_host_section(
            second,
            Section::Macros,
            "<yandex><macros><replica>1</replica></macros></yandex>",
        )
        .with_host_section(second, Section::Ports, "<yandex><tcp_port>9001</tcp_port></yandex>")
        .with_file(Scope::Common, "common-extra.xml", "<yandex><common/></yandex>")
        .with_file(Scope::Users, "users-extra.xml", "<yandex><readonly/></yandex>")
        .with_file(Scope::Host, "host-extra.xml", "<yandex><host/></yandex>")
        .with_unspecified_file("unspecified.xml", "<yandex><unspecified/></yandex>")
        .with_host_file(first, "replica-0.xml", "<yandex><replica-0/></yandex>")
}
