//! Assembly of the cluster-wide common bundle.

use chop_config::{
    ConfigAggregator, FragmentSource, OverrideStore, Scope, Section, StaticProvider,
};
use rstest::{fixture, rstest};
use test_helpers::{FilesCall, RecordingProvider, sample_cluster};

const REMOTE_SERVERS: &str = "chop-generated-remote-servers.xml";
const SETTINGS: &str = "chop-generated-settings.xml";

#[fixture]
fn cluster() -> StaticProvider {
    sample_cluster()
}

#[rstest]
fn common_bundle_holds_sections_and_files(cluster: StaticProvider) {
    let bundle = ConfigAggregator::new(cluster, OverrideStore::default()).build_common();

    let names: Vec<&str> = bundle.filenames().collect();
    assert_eq!(
        names,
        vec![REMOTE_SERVERS, SETTINGS, "common-extra.xml", "unspecified.xml"]
    );
    assert_eq!(bundle.scope(), Scope::Common);
    assert_eq!(
        bundle.get(SETTINGS),
        Some("<yandex><max_connections>4096</max_connections></yandex>")
    );
    assert!(!bundle.contains("users-extra.xml"));
    assert!(!bundle.contains("replica-0.xml"));
}

#[test]
fn empty_settings_contribute_no_fragment() {
    let provider = StaticProvider::default()
        .with_section(Section::RemoteServers, "<yandex>...</yandex>")
        .with_section(Section::Settings, "");

    let bundle = ConfigAggregator::new(provider, OverrideStore::default()).build_common();

    assert_eq!(bundle.len(), 1);
    assert_eq!(bundle.get(REMOTE_SERVERS), Some("<yandex>...</yandex>"));
    assert!(!bundle.contains(SETTINGS));
}

#[rstest]
fn common_override_replaces_generated_settings(cluster: StaticProvider) {
    let overrides = OverrideStore::default().with_override(Scope::Common, SETTINGS, "<custom/>");

    let bundle = ConfigAggregator::new(cluster, overrides).build_common();

    assert_eq!(bundle.get(SETTINGS), Some("<custom/>"));
    assert_eq!(bundle.source(SETTINGS), Some(FragmentSource::Override));
    assert_eq!(bundle.shadowed().collect::<Vec<_>>(), vec![SETTINGS]);
}

#[rstest]
fn non_colliding_override_is_included_verbatim(cluster: StaticProvider) {
    let overrides =
        OverrideStore::default().with_override(Scope::Common, "01-logger.xml", "<yandex><logger/></yandex>");

    let bundle = ConfigAggregator::new(cluster, overrides).build_common();

    assert_eq!(bundle.get("01-logger.xml"), Some("<yandex><logger/></yandex>"));
    assert_eq!(bundle.len(), 5);
    assert_eq!(bundle.shadowed().count(), 0);
}

#[rstest]
fn common_files_are_requested_with_unspecified_files(cluster: StaticProvider) {
    let aggregator = ConfigAggregator::new(RecordingProvider::new(cluster), OverrideStore::default());

    let _bundle = aggregator.build_common();

    assert_eq!(
        aggregator.provider().files_calls(),
        vec![FilesCall {
            scope: Scope::Common,
            include_unspecified: true,
            host: None,
        }]
    );
    assert_eq!(aggregator.provider().section_calls(), 2);
}

#[test]
fn common_files_shadow_generated_sections() {
    let provider = StaticProvider::default()
        .with_section(Section::RemoteServers, "<generated/>")
        .with_file(Scope::Common, REMOTE_SERVERS, "<from-files/>");

    let bundle = ConfigAggregator::new(provider, OverrideStore::default()).build_common();

    assert_eq!(bundle.get(REMOTE_SERVERS), Some("<from-files/>"));
    assert_eq!(bundle.source(REMOTE_SERVERS), Some(FragmentSource::Files));
}
