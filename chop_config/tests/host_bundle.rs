//! Assembly of per-host bundles.

use chop_config::{ConfigAggregator, FragmentSource, OverrideStore, Scope, Section, StaticProvider};
use rstest::{fixture, rstest};
use test_helpers::{FilesCall, RecordingProvider, SAMPLE_HOSTS, sample_cluster};

const MACROS: &str = "chop-generated-macros.xml";
const PORTS: &str = "chop-generated-ports.xml";
const COORDINATION: &str = "chop-generated-coordination-service.xml";
const SETTINGS: &str = "chop-generated-settings.xml";

#[fixture]
fn aggregator() -> ConfigAggregator<StaticProvider> {
    let overrides = OverrideStore::default()
        .with_override(Scope::Host, "custom-host.xml", "<yandex><custom/></yandex>");
    ConfigAggregator::new(sample_cluster(), overrides)
}

#[rstest]
fn host_bundle_holds_host_sections(aggregator: ConfigAggregator<StaticProvider>) {
    let [first, _] = SAMPLE_HOSTS;
    let bundle = aggregator.build_host(first);

    let names: Vec<&str> = bundle.filenames().collect();
    assert_eq!(
        names,
        vec![
            COORDINATION,
            MACROS,
            PORTS,
            SETTINGS,
            "custom-host.xml",
            "host-extra.xml",
            "replica-0.xml",
            "unspecified.xml",
        ]
    );
    assert_eq!(
        bundle.get(SETTINGS),
        Some("<yandex><listen_host>0.0.0.0</listen_host></yandex>")
    );
    assert_eq!(bundle.scope(), Scope::Host);
}

#[rstest]
fn host_without_coordination_service_gets_no_fragment(
    aggregator: ConfigAggregator<StaticProvider>,
) {
    let [_, second] = SAMPLE_HOSTS;
    let bundle = aggregator.build_host(second);

    assert!(!bundle.contains(COORDINATION));
    assert!(!bundle.contains(SETTINGS));
    assert!(bundle.contains(MACROS));
    assert!(bundle.contains(PORTS));
}

#[rstest]
fn hosts_do_not_share_host_specific_content(aggregator: ConfigAggregator<StaticProvider>) {
    let [first, second] = SAMPLE_HOSTS;
    let one = aggregator.build_host(first);
    let two = aggregator.build_host(second);

    assert_ne!(one.get(MACROS), two.get(MACROS));
    assert_ne!(one.get(PORTS), two.get(PORTS));
    assert!(one.contains("replica-0.xml"));
    assert!(!two.contains("replica-0.xml"));
    assert_eq!(one.get("custom-host.xml"), two.get("custom-host.xml"));
}

#[test]
fn host_override_applies_to_every_host() {
    let overrides = OverrideStore::default().with_override(Scope::Host, MACROS, "<pinned/>");
    let aggregator = ConfigAggregator::new(sample_cluster(), overrides);

    for bundle in aggregator.build_hosts(SAMPLE_HOSTS) {
        assert_eq!(bundle.get(MACROS), Some("<pinned/>"));
        assert_eq!(bundle.source(MACROS), Some(FragmentSource::Override));
        assert_eq!(bundle.shadowed().collect::<Vec<_>>(), vec![MACROS]);
    }
}

#[test]
fn unknown_host_yields_only_shared_files_and_overrides() {
    let overrides = OverrideStore::default().with_override(Scope::Host, "custom-host.xml", "<c/>");
    let bundle = ConfigAggregator::new(sample_cluster(), overrides).build_host("chi-demo-9-9");

    let names: Vec<&str> = bundle.filenames().collect();
    assert_eq!(names, vec!["custom-host.xml", "host-extra.xml", "unspecified.xml"]);
}

#[test]
fn host_files_are_requested_for_the_built_host() {
    let aggregator = ConfigAggregator::new(
        RecordingProvider::new(sample_cluster()),
        OverrideStore::default(),
    );
    let [first, _] = SAMPLE_HOSTS;

    let _bundle = aggregator.build_host(first);

    assert_eq!(
        aggregator.provider().files_calls(),
        vec![FilesCall {
            scope: Scope::Host,
            include_unspecified: true,
            host: Some(first.to_owned()),
        }]
    );
    assert_eq!(aggregator.provider().section_calls(), 4);
}

#[test]
fn host_settings_are_separate_from_cluster_settings() {
    let provider = StaticProvider::default()
        .with_section(Section::Settings, "<cluster/>")
        .with_host_section("h", Section::Settings, "<host/>");
    let aggregator = ConfigAggregator::new(provider, OverrideStore::default());

    assert_eq!(aggregator.build_common().get(SETTINGS), Some("<cluster/>"));
    assert_eq!(aggregator.build_host("h").get(SETTINGS), Some("<host/>"));
}
