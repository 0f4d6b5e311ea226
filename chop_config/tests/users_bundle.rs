//! Assembly of the users bundle.

use chop_config::{ConfigAggregator, FragmentSource, OverrideStore, Scope, Section, StaticProvider};
use rstest::rstest;
use test_helpers::{FilesCall, RecordingProvider, sample_cluster};

#[test]
fn users_bundle_holds_access_control_sections() {
    let bundle = ConfigAggregator::new(sample_cluster(), OverrideStore::default()).build_users();

    let names: Vec<&str> = bundle.filenames().collect();
    assert_eq!(
        names,
        vec![
            "chop-generated-profiles.xml",
            "chop-generated-quotas.xml",
            "chop-generated-users.xml",
            "users-extra.xml",
        ]
    );
    assert_eq!(
        bundle.source("chop-generated-quotas.xml"),
        Some(FragmentSource::Generated(Section::Quotas))
    );
}

#[test]
fn users_bundle_never_includes_unspecified_files() {
    let aggregator = ConfigAggregator::new(
        RecordingProvider::new(sample_cluster()),
        OverrideStore::default(),
    );

    let bundle = aggregator.build_users();

    assert!(!bundle.contains("unspecified.xml"));
    assert_eq!(
        aggregator.provider().files_calls(),
        vec![FilesCall {
            scope: Scope::Users,
            include_unspecified: false,
            host: None,
        }]
    );
}

#[rstest]
#[case(Section::Users)]
#[case(Section::Quotas)]
#[case(Section::Profiles)]
fn missing_users_section_is_omitted(#[case] missing: Section) {
    let provider = [Section::Users, Section::Quotas, Section::Profiles]
        .into_iter()
        .filter(|section| *section != missing)
        .fold(StaticProvider::default(), |provider, section| {
            provider.with_section(section, format!("<{section}/>"))
        });

    let bundle = ConfigAggregator::new(provider, OverrideStore::default()).build_users();

    assert_eq!(bundle.len(), 2);
    assert!(!bundle.contains(&missing.fragment_filename()));
}

#[test]
fn users_override_wins_over_generated_users() {
    let overrides = OverrideStore::default()
        .with_override(Scope::Users, "chop-generated-users.xml", "<yandex><users><admin/></users></yandex>")
        .with_override(Scope::Common, "chop-generated-quotas.xml", "<ignored/>");

    let bundle = ConfigAggregator::new(sample_cluster(), overrides).build_users();

    assert_eq!(
        bundle.get("chop-generated-users.xml"),
        Some("<yandex><users><admin/></users></yandex>")
    );
    assert_eq!(
        bundle.get("chop-generated-quotas.xml"),
        Some("<yandex><quotas/></yandex>")
    );
}
