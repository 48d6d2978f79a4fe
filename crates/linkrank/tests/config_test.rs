use linkrank::{AnalysisConfig, Error, RankOptions};

#[test]
fn defaults_match_the_reference_run() {
    let config = AnalysisConfig::default();
    assert_eq!(
        config.rank,
        RankOptions {
            iterations: 10,
            alpha: 0.5
        }
    );
    assert_eq!(config.link_marker, "href");
    assert_eq!(config.top, 100);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = AnalysisConfig::from_json_str(r#"{ "rank": { "alpha": 0.85 }, "top": 5 }"#)
        .expect("valid config");
    assert_eq!(config.rank.alpha, 0.85);
    assert_eq!(config.rank.iterations, 10);
    assert_eq!(config.top, 5);
    assert_eq!(config.link_marker, "href");

    let config = AnalysisConfig::from_json_str(r#"{ "linkMarker": "src" }"#).expect("valid");
    assert_eq!(config.link_marker, "src");
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        AnalysisConfig::from_json_str("{ not json"),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        AnalysisConfig::from_json_str(r#"{ "rank": { "alpha": 2.0 } }"#),
        Err(Error::InvalidAlpha(a)) if a == 2.0
    ));
}

#[test]
fn empty_link_marker_is_rejected() {
    assert!(matches!(
        AnalysisConfig::from_json_str(r#"{ "linkMarker": "" }"#),
        Err(Error::EmptyLinkMarker)
    ));

    let config = AnalysisConfig {
        link_marker: String::new(),
        ..AnalysisConfig::default()
    };
    assert!(matches!(config.validate(), Err(Error::EmptyLinkMarker)));
    assert!(AnalysisConfig::default().validate().is_ok());
}

#[test]
fn load_reads_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("linkrank.json");
    std::fs::write(&path, r#"{ "rank": { "iterations": 3 } }"#).expect("write config");

    let config = AnalysisConfig::load(&path).expect("load config");
    assert_eq!(config.rank.iterations, 3);

    assert!(matches!(
        AnalysisConfig::load(dir.path().join("missing.json")),
        Err(Error::Io { .. })
    ));
}
