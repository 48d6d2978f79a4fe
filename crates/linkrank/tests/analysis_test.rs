use linkrank::{AnalysisConfig, DiGraph, analyze, analyze_dir};

fn site() -> DiGraph<String> {
    [
        ("index", "about"),
        ("index", "blog"),
        ("about", "index"),
        ("blog", "index"),
        ("blog", "post"),
        ("post", "blog"),
        ("orphan", "index"),
    ]
    .into_iter()
    .map(|(v, w)| (v.to_string(), w.to_string()))
    .collect()
}

#[test]
fn report_bundles_counts_components_cycle_and_ranks() {
    let config = AnalysisConfig {
        top: 2,
        ..Default::default()
    };
    let report = analyze(&site(), &config).expect("analyze");

    assert_eq!(report.pages, 5);
    assert_eq!(report.links, 7);
    assert_eq!(report.component_count, 2);
    assert_eq!(report.components.len(), 2);
    assert_eq!(report.components[0].pages, vec!["orphan".to_string()]);
    assert!(!report.components[0].cyclic);
    assert_eq!(
        report.components[1].pages,
        vec!["about", "blog", "index", "post"]
    );
    assert!(report.components[1].cyclic);

    assert_eq!(
        report.cycle,
        Some(vec!["about".to_string(), "index".to_string()])
    );

    assert_eq!(report.ranks.len(), 5);
    assert_eq!(report.ranks[0].page, "about");
    assert_eq!(report.top.len(), 2);
    assert_eq!(report.top[0].page, "index");
    assert_eq!(report.top[1].page, "blog");
}

#[test]
fn report_serializes_as_camel_case_json() {
    let report = analyze(&site(), &AnalysisConfig::default()).expect("analyze");
    let value = serde_json::to_value(&report).expect("serialize");

    assert_eq!(value["pages"], 5);
    assert_eq!(value["componentCount"], 2);
    assert_eq!(value["top"][0]["page"], "index");
    assert!(value["components"][1]["cyclic"].as_bool().unwrap());
}

#[test]
fn analyze_dir_reads_and_analyzes() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("a.html"), "<a href=\"b.html\">").expect("write a");
    std::fs::write(dir.path().join("b.html"), "<a href=\"a.html\">").expect("write b");

    let report = analyze_dir(dir.path(), &AnalysisConfig::default()).expect("analyze");
    assert_eq!(report.pages, 2);
    assert_eq!(report.component_count, 1);
    assert!(report.cycle.is_some());
}
