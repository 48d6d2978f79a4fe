use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

fn write_site(dir: &Path) {
    let pages = [
        ("about.html", "<a href=\"index.html\">Home</a>\n"),
        (
            "blog.html",
            "<a href=\"index.html\">Home</a>\n<a href=\"post.html\">Post</a>\n",
        ),
        (
            "index.html",
            "<a href=\"about.html\">About</a>\n<a href=\"blog.html\">Blog</a>\n",
        ),
        ("orphan.html", "<a href=\"index.html\">Home</a>\n"),
        ("post.html", "<a href=\"blog.html\">Back</a>\n"),
    ];
    for (name, body) in pages {
        fs::write(dir.join(name), body).expect("write page");
    }
}

fn cli() -> Command {
    Command::new(assert_cmd::cargo_bin!("linkrank-cli"))
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf-8 stdout")
}

#[test]
fn stats_prints_page_and_link_counts() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_site(tmp.path());

    let out = stdout_of(cli().arg(tmp.path()));
    assert_eq!(out, "Pages: \t5\nLinks: \t7\n");
}

#[test]
fn components_lists_each_component() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_site(tmp.path());

    let out = stdout_of(cli().arg("components").arg(tmp.path()));
    assert_eq!(
        out,
        "Components: \t2\n\
         Component 0: orphan.html, \n\
         Component 1: about.html, blog.html, index.html, post.html, \n"
    );
}

#[test]
fn cycle_reports_the_search_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_site(tmp.path());

    let out = stdout_of(cli().arg("cycle").arg(tmp.path()));
    assert_eq!(out, "true\nabout.html, index.html\n");
}

#[test]
fn rank_prints_sorted_table_and_top_page() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_site(tmp.path());

    let out = stdout_of(cli().args(["rank", "--top", "1"]).arg(tmp.path()));
    assert!(out.starts_with("Unsorted:\nabout.html: "));
    assert!(out.contains("\n\nSorted:\norphan.html: 0.5\n"));
    let top = out.split("Top pages:\n").nth(1).expect("top section");
    assert!(top.starts_with("index.html: "));
    assert_eq!(top.lines().count(), 1);
}

#[test]
fn report_prints_json() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_site(tmp.path());

    let out = stdout_of(cli().args(["report", "--top", "2"]).arg(tmp.path()));
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(value["pages"], 5);
    assert_eq!(value["links"], 7);
    assert_eq!(value["componentCount"], 2);
    assert_eq!(value["top"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["top"][0]["page"], "index.html");
}

#[test]
fn config_file_is_applied_and_flags_win() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let site = tmp.path().join("site");
    fs::create_dir(&site).expect("mkdir");
    write_site(&site);
    let config = tmp.path().join("linkrank.json");
    fs::write(&config, r#"{ "rank": { "alpha": 0.0 }, "top": 1 }"#).expect("write config");

    let out = stdout_of(
        cli()
            .args(["rank", "--json", "--top", "3", "--config"])
            .arg(&config)
            .arg(&site),
    );
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    let ranks = value["ranks"].as_array().expect("ranks");
    assert!(ranks.iter().all(|r| r["score"] == 1.0));
    assert_eq!(value["top"].as_array().map(Vec::len), Some(3));
}

#[test]
fn usage_errors_exit_with_code_2() {
    cli().assert().failure().code(2);
    cli().args(["rank", "--alpha", "often", "site"]).assert().code(2);
}

#[test]
fn invalid_settings_exit_with_code_1() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let site = tmp.path().join("site");
    fs::create_dir(&site).expect("mkdir");
    write_site(&site);

    let out = cli()
        .args(["rank", "--alpha", "7"])
        .arg(&site)
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("Damping factor"));

    let config = tmp.path().join("linkrank.json");
    fs::write(&config, r#"{ "linkMarker": "" }"#).expect("write config");
    let out = cli()
        .arg("--config")
        .arg(&config)
        .arg(&site)
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("Link marker"));
}

#[test]
fn missing_directory_exits_with_code_1() {
    let tmp = tempfile::tempdir().expect("tempdir");
    cli()
        .arg(tmp.path().join("missing"))
        .assert()
        .failure()
        .code(1);
}
