//! End-to-end tests running the `rk` binary against archives on disk.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn rk_binary() -> String {
    env!("CARGO_BIN_EXE_rk").to_string()
}

const ARCHIVE: &str = r#"[
    {"text": "Just completed a 5.00 mi run with Runkeeper! Check it out! http://example.com/1 #runkeeper", "created_at": "2021-01-16T12:00:00Z"},
    {"text": "Just completed a 10.00 km bike ride - Beautiful morning by the lake! http://example.com/2", "created_at": "2021-01-17T12:00:00Z"},
    {"text": "Watch my run right now on Runkeeper! http://example.com/3 #RKLive", "created_at": "2021-01-18T12:00:00Z"},
    {"text": "Achieved a new personal record in running! #fitnessalerts http://example.com/4", "created_at": "2021-01-19T12:00:00Z"},
    {"text": "Loving this new app feature!", "created_at": "2021-01-20T12:00:00Z"}
]"#;

fn write_archive(temp: &Path, contents: &str) -> PathBuf {
    let path = temp.join("tweets.json");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Run `rk` with an isolated home directory and UTC reports.
fn rk(temp: &Path, args: &[&str]) -> Output {
    Command::new(rk_binary())
        .env("HOME", temp)
        .env("XDG_CONFIG_HOME", temp.join(".config"))
        .env("RK_TIMEZONE", "utc")
        .args(args)
        .output()
        .expect("failed to run rk")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "rk should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_about_reports_categories() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(temp.path(), ARCHIVE);

    let output = rk(temp.path(), &["--archive", archive.to_str().unwrap(), "about", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(json["total"], 5);
    assert_eq!(json["first_date"], "2021-01-16");
    assert_eq!(json["last_date"], "2021-01-20");
    let counts: Vec<_> = json["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, [2, 1, 1, 1]);
    assert_eq!(json["written"]["completed_written"], 1);
}

#[test]
fn test_activities_report() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(temp.path(), ARCHIVE);

    let output = rk(temp.path(), &["-a", archive.to_str().unwrap(), "activities", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(json["activity_count"], 2);
    assert_eq!(json["top"], serde_json::json!(["running", "cycling"]));
    assert_eq!(json["longest"], "cycling");
    assert_eq!(json["longer"], "weekends");
}

#[test]
fn test_search_matches_written_text_only() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(temp.path(), ARCHIVE);
    let archive = archive.to_str().unwrap();

    let output = stdout(&rk(temp.path(), &["-a", archive, "search", "LAKE"]));
    assert!(output.starts_with("1 matching \"lake\"\n"));
    assert!(output.contains("cycling"));

    // Every post mentions Runkeeper or a URL in its raw text, none in written text.
    let output = stdout(&rk(temp.path(), &["-a", archive, "search", "example.com"]));
    assert_eq!(output, "0 matching \"example.com\"\n");
}

#[test]
fn test_classify_outputs_every_post() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(temp.path(), ARCHIVE);

    let output = stdout(&rk(temp.path(), &["-a", archive.to_str().unwrap(), "classify"]));
    let categories: Vec<String> = output
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["classification"]["category"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(
        categories,
        ["completed_event", "completed_event", "live_event", "achievement", "miscellaneous"]
    );
}

#[test]
fn test_json_lines_archive() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("tweets.jsonl");
    std::fs::write(
        &archive,
        "{\"text\": \"Just completed a 2.00 mi walk - sunny\", \"created_at\": \"2021-01-18T12:00:00Z\"}\n\
         garbage line\n\
         {\"text\": \"Loving this new app feature!\", \"created_at\": \"2021-01-19T12:00:00Z\"}\n",
    )
    .unwrap();

    let output = rk(temp.path(), &["-a", archive.to_str().unwrap(), "about", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["total"], 2);
}

#[test]
fn test_archive_from_config_file() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(temp.path(), ARCHIVE);
    let config = temp.path().join("rk.toml");
    std::fs::write(
        &config,
        format!("archive_path = {:?}\n", archive.to_str().unwrap()),
    )
    .unwrap();

    let output = rk(temp.path(), &["--config", config.to_str().unwrap(), "about", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["total"], 5);
}

#[test]
fn test_missing_archive_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.json");

    let output = rk(temp.path(), &["-a", missing.to_str().unwrap(), "about"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No tweets returned"), "stderr: {stderr}");
}

#[test]
fn test_null_archive_is_an_error() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(temp.path(), "null");

    let output = rk(temp.path(), &["-a", archive.to_str().unwrap(), "about"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No tweets returned"));
}
