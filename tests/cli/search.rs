use crate::cli::support::{notecap_in, setup_data_dir, stdout_json, write_notes};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Search command tests
// ============================================================================

#[test]
fn test_search_empty_data_dir() {
    let dir = tempfile::tempdir().unwrap();

    notecap_in(dir.path())
        .args(["search", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for 'rust'"));
}

#[test]
fn test_search_finds_title() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .args(["search", "ownership"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust-1"))
        .stdout(predicate::str::contains("Rust Ownership"))
        .stdout(predicate::str::contains("go-1").not());
}

#[test]
fn test_search_shows_highlight() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .args(["search", "memory safety"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(content, tags)"))
        .stdout(predicate::str::contains("enforces memory safety"));
}

#[test]
fn test_search_quiet_hides_empty_message() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .args(["--quiet", "search", "zzzzqqq"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_search_json_output() {
    let dir = setup_data_dir();

    let output = notecap_in(dir.path())
        .args(["--format", "json", "search", "memory safety"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let results = json.as_array().unwrap();
    assert_eq!(results[0]["id"], "rust-1");
    assert_eq!(
        results[0]["matched_fields"],
        serde_json::json!(["content", "tags"])
    );
    assert_eq!(results[0]["url"], "https://doc.rust-lang.org/book/");
    assert_eq!(results[0]["folder_id"], "dev");
    assert!(results[0]["score"].as_f64().unwrap() > 0.0);
    assert!(results[0]["updated"].as_str().unwrap().starts_with("2023-11-14"));

    let scores: Vec<f64> = results
        .iter()
        .map(|r| r["score"].as_f64().unwrap())
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn test_search_limit() {
    let dir = setup_data_dir();

    let output = notecap_in(dir.path())
        .args(["--format", "json", "search", "go", "--limit", "1"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[test]
fn test_search_title_only() {
    let dir = setup_data_dir();

    // "patience" only appears in content
    notecap_in(dir.path())
        .args(["search", "patience"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bread-1"));

    notecap_in(dir.path())
        .args(["search", "patience", "--title-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_search_exact_disables_fuzzy() {
    let dir = tempfile::tempdir().unwrap();
    write_notes(
        dir.path(),
        &serde_json::json!([{ "id": "n1", "title": "", "content": "abcdef" }]),
    );

    notecap_in(dir.path())
        .args(["search", "ace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n1"));

    notecap_in(dir.path())
        .args(["search", "ace", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_search_semantic_reorders() {
    let dir = tempfile::tempdir().unwrap();
    write_notes(
        dir.path(),
        &serde_json::json!([
            { "id": "tagged", "title": "A", "content": "", "tags": ["kotlin"] },
            { "id": "body", "title": "Notes", "content": "kotlin" }
        ]),
    );

    let ids = |args: &[&str]| -> Vec<String> {
        let output = notecap_in(dir.path())
            .args(["--format", "json"])
            .args(args)
            .output()
            .unwrap();
        stdout_json(&output)
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(
        ids(&["search", "kotlin", "--content-weight", "1.4"]),
        vec!["tagged", "body"]
    );
    assert_eq!(
        ids(&["search", "kotlin", "--content-weight", "1.4", "--semantic"]),
        vec!["body", "tagged"]
    );
}

#[test]
fn test_search_records_output() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .args(["--format", "records", "search", "sourdough"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=search query=\"sourdough\" results=1"))
        .stdout(predicate::str::contains(
            "N bread-1 score=",
        ))
        .stdout(predicate::str::contains("\"Sourdough \\\"Basics\\\"\""))
        .stdout(predicate::str::contains("S bread-1 "));
}

#[test]
fn test_search_uses_config_defaults() {
    let dir = setup_data_dir();
    fs::write(
        dir.path().join("search.toml"),
        "[defaults]\nmax_results = 1\n",
    )
    .unwrap();

    let output = notecap_in(dir.path())
        .args(["--format", "json", "search", "go"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 1);

    // Command-line limit overrides the configured default
    let output = notecap_in(dir.path())
        .args(["--format", "json", "search", "go", "--limit", "5"])
        .output()
        .unwrap();
    assert!(stdout_json(&output).as_array().unwrap().len() > 1);
}

#[test]
fn test_search_explicit_config_path() {
    let dir = setup_data_dir();
    let config_dir = tempfile::tempdir().unwrap();
    let config_path = config_dir.path().join("custom.toml");
    fs::write(&config_path, "[tuning]\nfuzzy_min_ratio = 1.0\n").unwrap();
    write_notes(
        dir.path(),
        &serde_json::json!([{ "id": "n1", "title": "", "content": "abcdef" }]),
    );

    notecap_in(dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["search", "ace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_search_invalid_config_is_error() {
    let dir = setup_data_dir();
    fs::write(dir.path().join("search.toml"), "[tuning]\nfuzzy_min_ratio = 3.0\n").unwrap();

    notecap_in(dir.path())
        .args(["search", "go"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid tuning.fuzzy_min_ratio"));
}

#[test]
fn test_search_malformed_notes_json_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.json"), "{oops").unwrap();

    notecap_in(dir.path())
        .args(["--format", "json", "search", "go"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_notes_file\""));
}
