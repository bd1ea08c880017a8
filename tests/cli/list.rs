use crate::cli::support::{notecap_in, setup_data_dir, stdout_json};
use predicates::prelude::*;

// ============================================================================
// List command tests
// ============================================================================

fn listed_ids(dir: &std::path::Path, args: &[&str]) -> Vec<String> {
    let output = notecap_in(dir)
        .args(["--format", "json", "list"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    stdout_json(&output)["notes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_list_newest_updated_first() {
    let dir = setup_data_dir();
    assert_eq!(
        listed_ids(dir.path(), &[]),
        vec!["rust-1", "go-1", "go-2", "bread-1"]
    );
}

#[test]
fn test_list_human_shows_folder_name_and_page() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust Ownership [Development]"))
        .stdout(predicate::str::contains("2023-11-14"))
        .stdout(predicate::str::contains("Page 1 of 1 (4 notes)"));
}

#[test]
fn test_list_filters() {
    let dir = setup_data_dir();
    assert_eq!(
        listed_ids(dir.path(), &["--folder", "dev"]),
        vec!["rust-1", "go-1"]
    );
    assert_eq!(
        listed_ids(dir.path(), &["--tag", "memory"]),
        vec!["rust-1", "go-2"]
    );
    assert_eq!(
        listed_ids(dir.path(), &["--tag", "cooking", "--tag", "rust"]),
        vec!["rust-1", "bread-1"]
    );
    assert_eq!(listed_ids(dir.path(), &["--search", "FLOUR"]), vec!["bread-1"]);
}

#[test]
fn test_list_pagination() {
    let dir = setup_data_dir();

    let output = notecap_in(dir.path())
        .args(["--format", "json", "list", "--page", "2", "--limit", "3"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["total"], 4);
    assert_eq!(json["page"], 2);
    assert_eq!(json["notes"].as_array().unwrap().len(), 1);
    assert_eq!(json["notes"][0]["id"], "bread-1");
}

#[test]
fn test_list_zero_limit_is_usage_error() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .args(["list", "--limit", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_list_empty() {
    let dir = tempfile::tempdir().unwrap();

    notecap_in(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}
