use crate::cli::support::{notecap_in, setup_data_dir, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Related command tests
// ============================================================================

#[test]
fn test_related_by_shared_tag() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .args(["related", "rust-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("go-2"))
        .stdout(predicate::str::contains("rust-1").not())
        .stdout(predicate::str::contains("bread-1").not());
}

#[test]
fn test_related_json_scores() {
    let dir = setup_data_dir();

    let output = notecap_in(dir.path())
        .args(["--format", "json", "related", "go-1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let related = json.as_array().unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["id"], "go-2");
    // One shared tag plus identical title terms
    assert!(related[0]["score"].as_f64().unwrap() >= 3.0);
}

#[test]
fn test_related_nothing_found() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .args(["related", "bread-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No related notes found for bread-1"));
}

#[test]
fn test_related_unknown_note() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .args(["related", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: nope"));
}

#[test]
fn test_related_records_output() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .args(["--format", "records", "related", "go-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H notecap=1 records=1 mode=related id=go-1 results=1"))
        .stdout(predicate::str::contains("N go-2 score="));
}
