use crate::cli::support::{notecap_in, setup_data_dir, stdout_json, write_notes, DAY_MS};
use predicates::prelude::*;

// ============================================================================
// Stats command tests
// ============================================================================

#[test]
fn test_stats_human() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes:   4"))
        .stdout(predicate::str::contains("Folders: 2"))
        .stdout(predicate::str::contains("go (2)"));
}

#[test]
fn test_stats_json() {
    let dir = setup_data_dir();

    let output = notecap_in(dir.path())
        .args(["--format", "json", "stats"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    assert_eq!(json["total_notes"], 4);
    assert_eq!(json["total_folders"], 2);
    assert_eq!(json["popular_tags"][0]["tag"], "go");
    assert_eq!(json["popular_tags"][0]["count"], 2);
    assert_eq!(json["popular_tags"][1]["tag"], "memory");
    // Fixture notes are from 2023, outside the recent window
    assert_eq!(json["recent_notes"].as_array().unwrap().len(), 0);
}

#[test]
fn test_stats_records() {
    let dir = setup_data_dir();

    notecap_in(dir.path())
        .args(["--format", "records", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=stats notes=4 folders=2"))
        .stdout(predicate::str::contains("T go count=2"));
}

#[test]
fn test_stats_recent_notes() {
    let dir = setup_data_dir();
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64;
    write_notes(
        dir.path(),
        &serde_json::json!([
            { "id": "fresh", "title": "Fresh", "createdAt": now - DAY_MS, "updatedAt": now },
            { "id": "stale", "title": "Stale", "createdAt": now - 30 * DAY_MS, "updatedAt": now }
        ]),
    );

    let output = notecap_in(dir.path())
        .args(["--format", "json", "stats"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    let recent = json["recent_notes"].as_array().unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0]["id"], "fresh");

    notecap_in(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent:"))
        .stdout(predicate::str::contains("fresh Fresh"));
}
