use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for notecap
pub fn notecap() -> Command {
    cargo_bin_cmd!("notecap")
}

/// Get a Command for notecap bound to a data directory
pub fn notecap_in(data_dir: &Path) -> Command {
    let mut cmd = notecap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd.env_remove("NOTECAP_LOG");
    cmd
}

/// Day in milliseconds
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Write a data directory with a small fixed set of notes and folders
pub fn setup_data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_notes(
        dir.path(),
        &serde_json::json!([
            {
                "id": "rust-1",
                "title": "Rust Ownership",
                "content": "Rust's borrow checker enforces memory safety without garbage collection.",
                "folderId": "dev",
                "tags": ["rust", "memory"],
                "url": "https://doc.rust-lang.org/book/",
                "createdAt": 1_700_000_000_000_i64,
                "updatedAt": 1_700_000_300_000_i64
            },
            {
                "id": "go-1",
                "title": "Go Concurrency",
                "content": "Goroutines and channels make CSP practical.",
                "folderId": "dev",
                "tags": ["go", "concurrency"],
                "createdAt": 1_700_000_100_000_i64,
                "updatedAt": 1_700_000_200_000_i64
            },
            {
                "id": "go-2",
                "title": "Concurrency in Go",
                "content": "Do not communicate by sharing memory; share memory by communicating.",
                "tags": ["go", "memory"],
                "createdAt": 1_700_000_200_000_i64,
                "updatedAt": 1_700_000_100_000_i64
            },
            {
                "id": "bread-1",
                "title": "Sourdough \"Basics\"",
                "content": "Flour, water, salt and patience.",
                "folderId": "kitchen",
                "tags": ["cooking"],
                "createdAt": 1_700_000_300_000_i64,
                "updatedAt": 1_700_000_000_000_i64
            }
        ]),
    );
    fs::write(
        dir.path().join("folders.json"),
        serde_json::json!([
            { "id": "dev", "name": "Development", "createdAt": 0, "updatedAt": 0 },
            { "id": "kitchen", "name": "Kitchen", "createdAt": 0, "updatedAt": 0 }
        ])
        .to_string(),
    )
    .unwrap();
    dir
}

/// Overwrite notes.json in `dir`
pub fn write_notes(dir: &Path, notes: &serde_json::Value) {
    fs::write(dir.join("notes.json"), notes.to_string()).unwrap();
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}
