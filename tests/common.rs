#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhl() -> Command {
    cargo_bin_cmd!("rhabitlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhabitlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB (schema + default profile)
pub fn init_db(db_path: &str) {
    rhl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the DB and create a tracker with a pinned clock, useful for
/// many tests. One UTC tracker spanning 2026-01-12 .. 2026-01-14.
pub fn init_db_with_tracker(db_path: &str, name: &str) {
    init_db(db_path);

    rhl()
        .args([
            "--db",
            db_path,
            "--test",
            "--now",
            "2026-01-14T18:00:00Z",
            "add",
            name,
            "--start",
            "2026-01-12T10:00:00Z",
            "--tz",
            "UTC",
        ])
        .assert()
        .success();
}
