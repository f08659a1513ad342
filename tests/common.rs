#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::path::PathBuf;

pub fn ht() -> Command {
    cargo_bin_cmd!("habitrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_habitrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables); --test keeps the user config untouched
    ht().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ht().args([
        "--db",
        db_path,
        "add",
        "Drink Water",
        "--emoji",
        "💧",
        "--color",
        "3",
        "--days",
        "mon,wed,fri",
    ])
    .assert()
    .success();

    ht().args([
        "--db",
        db_path,
        "add",
        "Call Mom",
        "--emoji",
        "📞",
        "--color",
        "5",
        "--event",
        "--category",
        "Family",
    ])
    .assert()
    .success();
}

/// Fetch a tracker id by name through the library API.
pub fn tracker_id(db_path: &str, name: &str) -> String {
    let repo = habitrack::db::repository::Repository::open(db_path).expect("open repo");
    repo.list_trackers()
        .expect("list trackers")
        .into_iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("tracker '{}' not found", name))
        .id
}
