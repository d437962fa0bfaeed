#![allow(dead_code)]

pub mod server;

use std::path::PathBuf;

use bookflip::domain::snapshot::Snapshot;

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_text(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("read fixture")
}

pub fn fixture_snapshot(name: &str) -> Snapshot {
    Snapshot::from_json(&fixture_text(name)).expect("parse fixture")
}
