#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rvl() -> Command {
    cargo_bin_cmd!("rvisitlog")
}

/// Create a unique collection file path inside the system temp dir and
/// remove any leftover from a previous run.
pub fn setup_collection(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rvisitlog.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path and ensure it's removed.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an extracted-CSV input file with the given rows.
pub fn write_raw_csv(name: &str, rows: &[(&str, &str, &str)]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_raw.csv", name));
    let p = path.to_string_lossy().to_string();

    let mut content = String::from("date,time,location\n");
    for (date, time, location) in rows {
        content.push_str(&format!("{},{},{}\n", date, time, location));
    }
    fs::write(&p, content).expect("write raw csv");

    p
}

/// Classify a small mixed dataset into the given collection file.
pub fn init_collection_with_data(collection: &str) {
    let key = collection.replace(['/', '\\', ':', '.'], "_");
    let csv = write_raw_csv(
        &format!("seed_{}", key),
        &[
            ("14/03/2024", "08:30:00", "Site A"),
            ("15/03/2024", "22:00:00", "Site B"),
            ("02/04/2024", "03:15:00", "Site C"),
        ],
    );

    rvl()
        .args(["--file", collection, "classify", &csv])
        .assert()
        .success();
}

/// Read the ids stored in a collection file, in order.
pub fn collection_ids(collection: &str) -> Vec<String> {
    let content = fs::read_to_string(collection).expect("read collection");
    let visits: serde_json::Value = serde_json::from_str(&content).expect("parse collection");

    visits
        .as_array()
        .expect("collection is an array")
        .iter()
        .map(|v| v["id"].as_str().expect("id is a string").to_string())
        .collect()
}
