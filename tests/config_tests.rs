use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::rvl;

/// Fake home directory so config tests never touch the real one.
fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rvisitlog_home", name));
    let home = path.to_string_lossy().to_string();
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create fake home");
    home
}

fn config_path(home: &str) -> PathBuf {
    PathBuf::from(home).join(".rvisitlog").join("rvisitlog.conf")
}

#[test]
fn test_init_creates_config_and_empty_collection() {
    let home = setup_home("init_creates");

    rvl()
        .env("HOME", &home)
        .args(["init"])
        .assert()
        .success()
        .stdout(contains("Config file"))
        .stdout(contains("Collection"));

    assert!(config_path(&home).exists());

    let collection = PathBuf::from(&home).join(".rvisitlog").join("visits.json");
    let content = fs::read_to_string(collection).expect("read collection");
    assert_eq!(content, "[]");
}

#[test]
fn test_init_in_test_mode_skips_config_file() {
    let home = setup_home("init_test_mode");

    rvl()
        .env("HOME", &home)
        .args(["--test", "init"])
        .assert()
        .success();

    assert!(!config_path(&home).exists());
}

#[test]
fn test_config_print_shows_team_slots() {
    let home = setup_home("config_print");

    rvl().env("HOME", &home).args(["init"]).assert().success();

    rvl()
        .env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("day_even_team"))
        .stdout(contains("night_odd_team"))
        .stdout(contains("collection"));
}

#[test]
fn test_config_check_reports_missing_keys() {
    let home = setup_home("config_check_missing");
    let dir = PathBuf::from(&home).join(".rvisitlog");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("rvisitlog.conf"), "collection: /tmp/x.json\n").expect("write config");

    rvl()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing configuration key: day_even_team"))
        .stdout(contains("Missing configuration key: separator_char"));
}

#[test]
fn test_config_check_passes_on_complete_file() {
    let home = setup_home("config_check_ok");

    rvl().env("HOME", &home).args(["init"]).assert().success();

    rvl()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));
}

#[test]
fn test_configured_slots_drive_assignment() {
    let home = setup_home("config_slots_assign");
    let dir = PathBuf::from(&home).join(".rvisitlog");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(
        dir.join("rvisitlog.conf"),
        concat!(
            "collection: /tmp/config_slots_assign.json\n",
            "day_even_team: Alpha\n",
            "day_odd_team: Beta\n",
            "night_even_team: Gamma\n",
            "night_odd_team: Delta\n",
            "separator_char: '-'\n",
        ),
    )
    .expect("write config");

    let collection = common::setup_collection("config_slots_assign");
    common::init_collection_with_data(&collection);

    rvl()
        .env("HOME", &home)
        .args(["--file", &collection, "assign"])
        .assert()
        .success()
        .stdout(contains("Assigned teams to 3 of 3"));

    rvl()
        .args(["--file", &collection, "list", "--team", "Alpha"])
        .assert()
        .success()
        .stdout(contains("14/03/2024"));
}
