use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn hoist_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hoist").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("HOIST_USERNAME")
        .env_remove("HOIST_PASSWORD");
    cmd
}

#[test]
fn repos_without_server_configured_fails() {
    let tmp = TempDir::new().unwrap();
    hoist_cmd(&tmp)
        .arg("repos")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No server selected"));
}

#[test]
fn repos_with_unknown_server_name_fails() {
    let tmp = TempDir::new().unwrap();
    let config_dir = tmp.path().join(".hoist");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
        [servers]
        nexus = "https://nexus.example.com"
        "#,
    )
    .unwrap();

    hoist_cmd(&tmp)
        .args(["repos", "--server", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown server 'other'"));
}

#[test]
fn unparseable_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    let config_dir = tmp.path().join(".hoist");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "servers = not toml {{").unwrap();

    hoist_cmd(&tmp)
        .arg("repos")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn clear_without_server_configured_fails() {
    let tmp = TempDir::new().unwrap();
    hoist_cmd(&tmp)
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No server selected"));
}
