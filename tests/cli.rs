//
//  profilescout
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `scout` with an isolated config directory and no key in the environment.
fn scout(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scout").unwrap();
    cmd.env_remove("PROFILESCOUT_API_KEY")
        .env_remove("SCOUT_BASE_URL")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env("NO_COLOR", "1");
    cmd
}

fn write_config(config_home: &TempDir, content: &str) {
    let dir = config_home.path().join("scout");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), content).unwrap();
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    scout(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("research"))
        .stdout(predicate::str::contains("enrich"))
        .stdout(predicate::str::contains("credits"));
}

#[test]
fn test_missing_key_exits_with_auth_code() {
    let home = TempDir::new().unwrap();
    scout(&home)
        .arg("credits")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("PROFILESCOUT_API_KEY"));
}

#[test]
fn test_max_without_all_is_usage_error() {
    let home = TempDir::new().unwrap();
    scout(&home)
        .args(["search", "q", "--max", "3"])
        .assert()
        .code(2);
}

#[test]
fn test_config_path_uses_config_dir() {
    let home = TempDir::new().unwrap();
    scout(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_reports_defaults() {
    let home = TempDir::new().unwrap();
    scout(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://api.profilescout.dev"))
        .stdout(predicate::str::contains("page_size = 30"));
}

#[test]
fn test_credits_json_output() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/credits")
        .match_header("authorization", "Bearer sk-cli")
        .with_status(200)
        .with_body(r#"{"credits_remaining":7,"credits_used":3,"plan":"trial"}"#)
        .create();

    let home = TempDir::new().unwrap();
    scout(&home)
        .args(["--json", "--api-key", "sk-cli", "--base-url", &server.url(), "credits"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"credits_remaining\": 7"));

    mock.assert();
}

#[test]
fn test_not_found_exit_code() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/enrich/linkedin")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .with_body(r#"{"detail":"profile not found"}"#)
        .create();

    let home = TempDir::new().unwrap();
    scout(&home)
        .env("PROFILESCOUT_API_KEY", "sk-cli")
        .args(["--base-url", &server.url()])
        .args(["enrich", "profile", "https://www.linkedin.com/in/nobody"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("profile not found"));
}

#[test]
fn test_network_failure_uses_config_retry_budget() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        "[api]\nbase_url = \"http://127.0.0.1:1\"\n\n[retry]\nmax_retries = 0\n",
    );

    scout(&home)
        .args(["--api-key", "sk-cli", "credits"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("network error"));
}
