//! Integration tests for the Vezor CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Commands that talk to the API run against a `wiremock` server; every
//! run gets a scratch working directory and a scrubbed environment so no
//! local `.vezor.toml` or real credentials leak in.

mod common;

use assert_cmd::Command;
use common::{blocking, full_secret, listed_secret, API_KEY};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: get a Command pointing at the vezor binary.
fn vezor(workdir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("vezor").expect("binary should exist");
    cmd.current_dir(workdir.path())
        .env_remove("VEZOR_API_KEY")
        .env_remove("VEZOR_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    vezor(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Read secrets and groups"))
        .stdout(predicate::str::contains("secret"))
        .stdout(predicate::str::contains("group"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    vezor(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_lists_data_sources() {
    let tmp = TempDir::new().unwrap();
    vezor(&tmp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vezor_secret"))
        .stdout(predicate::str::contains("vezor_group"));
}

#[test]
fn missing_api_key_fails() {
    let tmp = TempDir::new().unwrap();
    vezor(&tmp)
        .args(["secret", "DB_URL", "--tag", "env=prod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing API Key"));
}

#[test]
fn malformed_tag_is_rejected() {
    let tmp = TempDir::new().unwrap();
    vezor(&tmp)
        .args(["secret", "DB_URL", "--tag", "env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn broken_settings_file_fails() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".vezor.toml"), "not valid {{toml").unwrap();

    vezor(&tmp)
        .args(["group", "backend"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file error"));
}

#[tokio::test]
async fn secret_command_prints_value_in_env_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/secrets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "secrets": [listed_secret("sec_1", "DB_URL", json!({"env": "prod"}))],
            "total": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/secrets/sec_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_secret(
            "sec_1",
            "DB_URL",
            "postgres://prod/db",
            json!({"env": "prod"}),
        )))
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let tmp = TempDir::new().unwrap();
        vezor(&tmp)
            .env("VEZOR_API_KEY", API_KEY)
            .args(["--api-url", uri.as_str(), "secret", "db_url", "--tag", "env=prod", "-f", "env"])
            .assert()
            .success()
            .stdout("DB_URL=postgres://prod/db\n");
    })
    .await;
}

#[tokio::test]
async fn group_json_output_redacts_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/groups/backend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "grp_1",
            "name": "backend",
            "tags": {"app": "api"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/groups/backend/secrets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "group": "backend",
            "tags": {"app": "api"},
            "secrets": {"A": "super-secret-value"},
            "count": 1
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(".vezor.toml"),
            format!("api_url = \"{uri}\"\napi_key = \"{API_KEY}\"\n"),
        )
        .unwrap();

        vezor(&tmp)
            .args(["group", "backend", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"secret_count\": 1"))
            .stdout(predicate::str::contains("super-secret-value").not());
    })
    .await;
}

#[tokio::test]
async fn api_error_exits_nonzero_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/secrets/sec_404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let tmp = TempDir::new().unwrap();
        vezor(&tmp)
            .args(["--api-url", uri.as_str(), "--api-key", API_KEY, "get", "sec_404"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("API error (404): not found"));
    })
    .await;
}
