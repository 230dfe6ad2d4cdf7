use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn base_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("uaa"));
    cmd.env("HOME", home);
    cmd.env_remove("UAA_CONFIG");
    cmd.env_remove("UAA_ACCESS_TOKEN");
    cmd
}

#[test]
fn target_without_config_reports_none() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .arg("target")
        .assert()
        .success()
        .stdout(predicate::str::contains("No target set"));

    assert!(!home_dir.path().join(".uaa").exists());
}

#[test]
fn target_and_context_persist_between_invocations() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args(["target", "https://uaa.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target set to https://uaa.example.com"));

    base_cmd(home_dir.path())
        .args([
            "save-context",
            "--client-id",
            "admin",
            "--access-token",
            "stored-token",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "client:admin grant_type:client_credentials user:",
        ));

    base_cmd(home_dir.path())
        .args(["context", "--access-token"])
        .assert()
        .success()
        .stdout(predicate::str::diff("stored-token\n"));

    let config_path = home_dir.path().join(".uaa").join("config.json");
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).expect("config")).expect("json");
    assert_eq!(raw["ActiveTargetName"], "url:https://uaa.example.com");
    assert_eq!(
        raw["Targets"]["url:https://uaa.example.com"]["ActiveContextName"],
        "client:admin grant_type:client_credentials user:"
    );

    base_cmd(home_dir.path())
        .arg("targets")
        .assert()
        .success()
        .stdout(predicate::str::contains("* url:https://uaa.example.com"));
}

#[cfg(unix)]
#[test]
fn config_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let home_dir = tempdir().expect("tempdir");
    base_cmd(home_dir.path())
        .args(["target", "https://uaa.example.com"])
        .assert()
        .success();

    let dir = home_dir.path().join(".uaa");
    let dir_mode = fs::metadata(&dir).expect("dir").permissions().mode();
    let file_mode = fs::metadata(dir.join("config.json"))
        .expect("file")
        .permissions()
        .mode();
    assert_eq!(dir_mode & 0o777, 0o755);
    assert_eq!(file_mode & 0o777, 0o600);
}

#[test]
fn explicit_config_path_is_used() {
    let home_dir = tempdir().expect("tempdir");
    let config_path = home_dir.path().join("custom").join("uaa.json");

    base_cmd(home_dir.path())
        .args([
            "--config",
            config_path.to_str().expect("utf8 path"),
            "target",
            "https://uaa.example.com",
        ])
        .assert()
        .success();

    assert!(config_path.exists());
    assert!(!home_dir.path().join(".uaa").exists());
}

#[test]
fn token_keys_fall_back_to_single_key() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server.mock("GET", "/token_keys").with_status(404).create();
    server
        .mock("GET", "/token_key")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(
            json!({
                "kty": "RSA",
                "e": "AQAB",
                "use": "sig",
                "kid": "legacy-key",
                "alg": "RS256",
                "value": "pem",
                "n": "modulus"
            })
            .to_string(),
        )
        .create();

    base_cmd(home_dir.path())
        .args(["target", &server.url()])
        .assert()
        .success();

    base_cmd(home_dir.path())
        .arg("token-keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("legacy-key"));
}

#[test]
fn token_keys_failure_names_single_key_url() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server.mock("GET", "/token_keys").with_status(400).create();
    server.mock("GET", "/token_key").with_status(400).create();

    base_cmd(home_dir.path())
        .args(["target", &server.url()])
        .assert()
        .success();

    base_cmd(home_dir.path())
        .arg("token-keys")
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "{}/token_key",
            server.url()
        )));
}

#[test]
fn status_checks_healthz() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/healthz")
        .with_status(200)
        .with_body("ok")
        .create();

    base_cmd(home_dir.path())
        .args(["target", &server.url()])
        .assert()
        .success();

    base_cmd(home_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn malformed_config_aborts_command() {
    let home_dir = tempdir().expect("tempdir");
    let dir = home_dir.path().join(".uaa");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("config.json"), "{ broken").expect("write");

    base_cmd(home_dir.path())
        .arg("targets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to load config"));
}

#[test]
fn logout_removes_config() {
    let home_dir = tempdir().expect("tempdir");
    base_cmd(home_dir.path())
        .args(["target", "https://uaa.example.com"])
        .assert()
        .success();

    base_cmd(home_dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    assert!(!home_dir.path().join(".uaa").join("config.json").exists());

    base_cmd(home_dir.path())
        .arg("logout")
        .assert()
        .success();
}

#[test]
fn repaired_config_is_logged() {
    let home_dir = tempdir().expect("tempdir");
    let dir = home_dir.path().join(".uaa");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(
        dir.join("config.json"),
        r#"{"ActiveTargetName":"url:https://gone.example.com","Targets":{}}"#,
    )
    .expect("write");

    base_cmd(home_dir.path())
        .arg("targets")
        .assert()
        .success()
        .stderr(predicate::str::contains("active target missing"));
}

#[test]
fn persisted_verbose_raises_log_level() {
    let home_dir = tempdir().expect("tempdir");
    let dir = home_dir.path().join(".uaa");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("config.json"), r#"{"Verbose":true}"#).expect("write");

    base_cmd(home_dir.path())
        .args(["save-context", "--client-id", "admin", "--access-token", "t"])
        .assert()
        .success()
        .stderr(predicate::str::contains("context saved"));

    base_cmd(home_dir.path())
        .args(["context", "--access-token"])
        .assert()
        .success()
        .stdout(predicate::str::diff("t\n"));
}
