// tests/cli_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_the_default_manifest_without_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("crucible-toolchain").unwrap();
    cmd.current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"development\""))
        .stdout(predicate::str::contains("\"0.7.6\""))
        .stdout(predicate::str::contains("\"networkId\": \"*\""));
}

#[test]
fn prints_a_manifest_loaded_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("crucible.json"),
        r#"{
            "networks": {
                "development": { "host": "localhost", "port": 9545, "networkId": "5777" }
            },
            "compilers": {
                "solc": {
                    "version": "0.8.21",
                    "settings": { "optimizer": { "enabled": false, "runs": 0 } }
                }
            }
        }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("crucible-toolchain").unwrap();
    cmd.current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"0.8.21\""))
        .stdout(predicate::str::contains("\"5777\""))
        .stdout(predicate::str::contains("9545"));
}

#[test]
fn rejects_an_invalid_manifest() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("crucible.json"),
        r#"{
            "networks": {},
            "compilers": {
                "solc": {
                    "version": "0.7.6",
                    "settings": { "optimizer": { "enabled": true, "runs": 200 } }
                }
            }
        }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("crucible-toolchain").unwrap();
    cmd.current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load Crucible manifest"));
}

#[test]
fn init_manifest_writes_a_scaffold_and_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("init_manifest")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("crucible.json"));
    assert!(dir.path().join("crucible.json").exists());

    Command::cargo_bin("init_manifest")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
