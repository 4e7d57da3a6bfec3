//! Binary-level tests of `setup-shfmt`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the GitHub Actions environment of the host.
fn setup_shfmt(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("setup-shfmt").unwrap();
    cmd.env("HOME", home)
        .env_remove("GITHUB_ACTIONS")
        .env_remove("GITHUB_PATH")
        .env_remove("INPUT_SHFMT-VERSION")
        .env_remove("INPUT_SHFMT-BIN-DIR")
        .env_remove("SETUP_SHFMT_RELEASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_invalid_version_fails() {
    let temp = TempDir::new().unwrap();

    setup_shfmt(temp.path())
        .args(["--shfmt-version", "three"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Version format provided three is invalid."))
        .stdout(predicate::str::contains("::error::").not());
}

#[test]
fn test_failure_is_annotated_on_github_actions() {
    let temp = TempDir::new().unwrap();

    setup_shfmt(temp.path())
        .env("GITHUB_ACTIONS", "true")
        .env("INPUT_SHFMT-VERSION", "three")
        .assert()
        .failure()
        .stdout(predicate::str::contains("::error::Version format provided three is invalid."));
}

#[test]
fn test_check_only_reports_without_installing() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("tools");

    setup_shfmt(temp.path())
        .args(["--shfmt-version", "3.7.0", "--check", "--no-progress"])
        .arg("--shfmt-bin-dir")
        .arg(&bin_dir)
        .args(["--release-url", "http://127.0.0.1:9"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "New version needs to be downloaded as there is no existing version of the software.",
        ));

    assert!(bin_dir.is_dir());
    assert!(!bin_dir.join("shfmt").exists());
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();

    setup_shfmt(temp.path())
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_binary_installs_into_home_bin() {
    use setup_shfmt::test_utils::fake_shfmt_script;

    let temp = TempDir::new().unwrap();
    let path_file = temp.path().join("github_path");

    let mut server = mockito::Server::new();
    let download = server
        .mock("GET", crate::common::artifact_path("2.0.0").as_str())
        .with_status(200)
        .with_body(fake_shfmt_script("v2.0.0"))
        .expect(1)
        .create();

    setup_shfmt(temp.path())
        .env("GITHUB_ACTIONS", "true")
        .env("GITHUB_PATH", &path_file)
        .env("INPUT_SHFMT-VERSION", "2.0.0")
        .env("INPUT_SHFMT-BIN-DIR", "")
        .args(["--release-url", &server.url(), "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("::error::").not())
        .stderr(predicate::str::contains("updated to version 2.0.0."));

    let bin_dir = temp.path().join("bin");
    assert!(bin_dir.join("shfmt").is_file());
    assert_eq!(
        std::fs::read_to_string(&path_file).unwrap(),
        format!("{}\n", bin_dir.display())
    );
    download.assert();
}
