//! End-to-end install runs against a mock release index.
//!
//! The downloaded "binary" is a shell script printing a version, so these
//! tests need a Unix shell.
#![cfg(unix)]

use mockito::Server;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

use setup_shfmt::core::SetupError;
use setup_shfmt::installer::DecisionReason;
use setup_shfmt::test_utils::{fake_shfmt_script, init_test_logging, write_fake_shfmt};

use crate::common::{artifact_path, installer, registered_paths};

/// Fresh install, then a rerun that must not download again.
#[tokio::test]
async fn test_install_then_rerun_downloads_once() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    let path_file = temp.path().join("github_path");

    let mut server = Server::new_async().await;
    let download = server
        .mock("GET", artifact_path("2.0.0").as_str())
        .with_status(200)
        .with_body(fake_shfmt_script("v2.0.0"))
        .expect(1)
        .create_async()
        .await;

    let outcome = installer(&server.url(), "2.0.0", &bin_dir, &path_file).run().await.unwrap();
    assert!(outcome.installed);
    assert_eq!(outcome.decision.reason, DecisionReason::NoExistingBinary);
    assert_eq!(outcome.binary_path, bin_dir.join("shfmt"));

    let mode = std::fs::metadata(&outcome.binary_path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
    assert_eq!(registered_paths(&path_file), vec![bin_dir.clone()]);

    let rerun = installer(&server.url(), "2.0.0", &bin_dir, &path_file).run().await.unwrap();
    assert!(!rerun.installed);
    assert_eq!(rerun.decision.reason, DecisionReason::InstalledEqual);
    // Path is registered only when a new binary was written.
    assert_eq!(registered_paths(&path_file), vec![bin_dir]);

    download.assert_async().await;
}

#[tokio::test]
async fn test_older_binary_is_replaced() {
    let temp = TempDir::new().unwrap();
    let path_file = temp.path().join("github_path");
    let binary = write_fake_shfmt(temp.path(), "shfmt", "v1.3.1").unwrap();

    let mut server = Server::new_async().await;
    let download = server
        .mock("GET", artifact_path("2.0.0").as_str())
        .with_status(200)
        .with_body(fake_shfmt_script("v2.0.0"))
        .expect(1)
        .create_async()
        .await;

    let outcome = installer(&server.url(), "2.0.0", temp.path(), &path_file).run().await.unwrap();

    assert!(outcome.installed);
    assert_eq!(outcome.decision.reason, DecisionReason::InstalledOlder);
    assert_eq!(outcome.decision.installed, Some(semver::Version::new(1, 3, 1)));
    assert_eq!(std::fs::read_to_string(&binary).unwrap(), fake_shfmt_script("v2.0.0"));
    download.assert_async().await;
}

#[tokio::test]
async fn test_newer_binary_is_never_downgraded() {
    let temp = TempDir::new().unwrap();
    let path_file = temp.path().join("github_path");
    let binary = write_fake_shfmt(temp.path(), "shfmt", "v3.7.0").unwrap();

    let mut server = Server::new_async().await;
    let download = server
        .mock("GET", artifact_path("2.0.0").as_str())
        .with_status(200)
        .with_body(fake_shfmt_script("v2.0.0"))
        .expect(0)
        .create_async()
        .await;

    let outcome = installer(&server.url(), "2.0.0", temp.path(), &path_file).run().await.unwrap();

    assert!(!outcome.installed);
    assert_eq!(outcome.decision.reason, DecisionReason::InstalledNewer);
    assert_eq!(std::fs::read_to_string(&binary).unwrap(), fake_shfmt_script("v3.7.0"));
    assert!(!path_file.exists());
    download.assert_async().await;
}

#[tokio::test]
async fn test_unparseable_version_output_triggers_install() {
    let temp = TempDir::new().unwrap();
    let path_file = temp.path().join("github_path");
    write_fake_shfmt(temp.path(), "shfmt", "garbage-text").unwrap();

    let mut server = Server::new_async().await;
    let download = server
        .mock("GET", artifact_path("2.0.0").as_str())
        .with_status(200)
        .with_body(fake_shfmt_script("v2.0.0"))
        .expect(1)
        .create_async()
        .await;

    let outcome = installer(&server.url(), "2.0.0", temp.path(), &path_file).run().await.unwrap();

    assert!(outcome.installed);
    assert_eq!(outcome.decision.reason, DecisionReason::UnparseableInstalledVersion);
    download.assert_async().await;
}

#[tokio::test]
async fn test_non_executable_file_is_overwritten() {
    let temp = TempDir::new().unwrap();
    let path_file = temp.path().join("github_path");
    let binary = temp.path().join("shfmt");
    std::fs::write(&binary, fake_shfmt_script("v2.0.0")).unwrap();
    std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o644)).unwrap();

    let mut server = Server::new_async().await;
    let download = server
        .mock("GET", artifact_path("2.0.0").as_str())
        .with_status(200)
        .with_body(fake_shfmt_script("v2.0.0"))
        .expect(1)
        .create_async()
        .await;

    let outcome = installer(&server.url(), "2.0.0", temp.path(), &path_file).run().await.unwrap();

    assert!(outcome.installed);
    assert_eq!(outcome.decision.reason, DecisionReason::NoExistingBinary);
    let mode = std::fs::metadata(&binary).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
    download.assert_async().await;
}

#[tokio::test]
async fn test_missing_artifact_is_download_error() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    let path_file = temp.path().join("github_path");

    let mut server = Server::new_async().await;
    let download = server
        .mock("GET", artifact_path("9.9.9").as_str())
        .with_status(404)
        .with_body("Not Found")
        .expect(1)
        .create_async()
        .await;

    let err = installer(&server.url(), "9.9.9", &bin_dir, &path_file).run().await.unwrap_err();

    match err {
        SetupError::Download { url, reason } => {
            assert!(url.ends_with(&artifact_path("9.9.9")), "{url}");
            assert!(reason.contains("404"), "{reason}");
        }
        other => panic!("expected download error, got {other:?}"),
    }
    assert!(!bin_dir.join("shfmt").exists());
    assert!(!path_file.exists());
    download.assert_async().await;
}
