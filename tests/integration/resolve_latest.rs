//! `latest` resolution through the release index redirect.

use mockito::Server;
use semver::Version;
use tempfile::TempDir;

use setup_shfmt::core::SetupError;
use setup_shfmt::release::ReleaseClient;

use crate::common::{LATEST_PATH, artifact_path, installer};

#[tokio::test]
async fn test_latest_follows_location_header() {
    let mut server = Server::new_async().await;
    let latest = server
        .mock("GET", LATEST_PATH)
        .with_status(302)
        .with_header("location", "https://github.com/mvdan/sh/releases/tag/v3.7.0")
        .expect(1)
        .create_async()
        .await;

    let client = ReleaseClient::new(server.url()).unwrap();
    assert_eq!(client.latest_version().await.unwrap(), Version::new(3, 7, 0));
    latest.assert_async().await;
}

#[tokio::test]
async fn test_non_redirect_status_is_resolution_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", LATEST_PATH)
        .with_status(200)
        .with_body("<html></html>")
        .create_async()
        .await;

    let client = ReleaseClient::new(server.url()).unwrap();
    let err = client.latest_version().await.unwrap_err();
    assert_eq!(err, SetupError::resolution("status code: 200"));
    assert_eq!(err.to_string(), "Unable to get latest release (status code: 200)");
}

#[tokio::test]
async fn test_redirect_without_location_is_resolution_error() {
    let mut server = Server::new_async().await;
    server.mock("GET", LATEST_PATH).with_status(302).create_async().await;

    let client = ReleaseClient::new(server.url()).unwrap();
    let err = client.latest_version().await.unwrap_err();
    assert_eq!(err, SetupError::resolution("location: "));
}

#[tokio::test]
async fn test_redirect_to_non_version_tag_is_resolution_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", LATEST_PATH)
        .with_status(302)
        .with_header("location", "https://github.com/mvdan/sh/releases/tag/nightly")
        .create_async()
        .await;

    let client = ReleaseClient::new(server.url()).unwrap();
    let err = client.latest_version().await.unwrap_err();
    assert!(matches!(err, SetupError::Resolution { .. }), "{err:?}");
}

/// A failed lookup aborts before the install directory is created.
#[tokio::test]
async fn test_failed_lookup_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    let path_file = temp.path().join("github_path");

    let mut server = Server::new_async().await;
    server.mock("GET", LATEST_PATH).with_status(200).create_async().await;
    let download = server
        .mock("GET", mockito::Matcher::Regex(r"^/releases/download/".to_string()))
        .expect(0)
        .create_async()
        .await;

    let err = installer(&server.url(), "latest", &bin_dir, &path_file).run().await.unwrap_err();

    assert!(matches!(err, SetupError::Resolution { .. }), "{err:?}");
    assert!(!bin_dir.exists());
    assert!(!path_file.exists());
    download.assert_async().await;
}

#[cfg(unix)]
#[tokio::test]
async fn test_latest_install_uses_resolved_version() {
    use setup_shfmt::test_utils::fake_shfmt_script;

    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    let path_file = temp.path().join("github_path");

    let mut server = Server::new_async().await;
    let location = format!("{}/releases/tag/v3.7.0", server.url());
    let latest = server
        .mock("GET", LATEST_PATH)
        .with_status(302)
        .with_header("location", location.as_str())
        .expect(1)
        .create_async()
        .await;
    let download = server
        .mock("GET", artifact_path("3.7.0").as_str())
        .with_status(200)
        .with_body(fake_shfmt_script("v3.7.0"))
        .expect(1)
        .create_async()
        .await;

    let outcome = installer(&server.url(), "latest", &bin_dir, &path_file).run().await.unwrap();

    assert!(outcome.installed);
    assert_eq!(outcome.version, Version::new(3, 7, 0));
    latest.assert_async().await;
    download.assert_async().await;
}
