use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::LOCATION;
use reqwest::{Client, StatusCode, redirect};
use semver::Version;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::core::SetupError;
use crate::version::VersionSpecifier;

const USER_AGENT: &str = concat!("setup-shfmt/", env!("CARGO_PKG_VERSION"));

/// HTTP access to the shfmt release index.
///
/// `ReleaseClient` performs the two network calls of an install run:
///
/// - the `latest` lookup, a single `GET <base>/releases/latest` with
///   redirects disabled so the `302` and its `Location` header can be read
/// - the artifact download, which follows redirects to the asset host and
///   streams the body to disk
///
/// Neither call is retried and no timeout is configured; a hung connection
/// hangs the run.
///
/// # Examples
///
/// ```rust,no_run
/// use setup_shfmt::release::{DEFAULT_RELEASE_URL, ReleaseClient};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = ReleaseClient::new(DEFAULT_RELEASE_URL)?;
/// let latest = client.latest_version().await?;
/// println!("latest shfmt is {latest}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReleaseClient {
    base_url: String,
    /// Client with redirects disabled, used for the `latest` lookup.
    lookup: Client,
    /// Client following redirects, used for artifact downloads.
    download: Client,
    show_progress: bool,
}

impl ReleaseClient {
    /// Create a client for the release index at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Config`] if the HTTP clients cannot be built,
    /// which only happens when the TLS backend fails to initialise.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SetupError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let lookup = Client::builder()
            .redirect(redirect::Policy::none())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SetupError::Config {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        let download = Client::builder().user_agent(USER_AGENT).build().map_err(|e| {
            SetupError::Config {
                message: format!("Failed to build HTTP client: {e}"),
            }
        })?;

        Ok(Self {
            base_url,
            lookup,
            download,
            show_progress: false,
        })
    }

    /// Enable or disable the download progress bar.
    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// The release index base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a specifier into the concrete version to install.
    ///
    /// Exact versions are returned unchanged without touching the network;
    /// `latest` is resolved with [`latest_version`](Self::latest_version).
    pub async fn resolve(&self, specifier: &VersionSpecifier) -> Result<Version, SetupError> {
        match specifier {
            VersionSpecifier::Exact(version) => Ok(version.clone()),
            VersionSpecifier::Latest => {
                let version = self.latest_version().await?;
                info!("Latest shfmt version is {}", version);
                Ok(version)
            }
        }
    }

    /// Look up the newest release through the `releases/latest` redirect.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Resolution`] when the request fails, the status
    /// is anything but `302 Found`, the `Location` header is missing or empty,
    /// or its last path segment is not a `v<semver>` tag.
    pub async fn latest_version(&self) -> Result<Version, SetupError> {
        let url = format!("{}/releases/latest", self.base_url);
        debug!("Looking up latest release at {}", url);

        let response = self
            .lookup
            .get(&url)
            .send()
            .await
            .map_err(|e| SetupError::resolution(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if status != StatusCode::FOUND {
            return Err(SetupError::resolution(format!("status code: {}", status.as_u16())));
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if location.is_empty() {
            return Err(SetupError::resolution(format!("location: {location}")));
        }

        debug!("Latest release redirects to {}", location);
        version_from_location(location)
    }

    /// Download `url` into the file at `destination`.
    ///
    /// The body is streamed chunk by chunk; the file is flushed and closed
    /// before this returns. Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Download`] on transport errors or a non-success
    /// status, and [`SetupError::FileSystem`] if the file cannot be written.
    pub async fn download(&self, url: &str, destination: &Path) -> Result<u64, SetupError> {
        debug!("Downloading {} to {}", url, destination.display());

        let mut response =
            self.download.get(url).send().await.map_err(|e| SetupError::download(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SetupError::download(url, format!("HTTP {status}")));
        }

        let progress = self.progress_bar(response.content_length());

        let mut file = File::create(destination)
            .await
            .map_err(|e| SetupError::file_system("create file", destination, e))?;

        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await.map_err(|e| SetupError::download(url, e))? {
            file.write_all(&chunk)
                .await
                .map_err(|e| SetupError::file_system("write file", destination, e))?;
            written += chunk.len() as u64;
            progress.inc(chunk.len() as u64);
        }

        file.flush().await.map_err(|e| SetupError::file_system("write file", destination, e))?;
        drop(file);
        progress.finish_and_clear();

        debug!("Downloaded {} bytes from {}", written, url);
        Ok(written)
    }

    fn progress_bar(&self, total: Option<u64>) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = match total {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };
        let style = ProgressStyle::with_template(
            "{prefix:.bold.cyan} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
        )
        .map(|style| style.progress_chars("━╸━"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_prefix("shfmt");
        bar
    }
}

/// Extract the release version from a `releases/latest` redirect target.
///
/// The last path segment is the release tag (`v3.7.0`); one leading `v` is
/// stripped and the rest must be a valid semantic version.
///
/// # Examples
///
/// ```rust,no_run
/// use setup_shfmt::release::version_from_location;
///
/// let version = version_from_location("https://github.com/mvdan/sh/releases/tag/v3.7.0").unwrap();
/// assert_eq!(version.to_string(), "3.7.0");
/// ```
pub fn version_from_location(location: &str) -> Result<Version, SetupError> {
    let tag = location.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    let candidate = tag.strip_prefix('v').unwrap_or(tag);

    Version::parse(candidate).map_err(|_| {
        SetupError::resolution(format!("latest version format is invalid: '{candidate}'"))
    })
}
