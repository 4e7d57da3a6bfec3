//! Install orchestration.
//!
//! [`Installer::run`] drives one run from a [`SetupConfig`]:
//!
//! 1. resolve the requested version (network for `latest` only)
//! 2. ensure the install directory exists
//! 3. probe the binary already in that directory and decide
//! 4. if needed, download into a temporary directory, move the binary into
//!    place, mark it executable and register the directory on the search
//!    path
//!
//! Resolution runs before anything touches the file system, so a failed
//! `latest` lookup leaves no directory behind. Errors are propagated as they
//! are; nothing is rolled back.
//!
//! - [`probe`] - queries the installed binary for its version
//! - [`decision`] - compares the installed and requested versions

pub mod decision;
pub mod probe;

pub use decision::{DecisionReason, UpdateDecision};
pub use probe::{ProbeOutcome, probe};

use semver::Version;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::ci::ActionsEnvironment;
use crate::config::SetupConfig;
use crate::core::SetupError;
use crate::release::{ArtifactReference, ReleaseClient};
use crate::utils::fs::{ensure_dir, make_executable, replace_file};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// The concrete version that was requested.
    pub version: Version,
    /// Where the binary lives.
    pub binary_path: PathBuf,
    /// What the decision engine concluded.
    pub decision: UpdateDecision,
    /// `true` when a new binary was written.
    pub installed: bool,
}

/// Runs the install pipeline for one configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use setup_shfmt::config::SetupConfig;
/// use setup_shfmt::installer::Installer;
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = SetupConfig::new("3.7.0".parse()?, PathBuf::from("/opt/bin"));
/// let outcome = Installer::new(config)?.run().await?;
/// println!("shfmt {} at {}", outcome.version, outcome.binary_path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Installer {
    config: SetupConfig,
    client: ReleaseClient,
    ci: ActionsEnvironment,
}

impl Installer {
    /// Create an installer that registers the path in the current process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Config`] if the HTTP client cannot be built.
    pub fn new(config: SetupConfig) -> Result<Self, SetupError> {
        let client =
            ReleaseClient::new(config.release_base_url.clone())?.show_progress(config.show_progress);

        Ok(Self {
            config,
            client,
            ci: ActionsEnvironment::from_env(),
        })
    }

    /// Replace the CI environment used to register the install directory.
    #[must_use]
    pub fn with_ci(mut self, ci: ActionsEnvironment) -> Self {
        self.ci = ci;
        self
    }

    /// The configuration this installer runs with.
    #[must_use]
    pub fn config(&self) -> &SetupConfig {
        &self.config
    }

    /// Run the pipeline.
    ///
    /// # Errors
    ///
    /// - [`SetupError::Resolution`] if `latest` cannot be resolved
    /// - [`SetupError::Download`] if the artifact cannot be fetched
    /// - [`SetupError::FileSystem`] if the directory, the binary or the
    ///   `GITHUB_PATH` file cannot be written
    pub async fn run(&self) -> Result<InstallOutcome, SetupError> {
        let version = self.client.resolve(&self.config.version).await?;

        let bin_dir = &self.config.bin_dir;
        ensure_dir(bin_dir).await?;

        let artifact =
            ArtifactReference::locate(self.client.base_url(), &version, self.config.platform);
        let binary_path = bin_dir.join(&artifact.binary_name);

        let start = Instant::now();
        let probed = probe(&binary_path);
        debug!("Probed {} in {:?}: {:?}", binary_path.display(), start.elapsed(), probed);

        let decision = UpdateDecision::decide(&probed, &version);

        if !decision.update_needed || self.config.check_only {
            if self.config.check_only && decision.update_needed {
                info!(
                    "Check only: {} would be updated to version {}",
                    binary_path.display(),
                    version
                );
            }
            return Ok(InstallOutcome {
                version,
                binary_path,
                decision,
                installed: false,
            });
        }

        self.install(&artifact, &binary_path).await?;
        self.ci.add_path(bin_dir)?;
        info!("{} updated to version {}.", binary_path.display(), version);

        Ok(InstallOutcome {
            version,
            binary_path,
            decision,
            installed: true,
        })
    }

    async fn install(
        &self,
        artifact: &ArtifactReference,
        binary_path: &Path,
    ) -> Result<(), SetupError> {
        let staging = tempfile::tempdir().map_err(|e| {
            SetupError::file_system("create temporary directory", &std::env::temp_dir(), e)
        })?;
        let downloaded = staging.path().join(&artifact.artifact_name);

        info!("Downloading {}", artifact.download_url);
        let start = Instant::now();
        let bytes = self.client.download(&artifact.download_url, &downloaded).await?;
        debug!("Downloaded {} bytes in {:?}", bytes, start.elapsed());

        replace_file(&downloaded, binary_path).await?;
        make_executable(binary_path).await
    }
}
