//! Command-line interface.
//!
//! `setup-shfmt` has no subcommands. Every flag can also be given through an
//! environment variable so the binary can run as a GitHub Action step, where
//! inputs arrive as `INPUT_<NAME>` variables:
//!
//! | flag              | environment              | default                       |
//! |-------------------|--------------------------|-------------------------------|
//! | `--shfmt-version` | `INPUT_SHFMT-VERSION`    | `latest`                      |
//! | `--shfmt-bin-dir` | `INPUT_SHFMT-BIN-DIR`    | `~/bin`                       |
//! | `--release-url`   | `SETUP_SHFMT_RELEASE_URL`| `https://github.com/mvdan/sh` |
//!
//! Empty values count as unset, because GitHub Actions passes every declared
//! input even when the workflow leaves it blank.

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigFile, SetupConfig};
use crate::core::SetupError;
use crate::installer::{InstallOutcome, Installer};
use crate::release::DEFAULT_RELEASE_URL;
use crate::utils::platform::{default_bin_dir, resolve_path};
use crate::version::{LATEST, VersionSpecifier};

/// Install the shfmt shell formatter.
#[derive(Parser, Debug)]
#[command(
    name = "setup-shfmt",
    about = "Install the shfmt shell formatter and put it on the PATH",
    version,
    long_about = "Downloads a shfmt release binary into a directory, skipping the download when \
                  an equal or newer version is already installed there, and registers the \
                  directory on the PATH of the current GitHub Actions job."
)]
pub struct Cli {
    /// Version to install: `latest` or a semantic version such as `3.7.0`.
    #[arg(long, env = "INPUT_SHFMT-VERSION", value_name = "VERSION")]
    shfmt_version: Option<String>,

    /// Directory to install the binary into.
    ///
    /// `~` and environment variables are expanded. Defaults to `~/bin`.
    #[arg(long, env = "INPUT_SHFMT-BIN-DIR", value_name = "DIR")]
    shfmt_bin_dir: Option<String>,

    /// Base URL of the release index, for mirrors.
    #[arg(long, env = "SETUP_SHFMT_RELEASE_URL", value_name = "URL")]
    release_url: Option<String>,

    /// TOML file with an `[install]` table providing defaults.
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Report whether an install is needed without downloading anything.
    #[arg(long)]
    check: bool,

    /// Disable the download progress bar.
    #[arg(long)]
    no_progress: bool,

    /// Enable debug output. Equivalent to `RUST_LOG=debug`.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Log filter directive derived from `--verbose` and `--quiet`.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Combine defaults, the optional config file and the flags into a
    /// [`SetupConfig`].
    ///
    /// # Errors
    ///
    /// - [`SetupError::Config`] if the config file cannot be loaded, a path
    ///   cannot be expanded or the home directory is unknown
    /// - [`SetupError::InvalidSpecifier`] if the version is malformed
    pub async fn build_config(&self) -> Result<SetupConfig, SetupError> {
        let file = match non_empty(&self.config) {
            Some(path) => ConfigFile::load_from(&resolve_path(path)?).await?,
            None => ConfigFile::default(),
        };
        let install = file.install;

        let version_text = non_empty(&self.shfmt_version)
            .or_else(|| non_empty(&install.version))
            .unwrap_or(LATEST);
        let version: VersionSpecifier = version_text.parse()?;

        let bin_dir: PathBuf = match non_empty(&self.shfmt_bin_dir)
            .or_else(|| non_empty(&install.bin_dir))
        {
            Some(dir) => resolve_path(dir)?,
            None => default_bin_dir()?,
        };

        let release_url = non_empty(&self.release_url)
            .or_else(|| non_empty(&install.release_url))
            .unwrap_or(DEFAULT_RELEASE_URL);

        debug!(
            "Configuration: version={}, bin_dir={}, release_url={}",
            version,
            bin_dir.display(),
            release_url
        );

        Ok(SetupConfig::new(version, bin_dir)
            .with_release_url(release_url)
            .check_only(self.check)
            .show_progress(!self.no_progress))
    }

    /// Build the configuration and run the installer.
    pub async fn execute(self) -> Result<InstallOutcome, SetupError> {
        let config = self.build_config().await?;
        Installer::new(config)?.run().await
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `level` when it is set.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
