//! Configuration for an install run.
//!
//! A run is driven by one [`SetupConfig`] value built by the CLI and handed
//! to [`Installer::new`](crate::installer::Installer::new). Nothing is read
//! from process-wide state after that point.
//!
//! Settings are layered, later layers winning:
//!
//! 1. built-in defaults (`latest`, `~/bin`, the upstream release index)
//! 2. an optional TOML file passed with `--config`
//! 3. command line flags and their environment variables
//!
//! # File Format
//!
//! ```toml
//! [install]
//! version = "3.7.0"
//! bin-dir = "~/.local/bin"
//! release-url = "https://github.com/mvdan/sh"
//! ```

mod file;

pub use file::{ConfigFile, InstallSection};

use std::path::PathBuf;

use crate::release::{DEFAULT_RELEASE_URL, Platform};
use crate::version::VersionSpecifier;

/// Everything an [`Installer`](crate::installer::Installer) needs to know.
///
/// # Examples
///
/// ```rust,no_run
/// use setup_shfmt::config::SetupConfig;
/// use std::path::PathBuf;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = SetupConfig::new("3.7.0".parse()?, PathBuf::from("/opt/bin"))
///     .check_only(true)
///     .show_progress(false);
/// assert_eq!(config.release_base_url, "https://github.com/mvdan/sh");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    /// Requested version.
    pub version: VersionSpecifier,
    /// Directory the binary is installed into.
    pub bin_dir: PathBuf,
    /// Release index base URL.
    pub release_base_url: String,
    /// Platform used for artifact naming.
    pub platform: Platform,
    /// Report the decision without downloading anything.
    pub check_only: bool,
    /// Show a progress bar while downloading.
    pub show_progress: bool,
}

impl SetupConfig {
    /// Configuration for installing `version` into `bin_dir` with defaults
    /// for everything else.
    #[must_use]
    pub fn new(version: VersionSpecifier, bin_dir: PathBuf) -> Self {
        Self {
            version,
            bin_dir,
            release_base_url: DEFAULT_RELEASE_URL.to_string(),
            platform: Platform::current(),
            check_only: false,
            show_progress: true,
        }
    }

    #[must_use]
    pub fn with_release_url(mut self, url: impl Into<String>) -> Self {
        self.release_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub fn check_only(mut self, check_only: bool) -> Self {
        self.check_only = check_only;
        self
    }

    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}
