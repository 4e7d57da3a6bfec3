use semver::Version;
use std::fmt;

use crate::release::TOOL_NAME;

/// CPU architecture embedded in every artifact name. Only amd64 builds are
/// fetched, whatever the host architecture is.
pub const ARCH: &str = "amd64";

/// Operating system family used in release artifact names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Any host that is neither Windows nor macOS.
    Linux,
    /// macOS.
    Darwin,
    /// Windows; binaries carry an `.exe` suffix.
    Windows,
}

impl Platform {
    /// The platform of the running host.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a Rust OS name (`std::env::consts::OS`) onto a release platform.
    ///
    /// Unknown systems fall back to [`Platform::Linux`].
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::Darwin,
            _ => Self::Linux,
        }
    }

    /// Name of the platform as it appears in artifact names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
        }
    }

    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// `.exe` on Windows, empty elsewhere.
    #[must_use]
    pub const fn exe_suffix(self) -> &'static str {
        if self.is_windows() {
            ".exe"
        } else {
            ""
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File name of the installed binary on `platform`.
#[must_use]
pub fn binary_name(platform: Platform) -> String {
    format!("{TOOL_NAME}{}", platform.exe_suffix())
}

/// Where to download a release from and what to call it once installed.
///
/// Built by [`ArtifactReference::locate`], which is a pure function of the
/// release base URL, the version and the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReference {
    /// Full URL of the release asset.
    pub download_url: String,
    /// Asset file name, e.g. `shfmt_v3.7.0_linux_amd64`.
    pub artifact_name: String,
    /// Name of the installed binary, e.g. `shfmt` or `shfmt.exe`.
    pub binary_name: String,
}

impl ArtifactReference {
    /// Compute the artifact for `version` on `platform`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use semver::Version;
    /// use setup_shfmt::release::{ArtifactReference, Platform};
    ///
    /// let artifact = ArtifactReference::locate(
    ///     "https://github.com/mvdan/sh",
    ///     &Version::new(3, 7, 0),
    ///     Platform::Windows,
    /// );
    /// assert_eq!(
    ///     artifact.download_url,
    ///     "https://github.com/mvdan/sh/releases/download/v3.7.0/shfmt_v3.7.0_windows_amd64.exe"
    /// );
    /// assert_eq!(artifact.binary_name, "shfmt.exe");
    /// ```
    #[must_use]
    pub fn locate(base_url: &str, version: &Version, platform: Platform) -> Self {
        let artifact_name =
            format!("{TOOL_NAME}_v{version}_{platform}_{ARCH}{}", platform.exe_suffix());
        let download_url = format!(
            "{}/releases/download/v{version}/{artifact_name}",
            base_url.trim_end_matches('/')
        );

        Self {
            download_url,
            artifact_name,
            binary_name: binary_name(platform),
        }
    }
}
