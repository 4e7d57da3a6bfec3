use semver::Version;
use std::fmt;
use std::str::FromStr;

use crate::core::SetupError;

/// Sentinel input that asks for the newest published release.
pub const LATEST: &str = "latest";

/// The version a run should end up with, as requested by the user.
///
/// Parsing accepts exactly `latest` or a semantic version. A single leading
/// `v` (the release tag spelling) is tolerated and dropped, so `v3.7.0` and
/// `3.7.0` resolve to the same version and produce the same download URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersionSpecifier {
    /// Resolve the newest release through the release index redirect.
    #[default]
    Latest,
    /// Install this exact version.
    Exact(Version),
}

impl VersionSpecifier {
    /// Whether resolving this specifier requires a network lookup.
    #[must_use]
    pub const fn is_latest(&self) -> bool {
        matches!(self, Self::Latest)
    }
}

impl FromStr for VersionSpecifier {
    type Err = SetupError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed == LATEST {
            return Ok(Self::Latest);
        }

        let candidate = trimmed.strip_prefix('v').unwrap_or(trimmed);
        Version::parse(candidate).map(Self::Exact).map_err(|_| SetupError::InvalidSpecifier {
            specifier: input.to_string(),
        })
    }
}

impl fmt::Display for VersionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str(LATEST),
            Self::Exact(version) => write!(f, "{version}"),
        }
    }
}
