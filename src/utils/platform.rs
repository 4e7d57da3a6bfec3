//! Platform helpers: home directory lookup and path expansion.

use std::path::PathBuf;

use crate::core::SetupError;

/// Directory under the home directory used when no install directory is
/// configured.
pub const DEFAULT_BIN_SUBDIR: &str = "bin";

/// Whether the crate was built for Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// The current user's home directory.
///
/// # Errors
///
/// Returns [`SetupError::Config`] with a platform specific hint when the
/// home directory cannot be determined.
pub fn get_home_dir() -> Result<PathBuf, SetupError> {
    dirs::home_dir().ok_or_else(|| {
        let platform_help = if is_windows() {
            "check that the USERPROFILE environment variable is set"
        } else {
            "check that the HOME environment variable is set"
        };
        SetupError::Config {
            message: format!("Could not determine home directory; {platform_help}"),
        }
    })
}

/// Default install directory, `~/bin`.
pub fn default_bin_dir() -> Result<PathBuf, SetupError> {
    Ok(get_home_dir()?.join(DEFAULT_BIN_SUBDIR))
}

/// Expand `~` and environment variables (`$VAR`, `${VAR}`) in a path.
///
/// # Errors
///
/// Returns [`SetupError::Config`] if a referenced variable is not set.
///
/// # Examples
///
/// ```rust,no_run
/// use setup_shfmt::utils::platform::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let dir = resolve_path("~/bin")?;
/// assert!(dir.is_absolute());
/// # Ok(())
/// # }
/// ```
pub fn resolve_path(path: &str) -> Result<PathBuf, SetupError> {
    let expanded = shellexpand::full(path).map_err(|e| SetupError::Config {
        message: format!("Failed to expand path '{path}': {e}"),
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}
