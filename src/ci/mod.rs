//! Integration with the CI host.
//!
//! Only GitHub Actions is recognised. Outside of it these functions degrade
//! to plain process behaviour: the install directory is still prepended to
//! the current `PATH`, and failures are only reported through the normal
//! error output.
//!
//! GitHub Actions conventions used here:
//!
//! - `GITHUB_ACTIONS=true` marks a workflow run
//! - `GITHUB_PATH` names a file; each line appended to it is added to `PATH`
//!   for all later steps of the job
//! - `::error::<message>` on stdout marks the step as failed with an
//!   annotation

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::SetupError;

/// Whether the process runs inside a GitHub Actions workflow.
#[must_use]
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true")
}

/// Where a directory gets registered so later steps can find the tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionsEnvironment {
    /// File that later workflow steps read extra `PATH` entries from.
    github_path: Option<PathBuf>,
    /// Also prepend to this process's `PATH`.
    update_process_path: bool,
}

impl ActionsEnvironment {
    /// Read the environment of the current process.
    #[must_use]
    pub fn from_env() -> Self {
        let github_path = std::env::var_os("GITHUB_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            github_path,
            update_process_path: true,
        }
    }

    /// An environment that only writes to `github_path` and leaves the
    /// process `PATH` alone.
    #[must_use]
    pub fn with_path_file(github_path: Option<PathBuf>) -> Self {
        Self {
            github_path,
            update_process_path: false,
        }
    }

    /// The `GITHUB_PATH` file in use, if any.
    #[must_use]
    pub fn github_path(&self) -> Option<&Path> {
        self.github_path.as_deref()
    }

    /// Put `dir` on the executable search path of this process and of the
    /// following workflow steps.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::FileSystem`] if the `GITHUB_PATH` file cannot
    /// be appended to or `dir` cannot be joined into `PATH`.
    pub fn add_path(&self, dir: &Path) -> Result<(), SetupError> {
        if let Some(path_file) = &self.github_path {
            debug!("Appending {} to {}", dir.display(), path_file.display());
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path_file)
                .map_err(|e| SetupError::file_system("open", path_file, e))?;
            writeln!(file, "{}", dir.display())
                .map_err(|e| SetupError::file_system("append to", path_file, e))?;
        }

        if self.update_process_path {
            prepend_to_process_path(dir)?;
        }

        Ok(())
    }
}

fn prepend_to_process_path(dir: &Path) -> Result<(), SetupError> {
    let current = std::env::var_os("PATH").unwrap_or_default();
    let entries = std::iter::once(dir.to_path_buf()).chain(std::env::split_paths(&current));
    let joined = std::env::join_paths(entries)
        .map_err(|e| SetupError::file_system("add to PATH", dir, e))?;

    // SAFETY: the installer runs on a single-threaded runtime and no other
    // thread reads the environment while the path is updated.
    unsafe {
        std::env::set_var("PATH", joined);
    }
    Ok(())
}

/// Escape a workflow command message (`%`, `\r`, `\n`).
#[must_use]
pub fn escape_data(message: &str) -> String {
    message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Format the failure annotation for `message`.
#[must_use]
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Report a failed run to the CI host.
///
/// On GitHub Actions this prints an `::error::` workflow command; elsewhere
/// it does nothing.
pub fn set_failed(message: &str) {
    if is_github_actions() {
        println!("{}", error_command(message));
    }
}
