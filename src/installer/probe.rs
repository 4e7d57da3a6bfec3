use std::fs::Metadata;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Flag passed to the installed binary to make it print its version.
pub const VERSION_FLAG: &str = "--version";

/// What was found at the expected binary path.
///
/// Probing never fails: a missing file and a binary that cannot be run are
/// both ordinary outcomes, and the decision engine schedules an install for
/// either of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The binary ran and printed this text on stdout.
    Present(String),
    /// No regular, executable file at the path.
    Absent,
    /// An executable file exists but running it failed.
    Unreadable,
}

impl ProbeOutcome {
    /// The raw version text, if the binary could be queried.
    #[must_use]
    pub fn version_text(&self) -> Option<&str> {
        match self {
            Self::Present(text) => Some(text),
            Self::Absent | Self::Unreadable => None,
        }
    }
}

/// Inspect `path` and, if it is an executable file, run it with
/// [`VERSION_FLAG`] and capture its standard output verbatim.
///
/// The binary is run synchronously. A spawn failure or a non-zero exit
/// status yields [`ProbeOutcome::Unreadable`].
#[must_use]
pub fn probe(path: &Path) -> ProbeOutcome {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!("No binary at {}: {}", path.display(), e);
            return ProbeOutcome::Absent;
        }
    };

    if !metadata.is_file() || !is_executable(&metadata) {
        debug!("{} is not an executable file", path.display());
        return ProbeOutcome::Absent;
    }

    match Command::new(path).arg(VERSION_FLAG).output() {
        Ok(output) if output.status.success() => {
            ProbeOutcome::Present(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            debug!("{} {} exited with {}", path.display(), VERSION_FLAG, output.status);
            ProbeOutcome::Unreadable
        }
        Err(e) => {
            debug!("Failed to run {} {}: {}", path.display(), VERSION_FLAG, e);
            ProbeOutcome::Unreadable
        }
    }
}

#[cfg(unix)]
fn is_executable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & 0o100 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &Metadata) -> bool {
    true
}
