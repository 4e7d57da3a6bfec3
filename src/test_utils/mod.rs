//! Test utilities shared by unit and integration tests.
//!
//! Available under `cfg(test)` and with the `test-utils` feature, which the
//! crate enables for its own dev-dependency so integration tests under
//! `tests/` can use these helpers.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG` if it is set; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Shell script body that behaves like `shfmt --version`.
#[must_use]
pub fn fake_shfmt_script(version_output: &str) -> String {
    format!("#!/bin/sh\necho {version_output}\n")
}

/// Write an executable stand-in for shfmt into `dir` that prints
/// `version_output` when run.
///
/// Only meaningful on Unix, where the file is a shell script with mode
/// `0o755`.
pub fn write_fake_shfmt(dir: &Path, name: &str, version_output: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, fake_shfmt_script(version_output))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    }

    Ok(path)
}
