//! File system operations used while placing the binary.
//!
//! All functions are async (Tokio) and report failures as
//! [`SetupError::FileSystem`] carrying the operation and path.

use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::core::SetupError;

/// Ensure a directory exists, creating intermediate directories as needed.
///
/// Succeeds without changes when the directory is already present.
///
/// # Errors
///
/// Fails if the directory cannot be created or if `path` exists but is not
/// a directory.
pub async fn ensure_dir(path: &Path) -> Result<(), SetupError> {
    match fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(SetupError::file_system(
            "create directory",
            path,
            "path exists but is not a directory",
        )),
        Err(_) => {
            debug!("Creating directory {}", path.display());
            fs::create_dir_all(path)
                .await
                .map_err(|e| SetupError::file_system("create directory", path, e))
        }
    }
}

/// Move `source` onto `destination`, replacing any existing file.
///
/// A rename is tried first, which is atomic when both paths are on the same
/// file system. If that fails (typically across devices) the file is copied
/// over the destination and the source removed.
///
/// # Errors
///
/// Fails if neither the rename nor the copy succeeds.
pub async fn replace_file(source: &Path, destination: &Path) -> Result<(), SetupError> {
    match fs::rename(source, destination).await {
        Ok(()) => return Ok(()),
        Err(e) => debug!(
            "Rename {} -> {} failed ({}), falling back to copy",
            source.display(),
            destination.display(),
            e
        ),
    }

    // An existing binary may be read-only; remove it before copying over it.
    if let Err(e) = fs::remove_file(destination).await
        && e.kind() != ErrorKind::NotFound
    {
        return Err(SetupError::file_system("replace binary", destination, e));
    }

    fs::copy(source, destination)
        .await
        .map_err(|e| SetupError::file_system("move binary", destination, e))?;

    if let Err(e) = fs::remove_file(source).await {
        debug!("Failed to remove temporary file {}: {}", source.display(), e);
    }
    Ok(())
}

/// Mark `path` as executable (`0o755`). No-op on Windows.
///
/// # Errors
///
/// Fails if the permissions cannot be changed.
pub async fn make_executable(path: &Path) -> Result<(), SetupError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut permissions = fs::metadata(path)
            .await
            .map_err(|e| SetupError::file_system("read permissions of", path, e))?
            .permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(path, permissions)
            .await
            .map_err(|e| SetupError::file_system("mark executable", path, e))?;
    }

    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}
