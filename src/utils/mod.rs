//! Cross-platform utilities
//!
//! - [`fs`] - directory creation, binary replacement and permission changes
//! - [`platform`] - home directory lookup and path expansion

pub mod fs;
pub mod platform;

pub use fs::{ensure_dir, make_executable, replace_file};
pub use platform::{default_bin_dir, get_home_dir, resolve_path};
