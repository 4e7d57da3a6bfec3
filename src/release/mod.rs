//! shfmt release index access.
//!
//! Releases are published at `https://github.com/mvdan/sh` with one plain
//! binary per platform named `shfmt_v<version>_<os>_amd64` (`.exe` on
//! Windows). This module knows that naming convention and talks to the
//! release index:
//!
//! - [`artifact`] - pure mapping from (version, platform) to download URL
//!   and installed file name
//! - [`client`] - the `latest` redirect lookup and the artifact download
//!
//! ```text
//! GET <base>/releases/latest                          -> 302 Location: .../v3.7.0
//! GET <base>/releases/download/v3.7.0/shfmt_v3.7.0_linux_amd64 -> binary
//! ```

pub mod artifact;
pub mod client;

pub use artifact::{ARCH, ArtifactReference, Platform, binary_name};
pub use client::{ReleaseClient, version_from_location};

/// Release index of the upstream project.
pub const DEFAULT_RELEASE_URL: &str = "https://github.com/mvdan/sh";

/// Base name of the installed tool.
pub const TOOL_NAME: &str = "shfmt";
