//! setup-shfmt - install the shfmt shell formatter in CI
//!
//! Downloads a release binary of [shfmt](https://github.com/mvdan/sh) into a
//! directory and puts that directory on the search path. A run is idempotent:
//! when the binary already in place reports the requested version, or a newer
//! one, nothing is downloaded.
//!
//! # Architecture Overview
//!
//! One run is a short sequential pipeline:
//!
//! ```text
//! VersionSpecifier ──resolve──▶ Version ──locate──▶ ArtifactReference
//!                                  │
//!          probe(bin_dir/shfmt) ──▶ UpdateDecision ──▶ download, place, chmod, add_path
//! ```
//!
//! - `latest` is resolved through the `releases/latest` redirect of the
//!   release index; exact versions never touch the network
//! - the installed binary is asked for `--version` and its output coerced
//!   into a semantic version
//! - downgrades are never performed
//!
//! # Core Modules
//!
//! ## Pipeline
//! - [`installer`] - orchestration, probing and the update decision
//! - [`release`] - artifact naming and the release index client
//! - [`version`] - version specifiers and lenient version extraction
//!
//! ## Surfaces
//! - [`cli`] - command-line flags, configuration layering and logging setup
//! - [`ci`] - GitHub Actions `GITHUB_PATH` and `::error::` integration
//! - [`config`] - [`SetupConfig`](config::SetupConfig) and the TOML config file
//!
//! ## Supporting modules
//! - [`core`] - error types and user-facing error rendering
//! - [`utils`] - file system and platform helpers
//!
//! # Example
//!
//! ```bash
//! # Newest release into ~/bin
//! setup-shfmt
//!
//! # Pinned release into a custom directory
//! setup-shfmt --shfmt-version 3.7.0 --shfmt-bin-dir /opt/tools/bin
//!
//! # Only report whether an install would happen
//! setup-shfmt --check --verbose
//! ```

// Pipeline
pub mod installer;
pub mod release;
pub mod version;

// Surfaces
pub mod ci;
pub mod cli;
pub mod config;

// Supporting modules
pub mod core;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
