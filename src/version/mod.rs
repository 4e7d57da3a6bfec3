//! Version handling for shfmt releases.
//!
//! Two concerns live here:
//!
//! - [`specifier`] parses the user's version input into a
//!   [`VersionSpecifier`]: either the `latest` sentinel or an exact
//!   semantic version.
//! - [`coerce`] pulls a semantic version out of loosely formatted text, such
//!   as the output of `shfmt --version`.
//!
//! All comparisons use [`semver::Version`] precedence: major, minor, patch,
//! with pre-releases ordered before the matching release.
//!
//! # Examples
//!
//! ```rust,no_run
//! use setup_shfmt::version::{VersionSpecifier, coerce};
//!
//! # fn example() -> anyhow::Result<()> {
//! let spec: VersionSpecifier = "3.7.0".parse()?;
//! assert!(!spec.is_latest());
//!
//! let installed = coerce("shfmt version v3.6.0 (go1.20)").expect("has a version");
//! assert_eq!(installed.to_string(), "3.6.0");
//! # Ok(())
//! # }
//! ```

pub mod coerce;
pub mod specifier;

pub use coerce::coerce;
pub use specifier::{LATEST, VersionSpecifier};
