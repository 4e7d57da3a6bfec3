//! Core types for setup-shfmt
//!
//! Holds the error taxonomy shared by every module and the helpers that turn
//! it into user-facing messages at the CLI boundary.
//!
//! - [`SetupError`] - closed enumeration of install failures
//! - [`ErrorContext`] - error plus details and suggestion for display
//! - [`user_friendly_error`] - exhaustive conversion used by `main`

pub mod error;

pub use error::{ErrorContext, SetupError, user_friendly_error};
