//! Error handling for setup-shfmt
//!
//! Every failure the installer can surface is a [`SetupError`]. The enum is
//! closed: the CLI boundary converts it into an [`ErrorContext`] with a
//! single exhaustive `match` that attaches details and a suggestion.
//!
//! Failing to query an already installed binary is not an error. The prober
//! reports it as [`ProbeOutcome::Unreadable`] and the decision engine
//! schedules a reinstall.
//!
//! [`ProbeOutcome::Unreadable`]: crate::installer::probe::ProbeOutcome::Unreadable
//!
//! # Examples
//!
//! ```rust,no_run
//! use setup_shfmt::core::{SetupError, user_friendly_error};
//!
//! let error = SetupError::InvalidSpecifier {
//!     specifier: "three".to_string(),
//! };
//! user_friendly_error(error).display();
//! ```

use colored::Colorize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// The error taxonomy of an install run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The `latest` redirect lookup failed or returned something that is not
    /// a release tag.
    #[error("Unable to get latest release ({reason})")]
    Resolution {
        /// What was wrong with the lookup response
        reason: String,
    },

    /// The version input is neither `latest` nor a semantic version.
    #[error("Version format provided {specifier} is invalid.")]
    InvalidSpecifier {
        /// The raw input as given by the user
        specifier: String,
    },

    /// Fetching the release artifact failed.
    #[error("Failed to download {url}: {reason}")]
    Download {
        /// The artifact URL that was requested
        url: String,
        /// Transport error or unexpected HTTP status
        reason: String,
    },

    /// A directory, move or permission operation failed.
    #[error("Failed to {operation} '{path}': {reason}")]
    FileSystem {
        /// Short verb phrase such as "create directory"
        operation: String,
        /// The path the operation was applied to
        path: String,
        /// Underlying I/O error text
        reason: String,
    },

    /// The configuration file or environment could not be used.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description of the problem
        message: String,
    },
}

impl SetupError {
    /// Build a [`SetupError::FileSystem`] from an operation, path and cause.
    pub fn file_system(
        operation: impl Into<String>,
        path: &Path,
        reason: impl fmt::Display,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`SetupError::Download`] for `url`.
    pub fn download(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::Download {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`SetupError::Resolution`].
    pub fn resolution(reason: impl Into<String>) -> Self {
        Self::Resolution {
            reason: reason.into(),
        }
    }
}

/// A [`SetupError`] decorated with details and a suggestion for the user.
///
/// Rendered to stderr by [`ErrorContext::display`] with the error in red,
/// details in yellow and the suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SetupError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    #[must_use]
    pub const fn new(error: SetupError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert a [`SetupError`] into a user-facing [`ErrorContext`].
///
/// The match is exhaustive over the taxonomy; adding a variant to
/// [`SetupError`] forces a decision about how it is explained here.
#[must_use]
pub fn user_friendly_error(error: SetupError) -> ErrorContext {
    match &error {
        SetupError::Resolution { .. } => ErrorContext::new(error)
            .with_details(
                "The latest release is discovered by following the redirect of \
                 <release-url>/releases/latest, which must answer 302 with a Location \
                 ending in a v<version> tag",
            )
            .with_suggestion(
                "Pin an explicit version with --shfmt-version (for example 3.7.0) or check \
                 that the release URL is reachable from this agent",
            ),

        SetupError::InvalidSpecifier { .. } => ErrorContext::new(error)
            .with_details("The version must be 'latest' or a semantic version such as 3.7.0")
            .with_suggestion("Use --shfmt-version latest or a full MAJOR.MINOR.PATCH version"),

        SetupError::Download { .. } => ErrorContext::new(error)
            .with_details(
                "Release artifacts are published as shfmt_v<version>_<os>_amd64; the \
                 requested version may not exist for this platform",
            )
            .with_suggestion(
                "Check that the version exists on the releases page and that the agent has \
                 network access",
            ),

        SetupError::FileSystem { operation, .. } => {
            let suggestion = if operation.contains("permission") || operation.contains("mark") {
                "Check that the install directory is writable and not mounted noexec"
            } else {
                "Check that the install directory path is valid and writable, or choose \
                 another one with --shfmt-bin-dir"
            };
            ErrorContext::new(error)
                .with_details("Nothing was rolled back; the next run re-checks the binary")
                .with_suggestion(suggestion)
        }

        SetupError::Config { .. } => ErrorContext::new(error).with_suggestion(
            "Check the file passed with --config and that HOME (or USERPROFILE) is set",
        ),
    }
}
