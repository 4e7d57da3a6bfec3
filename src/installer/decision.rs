use semver::Version;
use std::cmp::Ordering;
use std::fmt;
use tracing::info;

use crate::installer::probe::ProbeOutcome;
use crate::version::coerce;

/// Why an [`UpdateDecision`] was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionReason {
    /// Nothing usable is installed at the target path.
    NoExistingBinary,
    /// The installed binary printed something that is not a version.
    UnparseableInstalledVersion,
    /// The installed version is the requested one.
    InstalledEqual,
    /// The installed version is newer; downgrades are never performed.
    InstalledNewer,
    /// The installed version is older than requested.
    InstalledOlder,
}

impl DecisionReason {
    /// Stable kebab-case tag, used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoExistingBinary => "no-existing-binary",
            Self::UnparseableInstalledVersion => "unparseable-installed-version",
            Self::InstalledEqual => "installed-equal",
            Self::InstalledNewer => "installed-newer",
            Self::InstalledOlder => "installed-older",
        }
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a download is needed, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDecision {
    /// `true` when the binary must be (re)installed.
    pub update_needed: bool,
    /// Justification for the decision.
    pub reason: DecisionReason,
    /// The installed version, when one could be read.
    pub installed: Option<Version>,
}

impl UpdateDecision {
    /// Decide whether the probed binary satisfies `target`.
    ///
    /// | probe                         | outcome                              |
    /// |-------------------------------|--------------------------------------|
    /// | absent or unreadable          | update, `no-existing-binary`         |
    /// | text without a version        | update, `unparseable-installed-version` |
    /// | installed == target           | skip, `installed-equal`              |
    /// | installed > target            | skip, `installed-newer`              |
    /// | installed < target            | update, `installed-older`            |
    ///
    /// Each branch logs one informational line.
    #[must_use]
    pub fn decide(probe: &ProbeOutcome, target: &Version) -> Self {
        let Some(text) = probe.version_text() else {
            info!(
                "New version needs to be downloaded as there is no existing version of the software."
            );
            return Self::update(DecisionReason::NoExistingBinary, None);
        };

        let Some(installed) = coerce(text) else {
            info!("New version needs to be downloaded as current software version is not readable.");
            return Self::update(DecisionReason::UnparseableInstalledVersion, None);
        };

        match installed.cmp_precedence(target) {
            Ordering::Equal => {
                info!(
                    "Version installed {} is the expected version {}, skip the download.",
                    installed, target
                );
                Self::skip(DecisionReason::InstalledEqual, installed)
            }
            Ordering::Greater => {
                info!(
                    "Version installed {} is greater than the expected version {}, skip the download.",
                    installed, target
                );
                Self::skip(DecisionReason::InstalledNewer, installed)
            }
            Ordering::Less => {
                info!(
                    "Version installed {} is lower than the expected version {}, download the new version ...",
                    installed, target
                );
                Self::update(DecisionReason::InstalledOlder, Some(installed))
            }
        }
    }

    fn update(reason: DecisionReason, installed: Option<Version>) -> Self {
        Self {
            update_needed: true,
            reason,
            installed,
        }
    }

    fn skip(reason: DecisionReason, installed: Version) -> Self {
        Self {
            update_needed: false,
            reason,
            installed: Some(installed),
        }
    }
}
