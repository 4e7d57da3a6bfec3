use regex::Regex;
use semver::Version;
use std::sync::OnceLock;

/// First run of up to three dot separated numbers not glued to other digits.
const COERCE_PATTERN: &str = r"(?:^|[^\d])(\d{1,16})(?:\.(\d{1,16}))?(?:\.(\d{1,16}))?(?:$|[^\d])";

fn coerce_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COERCE_PATTERN).expect("coerce pattern is a valid regex"))
}

/// Extract a semantic version from loosely formatted text.
///
/// Finds the first `MAJOR[.MINOR[.PATCH]]` group in `text`, ignoring any
/// surrounding noise, and fills missing components with zero. Pre-release
/// and build suffixes are dropped. Returns `None` when the text contains no
/// digits that can form a version.
///
/// # Examples
///
/// ```rust,no_run
/// use setup_shfmt::version::coerce;
///
/// assert_eq!(coerce("v3.7.0\n").unwrap().to_string(), "3.7.0");
/// assert_eq!(coerce("shfmt version 1.2.3 (go1.20)").unwrap().to_string(), "1.2.3");
/// assert_eq!(coerce("v4").unwrap().to_string(), "4.0.0");
/// assert!(coerce("garbage-text").is_none());
/// ```
#[must_use]
pub fn coerce(text: &str) -> Option<Version> {
    let captures = coerce_regex().captures(text)?;

    let part = |index: usize| -> Option<u64> {
        match captures.get(index) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    Some(Version::new(part(1)?, part(2)?, part(3)?))
}
