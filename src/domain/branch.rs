//! Release-branch naming convention.
//!
//! A release branch is named with a fixed prefix followed by the decimal
//! major version with no leading zeros: `release/v0`, `release/v12`.

use regex::Regex;
use std::sync::OnceLock;

/// Prefix shared by all release branches
pub const RELEASE_BRANCH_PREFIX: &str = "release/v";

fn release_branch_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^release/v(?P<major>0|[1-9][0-9]*)$").expect("valid branch pattern")
    })
}

/// Format the release branch name for a major version.
pub fn release_branch_name(major: u64) -> String {
    format!("{}{}", RELEASE_BRANCH_PREFIX, major)
}

/// Extract the major version from a release branch name, or `None` if the
/// name does not follow the convention.
pub fn major_from_branch(name: &str) -> Option<u64> {
    release_branch_pattern()
        .captures(name)
        .and_then(|caps| caps.name("major"))
        .and_then(|m| m.as_str().parse().ok())
}

/// Whether a branch name follows the release-branch convention.
pub fn is_release_branch(name: &str) -> bool {
    release_branch_pattern().is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_branch_name() {
        assert_eq!(release_branch_name(0), "release/v0");
        assert_eq!(release_branch_name(12), "release/v12");
    }

    #[test]
    fn test_major_from_branch() {
        assert_eq!(major_from_branch("release/v1"), Some(1));
        assert_eq!(major_from_branch("release/v42"), Some(42));
        assert_eq!(major_from_branch("release/v0"), Some(0));
    }

    #[test]
    fn test_major_from_branch_rejects_leading_zeros() {
        assert_eq!(major_from_branch("release/v01"), None);
        assert_eq!(major_from_branch("release/v00"), None);
    }

    #[test]
    fn test_major_from_branch_rejects_other_names() {
        assert_eq!(major_from_branch("main"), None);
        assert_eq!(major_from_branch("release/1"), None);
        assert_eq!(major_from_branch("release/v1.2"), None);
        assert_eq!(major_from_branch("release/v1-hotfix"), None);
    }

    #[test]
    fn test_is_release_branch() {
        assert!(is_release_branch("release/v3"));
        assert!(!is_release_branch("develop"));
        assert!(!is_release_branch("release/vX"));
    }
}
