//! SemVer classification for tag strings.
//!
//! Tags flow in from the repository as plain strings, most of which are
//! expected to be version tags but some of which are not (deploy markers,
//! old naming schemes). Parsing returns `None` for anything that fails the
//! full SemVer grammar so callers can filter tag collections without
//! per-item error handling.

use semver::Version;

/// Parse a tag string against the full SemVer grammar.
///
/// Accepts `MAJOR.MINOR.PATCH` with optional `-prerelease` and
/// `+buildmetadata` suffixes. Partial forms ("1", "1.2") and components
/// with insignificant leading zeros are rejected, as is a leading `v`
/// prefix: release tags in this system are bare version strings.
///
/// Returns `None` rather than an error so that scanning a whole tag list
/// stays allocation- and branch-free at the call site.
pub fn parse(tag: &str) -> Option<Version> {
    Version::parse(tag).ok()
}

/// Major component of a valid SemVer tag, or `None` if the tag does not
/// parse.
pub fn major_of(tag: &str) -> Option<u64> {
    parse(tag).map(|v| v.major)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_version() {
        let v = parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_parse_prerelease_and_build() {
        let v = parse("1.0.0-rc.1+build.5").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.pre.as_str(), "rc.1");
        assert_eq!(v.build.as_str(), "build.5");
    }

    #[test]
    fn test_parse_rejects_partial_forms() {
        assert!(parse("1").is_none());
        assert!(parse("1.2").is_none());
        assert!(parse("1.2.3.4").is_none());
    }

    #[test]
    fn test_parse_rejects_leading_zeros() {
        assert!(parse("01.0.0").is_none());
        assert!(parse("1.02.0").is_none());
        assert!(parse("1.0.00").is_none());
        // The literal zero component is fine
        assert!(parse("0.1.0").is_some());
    }

    #[test]
    fn test_parse_rejects_v_prefix() {
        assert!(parse("v1.2.3").is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("").is_none());
        assert!(parse("1.2.a").is_none());
        assert!(parse("latest").is_none());
        assert!(parse("release/v1").is_none());
    }

    #[test]
    fn test_major_of() {
        assert_eq!(major_of("12.0.1"), Some(12));
        assert_eq!(major_of("0.4.0"), Some(0));
        assert_eq!(major_of("not-a-version"), None);
    }

    #[test]
    fn test_prerelease_precedence_below_release() {
        // Anchor selection relies on this: 1.2.0 must beat 1.2.0-rc.1
        let rc = parse("1.2.0-rc.1").unwrap();
        let rel = parse("1.2.0").unwrap();
        assert!(rc < rel);
    }
}
