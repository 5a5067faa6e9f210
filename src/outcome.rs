//! Invocation outcome reporting.
//!
//! Every entry point returns an [Outcome]; errors never escape to the
//! caller. The reason codes form a closed enum so callers can match
//! exhaustively instead of comparing ad-hoc strings.

use std::collections::BTreeMap;
use std::fmt;

/// Why an invocation ended the way it did.
///
/// No-op conditions (`MajorTagIs0`, `NoChanges`,
/// `PublishedReleaseToReleaseBranch`) are successes distinguishable only by
/// reason; callers must not treat them as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Triggering event was not a release event
    InvalidEventType,
    /// Release tag failed SemVer validation
    TagIsNotSemver,
    /// Release tag has major version 0; no branch needed
    MajorTagIs0,
    /// Release was published directly to its matching release branch
    PublishedReleaseToReleaseBranch,
    /// Release tag's major does not match the target release branch
    ReleaseTagAndReleaseBranchMismatch,
    /// Target branch is neither the default branch nor a release branch
    TargetBranchNotDefaultOrRelease,
    /// Reconciliation created one or more branches
    CreatedBranches,
    /// Repository state already satisfied; nothing to create
    NoChanges,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reason::InvalidEventType => "INVALID_EVENT_TYPE",
            Reason::TagIsNotSemver => "TAG_IS_NOT_SEMVER",
            Reason::MajorTagIs0 => "MAJOR_TAG_IS_0",
            Reason::PublishedReleaseToReleaseBranch => "PUBLISHED_RELEASE_TO_RELEASE_BRANCH",
            Reason::ReleaseTagAndReleaseBranchMismatch => {
                "RELEASE_TAG_AND_RELEASE_BRANCH_DOESNT_MATCH"
            }
            Reason::TargetBranchNotDefaultOrRelease => {
                "TARGET_BRANCH_SHOULD_BE_EITHER_DEFAULT_OR_RELEASE_BRANCH"
            }
            Reason::CreatedBranches => "CREATED_BRANCHES",
            Reason::NoChanges => "NO_CHANGES",
        };
        f.write_str(name)
    }
}

/// Aggregated result of one invocation. Immutable after construction.
///
/// `reason` is `None` only for backend failures (git command failure,
/// network failure), where `message` carries the underlying error text.
/// `data` maps each created branch name to its anchor tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub succeeded: bool,
    pub reason: Option<Reason>,
    pub message: String,
    pub data: BTreeMap<String, String>,
}

impl Outcome {
    /// A success with a specific reason and no branch data
    pub fn success(reason: Reason, message: impl Into<String>) -> Self {
        Outcome {
            succeeded: true,
            reason: Some(reason),
            message: message.into(),
            data: BTreeMap::new(),
        }
    }

    /// A failure with an optional reason
    pub fn failure(reason: Option<Reason>, message: impl Into<String>) -> Self {
        Outcome {
            succeeded: false,
            reason,
            message: message.into(),
            data: BTreeMap::new(),
        }
    }

    /// Success: nothing needed creating
    pub fn no_changes() -> Self {
        Outcome::success(Reason::NoChanges, "No release branches need creating")
    }

    /// Success: branches were created, mapped to their anchor tags
    pub fn created_branches(data: BTreeMap<String, String>, message: impl Into<String>) -> Self {
        Outcome {
            succeeded: true,
            reason: Some(Reason::CreatedBranches),
            message: message.into(),
            data,
        }
    }

    /// Attach branch data (used when a failure still created branches)
    pub fn with_data(mut self, data: BTreeMap<String, String>) -> Self {
        self.data = data;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_display_matches_wire_names() {
        assert_eq!(Reason::InvalidEventType.to_string(), "INVALID_EVENT_TYPE");
        assert_eq!(Reason::TagIsNotSemver.to_string(), "TAG_IS_NOT_SEMVER");
        assert_eq!(Reason::MajorTagIs0.to_string(), "MAJOR_TAG_IS_0");
        assert_eq!(Reason::CreatedBranches.to_string(), "CREATED_BRANCHES");
        assert_eq!(Reason::NoChanges.to_string(), "NO_CHANGES");
        assert_eq!(
            Reason::ReleaseTagAndReleaseBranchMismatch.to_string(),
            "RELEASE_TAG_AND_RELEASE_BRANCH_DOESNT_MATCH"
        );
    }

    #[test]
    fn test_no_changes_is_success() {
        let outcome = Outcome::no_changes();
        assert!(outcome.succeeded);
        assert_eq!(outcome.reason, Some(Reason::NoChanges));
        assert!(outcome.data.is_empty());
    }

    #[test]
    fn test_created_branches_carries_data() {
        let mut data = BTreeMap::new();
        data.insert("release/v1".to_string(), "1.1.0".to_string());
        let outcome = Outcome::created_branches(data, "Created 1 release branch");

        assert!(outcome.succeeded);
        assert_eq!(outcome.reason, Some(Reason::CreatedBranches));
        assert_eq!(outcome.data.get("release/v1").unwrap(), "1.1.0");
    }

    #[test]
    fn test_backend_failure_has_no_reason() {
        let outcome = Outcome::failure(None, "Push failed: connection reset");
        assert!(!outcome.succeeded);
        assert_eq!(outcome.reason, None);
        assert!(outcome.message.contains("connection reset"));
    }
}
