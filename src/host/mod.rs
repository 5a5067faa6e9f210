//! Hosted-release backend abstraction.
//!
//! When a newly created release branch is pushed, the hosted release record
//! for its anchor tag should point at that branch so downstream release-note
//! tooling attributes the tag to the branch that now owns it. This module
//! defines the small interface the materializer needs, with a real GitHub
//! implementation and an in-memory mock.

pub mod github;
pub mod mock;

pub use github::GithubReleases;
pub use mock::MockReleaseHost;

use crate::error::Result;

/// A hosted release record associated with a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub id: u64,
    pub target_branch: String,
}

/// Hosted-release backend consumed when push is enabled.
pub trait ReleaseHost: Send + Sync {
    /// Look up the release record for a tag; `None` if no release exists
    fn find_release_by_tag(&self, tag: &str) -> Result<Option<ReleaseRecord>>;

    /// Create a release for a tag pointing at a target branch
    fn create_release(&self, tag: &str, target_branch: &str) -> Result<ReleaseRecord>;

    /// Re-point an existing release at a different target branch
    fn update_release_target(&self, id: u64, target_branch: &str) -> Result<()>;
}
