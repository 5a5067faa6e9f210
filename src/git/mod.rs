//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the version-control
//! backend, allowing for multiple implementations including real Git
//! repositories and mock implementations for testing.
//!
//! The primary abstraction is the [Repository] trait, which defines the
//! operations branch reconciliation needs. The concrete implementations:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! Plan computation and materialization depend only on the trait, never on
//! a concrete backend, so the whole pipeline runs deterministically against
//! the mock in unit tests.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Version-control backend consumed by the reconciliation core.
///
/// All implementors must be `Send + Sync` to allow safe sharing across
/// threads. Methods return [crate::error::Result]; implementations map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::ReleaseBranchError] variants.
pub trait Repository: Send + Sync {
    /// All tag names in the repository.
    ///
    /// Sort contract: no particular order is guaranteed. The git2
    /// implementation yields tags in lexicographic order, which is why the
    /// tag index selects anchors by SemVer precedence instead of trusting
    /// listing order.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Whether a branch exists, locally or as a remote-tracking ref.
    ///
    /// A branch that was pushed from elsewhere but never checked out
    /// locally still counts as existing; reconciliation must not recreate
    /// it.
    fn branch_exists(&self, name: &str) -> Result<bool>;

    /// The commit a tag points at, peeling annotated tags.
    fn commit_for_tag(&self, tag: &str) -> Result<Oid>;

    /// Check out a branch, tag, or commit.
    ///
    /// Checking out a tag or commit leaves HEAD detached; checking out a
    /// local branch attaches HEAD to it.
    fn checkout(&self, refname: &str) -> Result<()>;

    /// Create a local branch at the given commit.
    ///
    /// Fails if the branch already exists. Never force-moves an existing
    /// branch.
    fn create_branch(&self, name: &str, oid: Oid) -> Result<()>;

    /// Push a local branch to the configured remote.
    fn push_branch(&self, name: &str) -> Result<()>;

    /// Name of the default branch (what HEAD points at).
    fn default_branch(&self) -> Result<String>;
}
