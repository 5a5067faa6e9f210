use crate::error::{ReleaseBranchError, Result};
use git2::{BranchType, ObjectType, Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    remote: String,
}

impl Git2Repository {
    /// Open or discover a git repository, using `origin` as the remote
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_remote(path, "origin")
    }

    /// Open or discover a git repository with an explicit remote name
    pub fn open_with_remote<P: AsRef<Path>>(path: P, remote: impl Into<String>) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository {
            repo,
            remote: remote.into(),
        })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo, remote: impl Into<String>) -> Self {
        Git2Repository {
            repo,
            remote: remote.into(),
        }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn branch_exists(&self, name: &str) -> Result<bool> {
        match self.repo.find_branch(name, BranchType::Local) {
            Ok(_) => return Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        // Not local; a remote-tracking ref still counts as existing
        let remote_name = format!("{}/{}", self.remote, name);
        match self.repo.find_branch(&remote_name, BranchType::Remote) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn commit_for_tag(&self, tag: &str) -> Result<Oid> {
        let reference_name = format!("refs/tags/{}", tag);

        let reference = self.repo.find_reference(&reference_name).map_err(|e| {
            ReleaseBranchError::tag(format!("Cannot find tag '{}': {}", tag, e))
        })?;

        let commit = reference
            .peel_to_commit()
            .map_err(|e| ReleaseBranchError::tag(format!("Cannot peel tag '{}': {}", tag, e)))?;

        Ok(commit.id())
    }

    fn checkout(&self, refname: &str) -> Result<()> {
        let object = self.repo.revparse_single(refname).map_err(|e| {
            ReleaseBranchError::branch(format!("Cannot resolve '{}': {}", refname, e))
        })?;

        let commit = object
            .peel(ObjectType::Commit)
            .map_err(|e| ReleaseBranchError::branch(format!("Cannot peel '{}': {}", refname, e)))?;

        self.repo.checkout_tree(&commit, None)?;

        match self.repo.find_branch(refname, BranchType::Local) {
            Ok(_) => self.repo.set_head(&format!("refs/heads/{}", refname))?,
            Err(_) => self.repo.set_head_detached(commit.id())?,
        }

        Ok(())
    }

    fn create_branch(&self, name: &str, oid: Oid) -> Result<()> {
        if self.branch_exists(name)? {
            return Err(ReleaseBranchError::branch(format!(
                "Branch '{}' already exists",
                name
            )));
        }

        let commit = self
            .repo
            .find_commit(oid)
            .map_err(|e| ReleaseBranchError::branch(format!("Cannot find commit {}: {}", oid, e)))?;

        self.repo
            .branch(name, &commit, false)
            .map_err(|e| ReleaseBranchError::branch(format!("Cannot create branch: {}", e)))?;

        Ok(())
    }

    fn push_branch(&self, name: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(&self.remote)
            .map_err(|e| ReleaseBranchError::remote(format!("Cannot find remote: {}", e)))?;

        let refspec = format!("refs/heads/{}:refs/heads/{}", name, name);

        remote
            .push(&[refspec.as_str()], None)
            .map_err(|e| ReleaseBranchError::remote(format!("Push failed: {}", e)))?;

        Ok(())
    }

    fn default_branch(&self) -> Result<String> {
        let head = self.repo.head()?;

        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| ReleaseBranchError::branch("HEAD has no branch name"))
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
