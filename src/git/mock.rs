use crate::error::{ReleaseBranchError, Result};
use crate::git::Repository;
use git2::Oid;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct MockState {
    tags: Vec<(String, Oid)>,
    local_branches: HashMap<String, Oid>,
    remote_branches: HashMap<String, Oid>,
    default_branch: String,
    checkouts: Vec<String>,
    pushed: Vec<String>,
    created: Vec<String>,
    fail_push_on: Option<String>,
}

/// Mock repository for testing without actual git operations.
///
/// State lives behind a `Mutex` so the `&self` trait methods can record
/// mutations (created branches, checkouts, pushes) for assertions.
pub struct MockRepository {
    state: Mutex<MockState>,
}

impl MockRepository {
    /// Create a new mock repository with the given default branch
    pub fn new(default_branch: impl Into<String>) -> Self {
        let default_branch = default_branch.into();
        let mut state = MockState {
            default_branch: default_branch.clone(),
            ..MockState::default()
        };
        // The default branch always exists and points somewhere
        state.local_branches.insert(default_branch, oid(0xaa));

        MockRepository {
            state: Mutex::new(state),
        }
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.state.get_mut().unwrap().tags.push((name.into(), oid));
    }

    /// Add a local branch at an OID
    pub fn add_local_branch(&mut self, name: impl Into<String>, oid: Oid) {
        self.state
            .get_mut()
            .unwrap()
            .local_branches
            .insert(name.into(), oid);
    }

    /// Add a remote-tracking branch (exists on the remote, not locally)
    pub fn add_remote_branch(&mut self, name: impl Into<String>, oid: Oid) {
        self.state
            .get_mut()
            .unwrap()
            .remote_branches
            .insert(name.into(), oid);
    }

    /// Make `push_branch` fail for one branch name
    pub fn fail_push_on(&mut self, name: impl Into<String>) {
        self.state.get_mut().unwrap().fail_push_on = Some(name.into());
    }

    /// Branches created through the trait, in creation order
    pub fn created_branches(&self) -> Vec<String> {
        self.state.lock().unwrap().created.clone()
    }

    /// Every checkout performed, in order
    pub fn checkout_log(&self) -> Vec<String> {
        self.state.lock().unwrap().checkouts.clone()
    }

    /// Branches pushed to the remote, in order
    pub fn pushed_branches(&self) -> Vec<String> {
        self.state.lock().unwrap().pushed.clone()
    }

    /// Head commit of a local branch, if it exists
    pub fn branch_head(&self, name: &str) -> Option<Oid> {
        self.state.lock().unwrap().local_branches.get(name).copied()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new("main")
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let state = self.state.lock().unwrap();
        Ok(state.tags.iter().map(|(name, _)| name.clone()).collect())
    }

    fn branch_exists(&self, name: &str) -> Result<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.local_branches.contains_key(name) || state.remote_branches.contains_key(name))
    }

    fn commit_for_tag(&self, tag: &str) -> Result<Oid> {
        let state = self.state.lock().unwrap();
        state
            .tags
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, oid)| *oid)
            .ok_or_else(|| ReleaseBranchError::tag(format!("Cannot find tag '{}'", tag)))
    }

    fn checkout(&self, refname: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        let known = state.local_branches.contains_key(refname)
            || state.tags.iter().any(|(name, _)| name == refname);
        if !known {
            return Err(ReleaseBranchError::branch(format!(
                "Cannot resolve '{}'",
                refname
            )));
        }

        state.checkouts.push(refname.to_string());
        Ok(())
    }

    fn create_branch(&self, name: &str, oid: Oid) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        if state.local_branches.contains_key(name) || state.remote_branches.contains_key(name) {
            return Err(ReleaseBranchError::branch(format!(
                "Branch '{}' already exists",
                name
            )));
        }

        state.local_branches.insert(name.to_string(), oid);
        state.created.push(name.to_string());
        Ok(())
    }

    fn push_branch(&self, name: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        if state.fail_push_on.as_deref() == Some(name) {
            return Err(ReleaseBranchError::remote(format!(
                "Push failed for '{}'",
                name
            )));
        }

        let oid = state.local_branches.get(name).copied().ok_or_else(|| {
            ReleaseBranchError::remote(format!("Cannot push unknown branch '{}'", name))
        })?;

        state.remote_branches.insert(name.to_string(), oid);
        state.pushed.push(name.to_string());
        Ok(())
    }

    fn default_branch(&self) -> Result<String> {
        Ok(self.state.lock().unwrap().default_branch.clone())
    }
}

/// Deterministic OID for tests: 20 bytes of `n`
pub fn oid(n: u8) -> Oid {
    Oid::from_bytes(&[n; 20]).expect("20 bytes is a valid oid")
}
