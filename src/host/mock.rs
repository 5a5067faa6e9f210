use std::collections::HashMap;
use std::sync::Mutex;

use super::{ReleaseHost, ReleaseRecord};
use crate::error::{ReleaseBranchError, Result};

#[derive(Default)]
struct MockHostState {
    releases: HashMap<String, ReleaseRecord>,
    next_id: u64,
    created: Vec<(String, String)>,
    updated: Vec<(u64, String)>,
    fail_all: bool,
}

/// In-memory release host recording every mutation for assertions.
#[derive(Default)]
pub struct MockReleaseHost {
    state: Mutex<MockHostState>,
}

impl MockReleaseHost {
    pub fn new() -> Self {
        MockReleaseHost {
            state: Mutex::new(MockHostState {
                next_id: 1,
                ..MockHostState::default()
            }),
        }
    }

    /// Seed an existing release for a tag
    pub fn add_release(&mut self, tag: impl Into<String>, target_branch: impl Into<String>) -> u64 {
        let state = self.state.get_mut().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        state.releases.insert(
            tag.into(),
            ReleaseRecord {
                id,
                target_branch: target_branch.into(),
            },
        );
        id
    }

    /// Make every call fail, for backend-failure paths
    pub fn fail_all(&mut self) {
        self.state.get_mut().unwrap().fail_all = true;
    }

    /// `(tag, target_branch)` pairs created through the trait
    pub fn created(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().created.clone()
    }

    /// `(id, target_branch)` pairs updated through the trait
    pub fn updated(&self) -> Vec<(u64, String)> {
        self.state.lock().unwrap().updated.clone()
    }

    /// Current record for a tag
    pub fn release_for(&self, tag: &str) -> Option<ReleaseRecord> {
        self.state.lock().unwrap().releases.get(tag).cloned()
    }
}

impl ReleaseHost for MockReleaseHost {
    fn find_release_by_tag(&self, tag: &str) -> Result<Option<ReleaseRecord>> {
        let state = self.state.lock().unwrap();
        if state.fail_all {
            return Err(ReleaseBranchError::release("Network error: mock failure"));
        }
        Ok(state.releases.get(tag).cloned())
    }

    fn create_release(&self, tag: &str, target_branch: &str) -> Result<ReleaseRecord> {
        let mut state = self.state.lock().unwrap();
        if state.fail_all {
            return Err(ReleaseBranchError::release("Network error: mock failure"));
        }

        let id = state.next_id;
        state.next_id += 1;

        let record = ReleaseRecord {
            id,
            target_branch: target_branch.to_string(),
        };
        state.releases.insert(tag.to_string(), record.clone());
        state
            .created
            .push((tag.to_string(), target_branch.to_string()));

        Ok(record)
    }

    fn update_release_target(&self, id: u64, target_branch: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_all {
            return Err(ReleaseBranchError::release("Network error: mock failure"));
        }

        for record in state.releases.values_mut() {
            if record.id == id {
                record.target_branch = target_branch.to_string();
            }
        }
        state.updated.push((id, target_branch.to_string()));

        Ok(())
    }
}
