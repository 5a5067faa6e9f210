//! Branch plan computation.
//!
//! Decides, per major present in the tag index, whether a `release/v<major>`
//! branch must be created and at which commit. The planner only reads from
//! the backend (branch existence, tag commits); it never mutates the
//! working tree.

use git2::Oid;

use crate::domain::release_branch_name;
use crate::error::Result;
use crate::git::Repository;
use crate::index::TagIndex;

/// One branch to create: the major, its anchor tag, and the tag's commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub major: u64,
    pub anchor_tag: String,
    pub anchor_commit: Oid,
}

impl PlanEntry {
    /// Name of the branch this entry creates
    pub fn branch_name(&self) -> String {
        release_branch_name(self.major)
    }
}

/// Ordered sequence of branches to create this run.
///
/// Entries are in ascending major order so creation is deterministic and
/// idempotent across repeated runs. Computed fresh per invocation; never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct ReconciliationPlan {
    pub entries: Vec<PlanEntry>,
}

impl ReconciliationPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Computes the reconciliation plan from a tag index.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner {
    /// Majors strictly below this floor are never given a branch
    min_major: Option<u64>,
}

impl Planner {
    pub fn new(min_major: Option<u64>) -> Self {
        Planner { min_major }
    }

    /// Compute the plan for the current repository state.
    ///
    /// Skip rules, per major `m` with anchor tag `t`:
    /// 1. `release/v<m>` already exists (locally or remote-tracking) — skip.
    /// 2. `m` is the highest major present — skip; the highest major keeps
    ///    living on the default branch.
    /// 3. `m` is below the configured floor — skip.
    ///
    /// Everything else becomes a plan entry anchored at `commit_for_tag(t)`.
    pub fn compute<R: Repository>(&self, repo: &R, index: &TagIndex) -> Result<ReconciliationPlan> {
        let mut entries = Vec::new();

        let Some(highest) = index.highest_major() else {
            return Ok(ReconciliationPlan::default());
        };

        for (major, anchor) in index.iter() {
            if major == highest {
                continue;
            }

            if let Some(floor) = self.min_major {
                if major < floor {
                    continue;
                }
            }

            if repo.branch_exists(&release_branch_name(major))? {
                continue;
            }

            let anchor_commit = repo.commit_for_tag(&anchor.name)?;

            entries.push(PlanEntry {
                major,
                anchor_tag: anchor.name.clone(),
                anchor_commit,
            });
        }

        Ok(ReconciliationPlan { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::{oid, MockRepository};

    fn repo_with_tags(tags: &[(&str, u8)]) -> MockRepository {
        let mut repo = MockRepository::new("main");
        for (tag, n) in tags {
            repo.add_tag(*tag, oid(*n));
        }
        repo
    }

    fn plan_for(repo: &MockRepository, min_major: Option<u64>) -> ReconciliationPlan {
        let index = TagIndex::build(&repo.list_tags().unwrap());
        Planner::new(min_major).compute(repo, &index).unwrap()
    }

    #[test]
    fn test_plan_excludes_highest_major() {
        let repo = repo_with_tags(&[("1.0.0", 1), ("1.1.0", 2), ("2.0.0", 3)]);
        let plan = plan_for(&repo, None);

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.entries[0].major, 1);
        assert_eq!(plan.entries[0].anchor_tag, "1.1.0");
        assert_eq!(plan.entries[0].anchor_commit, oid(2));
        assert_eq!(plan.entries[0].branch_name(), "release/v1");
    }

    #[test]
    fn test_plan_is_ascending_by_major() {
        let repo = repo_with_tags(&[("3.1.0", 5), ("1.1.0", 2), ("4.0.1", 7), ("2.0.0", 3)]);
        let plan = plan_for(&repo, None);

        let majors: Vec<u64> = plan.entries.iter().map(|e| e.major).collect();
        assert_eq!(majors, vec![1, 2, 3]);
    }

    #[test]
    fn test_plan_skips_existing_local_branch() {
        let mut repo = repo_with_tags(&[("1.0.0", 1), ("2.0.0", 2), ("3.0.0", 3)]);
        repo.add_local_branch("release/v1", oid(1));
        let plan = plan_for(&repo, None);

        let majors: Vec<u64> = plan.entries.iter().map(|e| e.major).collect();
        assert_eq!(majors, vec![2]);
    }

    #[test]
    fn test_plan_skips_existing_remote_only_branch() {
        let mut repo = repo_with_tags(&[("1.0.0", 1), ("2.0.0", 2), ("3.0.0", 3)]);
        repo.add_remote_branch("release/v2", oid(2));
        let plan = plan_for(&repo, None);

        let majors: Vec<u64> = plan.entries.iter().map(|e| e.major).collect();
        assert_eq!(majors, vec![1]);
    }

    #[test]
    fn test_plan_major_zero_is_a_regular_major() {
        let repo = repo_with_tags(&[("0.1.0", 1), ("0.2.0", 2), ("1.0.0", 3)]);
        let plan = plan_for(&repo, None);

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.entries[0].major, 0);
        assert_eq!(plan.entries[0].anchor_tag, "0.2.0");
    }

    #[test]
    fn test_plan_major_zero_alone_is_highest() {
        let repo = repo_with_tags(&[("0.1.0", 1), ("0.1.1", 2)]);
        let plan = plan_for(&repo, None);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_min_major_floor() {
        let repo = repo_with_tags(&[("1.0.0", 1), ("2.0.0", 2), ("3.0.0", 3), ("4.0.0", 4)]);
        let plan = plan_for(&repo, Some(3));

        let majors: Vec<u64> = plan.entries.iter().map(|e| e.major).collect();
        assert_eq!(majors, vec![3]);
    }

    #[test]
    fn test_plan_empty_index() {
        let repo = MockRepository::new("main");
        let plan = plan_for(&repo, None);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_is_deterministic() {
        let repo = repo_with_tags(&[("1.0.0", 1), ("2.3.0", 2), ("2.0.0", 3), ("5.0.0", 4)]);
        let first = plan_for(&repo, None);
        let second = plan_for(&repo, None);
        assert_eq!(first.entries, second.entries);
    }
}
