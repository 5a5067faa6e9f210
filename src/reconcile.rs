//! Reconciliation orchestration and branch materialization.
//!
//! Two entry points, both returning an [Outcome] on every path:
//!
//! - [run_reconciliation]: scan all tags and create every missing major
//!   branch except the highest. The primary mode.
//! - [run_release_event]: react to one published release event. A thin
//!   validation pre-filter (event type, SemVer tag, target branch) in front
//!   of full reconciliation.
//!
//! Materialization is strictly sequential: each plan entry mutates shared
//! repository state (the current checkout, the remote), so entries run one
//! at a time, in ascending major order, and the working tree is restored to
//! the default branch before returning, success or failure.

use std::collections::BTreeMap;

use crate::domain::{major_from_branch, version};
use crate::error::Result;
use crate::event::GithubContext;
use crate::git::Repository;
use crate::host::ReleaseHost;
use crate::index::TagIndex;
use crate::outcome::{Outcome, Reason};
use crate::plan::{Planner, ReconciliationPlan};

/// Behavior switches for one reconciliation run.
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
    /// Push created branches to the remote
    pub push: bool,
    /// Skip majors strictly below this floor
    pub min_major: Option<u64>,
    /// Compute and report the plan without mutating anything
    pub dry_run: bool,
}

/// Full-reconciliation mode: create every missing major branch.
///
/// Errors never escape; backend failures become a non-succeeded Outcome
/// with `reason = None` and the underlying error text as message. Partial
/// completion is reported as a failure whose `data` still lists the
/// branches that were created; re-running after the cause is fixed safely
/// skips them.
pub fn run_reconciliation<R: Repository>(
    repo: &R,
    host: Option<&dyn ReleaseHost>,
    options: &ReconcileOptions,
) -> Outcome {
    let plan = match compute_plan(repo, options) {
        Ok(plan) => plan,
        Err(e) => return Outcome::failure(None, e.to_string()),
    };

    if plan.is_empty() {
        return Outcome::no_changes();
    }

    if options.dry_run {
        let data: BTreeMap<String, String> = plan
            .entries
            .iter()
            .map(|entry| (entry.branch_name(), entry.anchor_tag.clone()))
            .collect();
        return Outcome::created_branches(
            data,
            format!("Dry run: would create {} release branch(es)", plan.len()),
        );
    }

    let default_branch = match repo.default_branch() {
        Ok(branch) => branch,
        Err(e) => return Outcome::failure(None, e.to_string()),
    };

    let mut created = BTreeMap::new();
    let result = materialize(repo, host, &plan, &default_branch, options, &mut created);

    // Postcondition: the working tree ends on the default branch whether or
    // not materialization succeeded. Callers depend on this.
    let restored = repo.checkout(&default_branch);

    match result.and(restored) {
        Ok(()) => {
            let message = format!("Created {} release branch(es)", created.len());
            Outcome::created_branches(created, message)
        }
        Err(e) => Outcome::failure(None, e.to_string()).with_data(created),
    }
}

/// Single-release mode: validate the triggering event, then reconcile.
///
/// Validation failures and no-op conditions carry a specific [Reason];
/// only once the event passes (a SemVer release of major > 0 published on
/// the default branch) does full reconciliation run.
pub fn run_release_event<R: Repository>(
    repo: &R,
    host: Option<&dyn ReleaseHost>,
    context: &GithubContext,
    options: &ReconcileOptions,
) -> Outcome {
    if context.event_name != "release" {
        return Outcome::failure(
            Some(Reason::InvalidEventType),
            format!(
                "Unsupported event '{}'. Only supported event is 'release'",
                context.event_name
            ),
        );
    }

    let Some(release) = &context.payload.release else {
        return Outcome::failure(None, "Release event is missing its release payload");
    };

    let tag = &release.tag_name;
    let Some(parsed) = version::parse(tag) else {
        return Outcome::failure(
            Some(Reason::TagIsNotSemver),
            format!("Release tag '{}' is not in SemVer format", tag),
        );
    };

    if parsed.major == 0 {
        return Outcome::success(
            Reason::MajorTagIs0,
            "Major version of release tag is '0'. No release branch will be created. All good.",
        );
    }

    let target_branch = &release.target_commitish;
    let default_branch = &context.payload.repository.default_branch;

    if target_branch == default_branch {
        return run_reconciliation(repo, host, options);
    }

    match major_from_branch(target_branch) {
        Some(branch_major) if branch_major == parsed.major => Outcome::success(
            Reason::PublishedReleaseToReleaseBranch,
            format!(
                "Published release {} for release branch '{}'. All good.",
                tag, target_branch
            ),
        ),
        Some(_) => Outcome::failure(
            Some(Reason::ReleaseTagAndReleaseBranchMismatch),
            format!(
                "Major version in release tag '{}' does not match release branch version '{}'",
                tag, target_branch
            ),
        ),
        None => Outcome::failure(
            Some(Reason::TargetBranchNotDefaultOrRelease),
            format!(
                "Target branch '{}' is not a default or release branch",
                target_branch
            ),
        ),
    }
}

fn compute_plan<R: Repository>(repo: &R, options: &ReconcileOptions) -> Result<ReconciliationPlan> {
    let tags = repo.list_tags()?;
    let index = TagIndex::build(&tags);
    Planner::new(options.min_major).compute(repo, &index)
}

fn materialize<R: Repository>(
    repo: &R,
    host: Option<&dyn ReleaseHost>,
    plan: &ReconciliationPlan,
    default_branch: &str,
    options: &ReconcileOptions,
    created: &mut BTreeMap<String, String>,
) -> Result<()> {
    for entry in &plan.entries {
        let branch = entry.branch_name();

        // Known working-tree state before branching off
        repo.checkout(default_branch)?;
        repo.checkout(&entry.anchor_tag)?;
        repo.create_branch(&branch, entry.anchor_commit)?;

        if options.push {
            repo.push_branch(&branch)?;
            if let Some(host) = host {
                sync_release(host, &entry.anchor_tag, &branch)?;
            }
        }

        created.insert(branch, entry.anchor_tag.clone());
    }

    Ok(())
}

/// Point the hosted release record for `tag` at `branch`.
///
/// Absent record: create one. Present with a different target: update it.
/// Present and already correct: no-op.
fn sync_release(host: &dyn ReleaseHost, tag: &str, branch: &str) -> Result<()> {
    match host.find_release_by_tag(tag)? {
        None => {
            host.create_release(tag, branch)?;
        }
        Some(record) if record.target_branch != branch => {
            host.update_release_target(record.id, branch)?;
        }
        Some(_) => {}
    }

    Ok(())
}
