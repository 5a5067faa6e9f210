//! Domain types shared across the reconciliation pipeline.

pub mod branch;
pub mod version;

pub use branch::{is_release_branch, major_from_branch, release_branch_name};
