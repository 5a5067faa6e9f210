pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod git;
pub mod host;
pub mod index;
pub mod outcome;
pub mod plan;
pub mod reconcile;
pub mod ui;

pub use error::{ReleaseBranchError, Result};
