//! Triggering event for single-release mode.
//!
//! The event source is a JSON dump of the hosting service's workflow
//! context, read from a file. The payload is deserialized into typed
//! structs once at the boundary; a file that fails to parse is a dedicated
//! event error, not a panic deep inside the core.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ReleaseBranchError, Result};

/// Top level of the context dump file: `{ "context": { ... } }`
#[derive(Debug, Deserialize)]
struct ContextFile {
    context: GithubContext,
}

/// Workflow context for the triggering event.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubContext {
    #[serde(rename = "eventName")]
    pub event_name: String,

    /// Commit the event was raised for
    #[serde(default)]
    pub sha: String,

    pub payload: EventPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    /// Present for release events only
    pub release: Option<ReleaseEvent>,

    pub repository: RepositoryInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEvent {
    /// The published tag
    pub tag_name: String,

    /// Branch the release was published against
    pub target_commitish: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryInfo {
    pub default_branch: String,

    /// `owner/name`, used for hosted-release API calls
    #[serde(default)]
    pub full_name: String,
}

/// Load and validate a context dump from a file.
pub fn load_context<P: AsRef<Path>>(path: P) -> Result<GithubContext> {
    let raw = fs::read_to_string(path.as_ref())?;

    let file: ContextFile = serde_json::from_str(&raw).map_err(|e| {
        ReleaseBranchError::event(format!(
            "Cannot parse event file '{}': {}",
            path.as_ref().display(),
            e
        ))
    })?;

    Ok(file.context)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASE_EVENT: &str = r#"{
        "context": {
            "eventName": "release",
            "sha": "abc123",
            "payload": {
                "release": {
                    "tag_name": "1.2.0",
                    "target_commitish": "main"
                },
                "repository": {
                    "default_branch": "main",
                    "full_name": "acme/widgets"
                }
            }
        }
    }"#;

    #[test]
    fn test_parse_release_event() {
        let file: ContextFile = serde_json::from_str(RELEASE_EVENT).unwrap();
        let ctx = file.context;

        assert_eq!(ctx.event_name, "release");
        assert_eq!(ctx.sha, "abc123");

        let release = ctx.payload.release.unwrap();
        assert_eq!(release.tag_name, "1.2.0");
        assert_eq!(release.target_commitish, "main");
        assert_eq!(ctx.payload.repository.default_branch, "main");
        assert_eq!(ctx.payload.repository.full_name, "acme/widgets");
    }

    #[test]
    fn test_parse_non_release_event_without_release_payload() {
        let raw = r#"{
            "context": {
                "eventName": "push",
                "payload": {
                    "repository": { "default_branch": "main" }
                }
            }
        }"#;

        let file: ContextFile = serde_json::from_str(raw).unwrap();
        assert_eq!(file.context.event_name, "push");
        assert!(file.context.payload.release.is_none());
        assert_eq!(file.context.sha, "");
    }

    #[test]
    fn test_load_context_missing_file() {
        let err = load_context("/nonexistent/event.json").unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }
}
