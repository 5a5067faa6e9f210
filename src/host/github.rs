//! GitHub releases implementation of [ReleaseHost] using the REST API.

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use super::{ReleaseHost, ReleaseRecord};
use crate::error::{ReleaseBranchError, Result};

/// Default GitHub API base URL.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Pinned REST API version header value.
const API_VERSION: &str = "2022-11-28";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "release-branches";

/// GitHub releases client.
pub struct GithubReleases {
    client: Client,
    token: String,
    repo_full_name: String,
    api_base: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GithubReleases {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubReleases")
            .field("repo_full_name", &self.repo_full_name)
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct ReleaseResponse {
    id: u64,
    target_commitish: String,
}

impl GithubReleases {
    /// Create a client for a repository's releases.
    ///
    /// # Arguments
    /// * `token` - Personal access token or workflow token
    /// * `repo_full_name` - `owner/name` of the repository
    pub fn new(token: impl Into<String>, repo_full_name: impl Into<String>) -> Self {
        GithubReleases {
            client: Client::new(),
            token: token.into(),
            repo_full_name: repo_full_name.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Create a client against a custom API base URL (GitHub Enterprise)
    pub fn with_api_base(
        token: impl Into<String>,
        repo_full_name: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        GithubReleases {
            client: Client::new(),
            token: token.into(),
            repo_full_name: repo_full_name.into(),
            api_base: api_base.into(),
        }
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(API_VERSION),
        );
        let auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| ReleaseBranchError::release(format!("Invalid token header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth);
        Ok(headers)
    }

    fn parse_record(&self, response: Response, context: &str) -> Result<ReleaseRecord> {
        let release: ReleaseResponse = response.json().map_err(|e| {
            ReleaseBranchError::release(format!("Cannot decode {} response: {}", context, e))
        })?;

        Ok(ReleaseRecord {
            id: release.id,
            target_branch: release.target_commitish,
        })
    }

    fn status_error(&self, context: &str, status: StatusCode) -> ReleaseBranchError {
        ReleaseBranchError::release(format!("Failed to {}. Status: {}", context, status))
    }
}

impl ReleaseHost for GithubReleases {
    fn find_release_by_tag(&self, tag: &str) -> Result<Option<ReleaseRecord>> {
        let url = format!(
            "{}/repos/{}/releases/tags/{}",
            self.api_base, self.repo_full_name, tag
        );

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .map_err(|e| ReleaseBranchError::release(format!("Network error: {}", e)))?;

        match response.status() {
            StatusCode::OK => Ok(Some(self.parse_record(response, "release lookup")?)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(self.status_error("find the release by tag", status)),
        }
    }

    fn create_release(&self, tag: &str, target_branch: &str) -> Result<ReleaseRecord> {
        let url = format!("{}/repos/{}/releases", self.api_base, self.repo_full_name);

        let payload = json!({
            "tag_name": tag,
            "name": format!("v{}", tag),
            "body": format!(
                "This is auto-generated release by Release Branch Manager for version {}",
                tag
            ),
            "target_commitish": target_branch,
        });

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(&payload)
            .send()
            .map_err(|e| ReleaseBranchError::release(format!("Network error: {}", e)))?;

        match response.status() {
            StatusCode::CREATED => self.parse_record(response, "release creation"),
            status => Err(self.status_error("create the release", status)),
        }
    }

    fn update_release_target(&self, id: u64, target_branch: &str) -> Result<()> {
        let url = format!(
            "{}/repos/{}/releases/{}",
            self.api_base, self.repo_full_name, id
        );

        let payload = json!({ "target_commitish": target_branch });

        let response = self
            .client
            .patch(&url)
            .headers(self.headers()?)
            .json(&payload)
            .send()
            .map_err(|e| ReleaseBranchError::release(format!("Network error: {}", e)))?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(self.status_error("update the target branch", status)),
        }
    }
}
