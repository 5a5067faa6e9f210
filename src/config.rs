use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseBranchError, Result};

/// Represents the complete configuration for release-branches.
///
/// Everything has a sensible default so the tool runs with no config file
/// at all; the file only overrides behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote branches are pushed to and checked against
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Push created branches to the remote
    #[serde(default)]
    pub push: bool,

    /// Optional floor: majors strictly below this never get a branch
    #[serde(default)]
    pub min_major: Option<u64>,

    /// `owner/name` of the hosted repository, for release-record sync
    #[serde(default)]
    pub repository: Option<String>,

    /// Sync hosted release records after a successful push
    #[serde(default)]
    pub release_sync: bool,
}

fn default_remote() -> String {
    "origin".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            push: false,
            min_major: None,
            repository: None,
            release_sync: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasebranches.toml` in current directory
/// 3. `.releasebranches.toml` in user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is an error; a missing
/// file is not.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasebranches.toml").exists() {
        fs::read_to_string("./releasebranches.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasebranches.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseBranchError::config(format!("Invalid config file: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.remote, "origin");
        assert!(!config.push);
        assert_eq!(config.min_major, None);
        assert_eq!(config.repository, None);
        assert!(!config.release_sync);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str("push = true\nmin_major = 2\n").unwrap();
        assert!(config.push);
        assert_eq!(config.min_major, Some(2));
        // Unspecified fields fall back to defaults
        assert_eq!(config.remote, "origin");
    }

    #[test]
    fn test_parse_full_config() {
        let raw = r#"
            remote = "upstream"
            push = true
            min_major = 1
            repository = "acme/widgets"
            release_sync = true
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.repository.as_deref(), Some("acme/widgets"));
        assert!(config.release_sync);
    }
}
