use thiserror::Error;

/// Unified error type for release-branches operations
#[derive(Error, Debug)]
pub enum ReleaseBranchError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Release API operation failed: {0}")]
    Release(String),

    #[error("Event error: {0}")]
    Event(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-branches
pub type Result<T> = std::result::Result<T, ReleaseBranchError>;

impl ReleaseBranchError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseBranchError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseBranchError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseBranchError::Tag(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        ReleaseBranchError::Branch(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        ReleaseBranchError::Remote(msg.into())
    }

    /// Create a release-API error with context
    pub fn release(msg: impl Into<String>) -> Self {
        ReleaseBranchError::Release(msg.into())
    }

    /// Create an event error with context
    pub fn event(msg: impl Into<String>) -> Self {
        ReleaseBranchError::Event(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseBranchError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseBranchError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(ReleaseBranchError::version("test")
            .to_string()
            .contains("Version"));
        assert!(ReleaseBranchError::tag("test").to_string().contains("Tag"));
        assert!(ReleaseBranchError::branch("test")
            .to_string()
            .contains("Branch"));
        assert!(ReleaseBranchError::release("test")
            .to_string()
            .contains("Release"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseBranchError::config("x"), "Configuration error"),
            (ReleaseBranchError::version("x"), "Version parsing error"),
            (ReleaseBranchError::tag("x"), "Tag error"),
            (ReleaseBranchError::remote("x"), "Remote operation failed"),
            (
                ReleaseBranchError::release("x"),
                "Release API operation failed",
            ),
            (ReleaseBranchError::event("x"), "Event error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
