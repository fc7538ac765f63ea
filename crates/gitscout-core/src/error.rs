use thiserror::Error;

/// Top-level error type for the gitscout system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for
/// GitscoutError` so that the `?` operator works seamlessly across crate
/// boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GitscoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GitHub error: {0}")]
    Github(String),

    #[error("Language model error: {0}")]
    Llm(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for gitscout operations.
pub type Result<T> = std::result::Result<T, GitscoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitscoutError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_error_display_all_variants() {
        let cases: Vec<(GitscoutError, &str)> = vec![
            (
                GitscoutError::Config("bad key".to_string()),
                "Configuration error: bad key",
            ),
            (
                GitscoutError::Github("GitHub API error: 404".to_string()),
                "GitHub error: GitHub API error: 404",
            ),
            (
                GitscoutError::Llm("no candidates".to_string()),
                "Language model error: no candidates",
            ),
            (
                GitscoutError::Chat("message cannot be empty".to_string()),
                "Chat error: message cannot be empty",
            ),
            (
                GitscoutError::Api("bind failed".to_string()),
                "API error: bind failed",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GitscoutError = io_err.into();
        assert!(matches!(err, GitscoutError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(GitscoutError::Config("fail".to_string()))
        }

        assert_eq!(returns_ok().unwrap(), 42);
        assert!(returns_err().is_err());
    }

    #[test]
    fn test_error_debug_impl() {
        let err = GitscoutError::Github("test debug".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Github"));
        assert!(debug_str.contains("test debug"));
    }
}
