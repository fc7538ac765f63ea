//! Error types for language-model access.

use gitscout_core::GitscoutError;
use thiserror::Error;

/// Errors from the language-model client.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("language model API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("language model request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("language model returned no candidates")]
    EmptyResponse,
}

impl From<LlmError> for GitscoutError {
    fn from(err: LlmError) -> Self {
        GitscoutError::Llm(err.to_string())
    }
}
