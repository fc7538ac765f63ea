//! Error types for the query router.

use gitscout_core::GitscoutError;
use gitscout_llm::LlmError;

/// Errors from the query router.
///
/// GitHub upstream failures never appear here — the router renders them as
/// natural-language text inside the response. Only input validation and
/// language-model failures surface as errors.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl From<ChatError> for GitscoutError {
    fn from(err: ChatError) -> Self {
        GitscoutError::Chat(err.to_string())
    }
}
