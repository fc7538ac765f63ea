//! Generative-language-model access for gitscout.
//!
//! The rest of the system depends only on the [`TextGenerator`] trait —
//! a single "generate text from prompt" capability. [`GeminiClient`] is the
//! production implementation over the Gemini `generateContent` REST API.

pub mod error;
pub mod gemini;

use async_trait::async_trait;

pub use error::LlmError;
pub use gemini::{GeminiClient, DEFAULT_API_BASE};

/// A black-box text completion capability.
///
/// No retry or backoff semantics: one call, one result.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce a completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
