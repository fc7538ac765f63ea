//! Shared kernel for gitscout: configuration, errors, and common types.

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, GithubConfig, LlmConfig, ServerConfig};
pub use error::{GitscoutError, Result};
pub use types::DateRange;
