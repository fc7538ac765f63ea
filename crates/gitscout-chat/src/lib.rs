//! Conversational query routing for gitscout.
//!
//! Classifies free-text messages into intents, extracts date ranges from
//! natural-language temporal references, and assembles responses from
//! GitHub data or a language-model completion.

pub mod error;
pub mod intent;
pub mod parser;
pub mod response;
pub mod router;

pub use error::ChatError;
pub use intent::Intent;
pub use parser::{extract_date_range, find_commit_sha};
pub use response::CommitSummary;
pub use router::QueryRouter;
