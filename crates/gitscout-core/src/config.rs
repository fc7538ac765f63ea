use tracing::{info, warn};

/// Default API server port.
const DEFAULT_PORT: u16 = 8000;

/// Default frontend origin allowed by CORS.
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Default generative model identifier.
const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Top-level configuration for the gitscout service.
///
/// Built once at startup from environment variables (a `.env` file is
/// loaded if present) and passed to request handlers by reference. Each
/// section corresponds to one upstream collaborator or the server itself.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub github: GithubConfig,
    pub llm: LlmConfig,
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            github: GithubConfig::default(),
            llm: LlmConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Missing values fall back to defaults (empty strings for secrets);
    /// they are reported by [`AppConfig::warn_missing`] rather than
    /// aborting startup, and upstream calls fail downstream instead.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok());
        info!("Configuration loaded from environment");
        config
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let github = GithubConfig {
            token: get("GITHUB_TOKEN").unwrap_or_default(),
            owner: get("GITHUB_OWNER").unwrap_or_default(),
            repo: get("GITHUB_REPO").unwrap_or_default(),
        };

        let llm = LlmConfig {
            api_key: get("GEMINI_API_KEY").unwrap_or_default(),
            model: get("GEMINI_MODEL")
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        };

        let server = ServerConfig {
            port: get("GITSCOUT_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            allowed_origins: get("GITSCOUT_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>()
                })
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| vec![DEFAULT_ALLOWED_ORIGIN.to_string()]),
        };

        Self {
            github,
            llm,
            server,
        }
    }

    /// Log a warning for each required value that is absent.
    ///
    /// Absence is not fatal: the affected upstream calls fail with auth or
    /// not-found errors that are surfaced per request.
    pub fn warn_missing(&self) {
        if self.github.token.is_empty() {
            warn!("GITHUB_TOKEN is not set; GitHub queries will fail");
        }
        if self.github.owner.is_empty() || self.github.repo.is_empty() {
            warn!("GITHUB_OWNER/GITHUB_REPO are not set; repository queries will fail");
        }
        if self.llm.api_key.is_empty() {
            warn!("GEMINI_API_KEY is not set; language-model fallback will fail");
        }
    }

    /// The `owner/repo` slug of the configured repository.
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.github.owner, self.github.repo)
    }
}

/// Target repository identity and access token.
#[derive(Debug, Clone, Default)]
pub struct GithubConfig {
    /// Bearer token for the GitHub REST API.
    pub token: String,
    /// Repository owner (user or organization login).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

/// Generative-language-model access.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key for the model service.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on (localhost only).
    pub port: u16,
    /// Origins allowed by CORS.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
        }
    }
}
