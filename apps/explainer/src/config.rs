use anyhow::{ensure, Context, Result};

pub const DEFAULT_MODEL: &str = "gpt-4-1106-preview";
pub const DEFAULT_MAX_TOKENS: u32 = 3000;
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_REQUIREMENTS_PATH: &str = "./requirements.md";
pub const DEFAULT_PROFILES_PATH: &str = "./recommender.md";

/// Run configuration loaded from environment variables (and `.env` if present).
/// Fails at startup if the API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_max_tokens: u32,
    pub openai_api_base: String,
    pub requirements_path: String,
    pub profiles_path: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let openai_max_tokens = match lookup("OPENAI_MAX_TOKENS") {
            Some(raw) => {
                let value = raw
                    .trim()
                    .parse::<u32>()
                    .with_context(|| format!("OPENAI_MAX_TOKENS must be a positive integer, got '{raw}'"))?;
                ensure!(value > 0, "OPENAI_MAX_TOKENS must be a positive integer, got '{raw}'");
                value
            }
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(Config {
            openai_api_key: lookup("OPENAI_API_KEY")
                .filter(|v| !v.trim().is_empty())
                .context("Required environment variable 'OPENAI_API_KEY' is not set")?,
            openai_model: optional("OPENAI_MODEL", DEFAULT_MODEL),
            openai_max_tokens,
            openai_api_base: optional("OPENAI_API_BASE", DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            requirements_path: optional("REQUIREMENTS_PATH", DEFAULT_REQUIREMENTS_PATH),
            profiles_path: optional("PROFILES_PATH", DEFAULT_PROFILES_PATH),
            rust_log: optional("RUST_LOG", "info"),
        })
    }
}
