mod config;
mod errors;
mod explanation;
mod ingest;
mod llm_client;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::explanation::tokens::TokenCounter;
use crate::explanation::ExplanationGenerator;
use crate::ingest::{load_text, split_profiles};
use crate::llm_client::LlmClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing API key)
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the explanation report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting explainer v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_api_base.clone(),
        config.openai_model.clone(),
        config.openai_max_tokens,
    )
    .context("Failed to build HTTP client")?;
    info!(
        "LLM client initialized (model: {}, max_tokens: {})",
        llm.model(),
        config.openai_max_tokens
    );

    let job_requirements = load_text(Path::new(&config.requirements_path)).await?;
    let recommended_profiles = load_text(Path::new(&config.profiles_path)).await?;

    let profiles = split_profiles(&recommended_profiles);
    info!("Loaded {} profile(s) from {}", profiles.len(), config.profiles_path);

    let tokens = TokenCounter::for_model(llm.model());
    if !tokens.is_exact() {
        info!("Token diagnostics use a word-count estimate for model {}", llm.model());
    }
    let generator = ExplanationGenerator::new(&llm, tokens);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let results = generator
        .explain_profiles(&job_requirements, &profiles, &mut out)
        .await?;

    let failures: usize = results.iter().map(|r| r.failures()).sum();
    if let Some(last) = results.last() {
        info!(
            "Finished {} profile(s), {} request(s) fell back",
            last.index + 1,
            failures
        );
    }

    Ok(())
}
