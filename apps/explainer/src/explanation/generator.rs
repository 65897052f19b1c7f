//! Drives one explanation request per profile and role.
//!
//! Flow per profile: truncate inputs → client prompt → request → print →
//! talent prompt → request → print. Strictly sequential.
//!
//! A failed request never aborts the batch: it becomes
//! `ExplanationOutcome::Failed` and prints the fallback text.

use std::io::Write;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::explanation::prompts::{PromptPair, JOB_REQUIREMENTS_CHAR_LIMIT, PROFILE_CHAR_LIMIT};
use crate::explanation::role::Role;
use crate::explanation::tokens::{TokenCounter, TokenReport};
use crate::ingest::truncate_chars;
use crate::llm_client::ChatCompletion;

/// Printed in place of an explanation when the request failed.
pub const FALLBACK_EXPLANATION: &str = "No response generated";

/// Result of a single explanation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplanationOutcome {
    /// Generated text, already trimmed.
    Success(String),
    Failed { reason: String },
}

impl ExplanationOutcome {
    /// The text shown to the operator: the explanation, or the fallback.
    pub fn text(&self) -> &str {
        match self {
            ExplanationOutcome::Success(text) => text,
            ExplanationOutcome::Failed { .. } => FALLBACK_EXPLANATION,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExplanationOutcome::Success(_))
    }
}

/// Both explanations for one profile, identified by its position in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileExplanations {
    pub index: usize,
    pub client: ExplanationOutcome,
    pub talent: ExplanationOutcome,
}

impl ProfileExplanations {
    pub fn failures(&self) -> usize {
        [&self.client, &self.talent]
            .iter()
            .filter(|o| !o.is_success())
            .count()
    }
}

pub struct ExplanationGenerator<'a> {
    llm: &'a dyn ChatCompletion,
    tokens: TokenCounter,
}

impl<'a> ExplanationGenerator<'a> {
    pub fn new(llm: &'a dyn ChatCompletion, tokens: TokenCounter) -> Self {
        Self { llm, tokens }
    }

    /// Issues exactly one request for `prompt`.
    ///
    /// Token diagnostics for both messages are written to `out` first.
    /// Remote failures are logged and absorbed; only write errors surface.
    pub async fn request<W: Write>(
        &self,
        prompt: &PromptPair,
        out: &mut W,
    ) -> Result<ExplanationOutcome, AppError> {
        writeln!(out, "{}", TokenReport::for_prompt(prompt.system, &self.tokens))?;
        writeln!(out, "{}", TokenReport::for_prompt(&prompt.user, &self.tokens))?;

        let outcome = match self.llm.complete(prompt.system, &prompt.user).await {
            Ok(text) => ExplanationOutcome::Success(text.trim().to_string()),
            Err(e) => {
                warn!("Failed to generate response: {e}");
                ExplanationOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        Ok(outcome)
    }

    /// Builds the prompt for `role` and requests its explanation.
    pub async fn explain<W: Write>(
        &self,
        job_requirements: &str,
        profile: &str,
        role: Role,
        out: &mut W,
    ) -> Result<ExplanationOutcome, AppError> {
        let prompt = PromptPair::new(job_requirements, profile, role);
        self.request(&prompt, out).await
    }

    /// Explains every profile for both roles, printing each block as it completes.
    pub async fn explain_profiles<W: Write>(
        &self,
        job_requirements: &str,
        profiles: &[&str],
        out: &mut W,
    ) -> Result<Vec<ProfileExplanations>, AppError> {
        let job_requirements = truncate_chars(job_requirements, JOB_REQUIREMENTS_CHAR_LIMIT);
        let mut results = Vec::with_capacity(profiles.len());

        for (index, profile) in profiles.iter().enumerate() {
            let profile = truncate_chars(profile, PROFILE_CHAR_LIMIT);
            info!("Explaining profile {} of {}", index + 1, profiles.len());

            let client = self.explain(job_requirements, profile, Role::Client, out).await?;
            write_block(out, Role::Client, &client)?;

            let talent = self.explain(job_requirements, profile, Role::Talent, out).await?;
            write_block(out, Role::Talent, &talent)?;

            results.push(ProfileExplanations {
                index,
                client,
                talent,
            });
        }

        Ok(results)
    }
}

fn write_block<W: Write>(out: &mut W, role: Role, outcome: &ExplanationOutcome) -> std::io::Result<()> {
    writeln!(out, "Explanation for {role}:\n{}\n", outcome.text())?;
    out.flush()
}
