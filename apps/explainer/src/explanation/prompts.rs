// Prompt text for explanation requests.

use crate::explanation::role::Role;

/// System message sent with every explanation request.
pub const EXPLANATION_SYSTEM: &str = "Please generate a detailed explanation for the following:";

/// Characters of the job requirements used per request.
pub const JOB_REQUIREMENTS_CHAR_LIMIT: usize = 500;

/// Characters of a single profile used per request.
pub const PROFILE_CHAR_LIMIT: usize = 3000;

/// The two messages of one explanation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: &'static str,
    pub user: String,
}

impl PromptPair {
    /// Inputs are used as given; truncation is the caller's job.
    pub fn new(job_requirements: &str, profile: &str, role: Role) -> Self {
        Self {
            system: EXPLANATION_SYSTEM,
            user: build_user_prompt(job_requirements, profile, role),
        }
    }
}

/// Renders the user message. Inputs are interpolated verbatim, no escaping.
pub fn build_user_prompt(job_requirements: &str, profile: &str, role: Role) -> String {
    format!(
        "Job Requirements:\n{job_requirements}\n\n\
         Candidate Profile:\n{profile}\n\n\
         Explain why this candidate is a {}:",
        role.phrase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_prompt_renders_exact_template() {
        let prompt = build_user_prompt("Rust, 5y", "Alice: Rust 7y", Role::Client);
        assert_eq!(
            prompt,
            "Job Requirements:\nRust, 5y\n\nCandidate Profile:\nAlice: Rust 7y\n\n\
             Explain why this candidate is a good match for the job:"
        );
    }

    #[test]
    fn test_talent_prompt_uses_talent_phrase() {
        let prompt = build_user_prompt("req", "profile", Role::Talent);
        assert!(prompt.ends_with("Explain why this candidate is a good job to apply for:"));
        assert!(!prompt.contains("good match for the job"));
    }

    #[test]
    fn test_inputs_are_not_escaped_or_resubstituted() {
        let prompt = build_user_prompt("{profile} & <b>", "{job_requirements}\n\"quoted\"", Role::Client);
        assert!(prompt.contains("Job Requirements:\n{profile} & <b>\n\n"));
        assert!(prompt.contains("Candidate Profile:\n{job_requirements}\n\"quoted\"\n\n"));
    }

    #[test]
    fn test_prompt_pair_carries_fixed_system_message() {
        let pair = PromptPair::new("req", "profile", Role::Client);
        assert_eq!(pair.system, "Please generate a detailed explanation for the following:");
        assert_eq!(pair.user, build_user_prompt("req", "profile", Role::Client));
    }
}
