//! Token-count diagnostics printed before each request.
//!
//! Counts come from the BPE encoding of the target model. Models the
//! tokenizer does not know fall back to ~1.3 tokens per word.

use std::fmt;

use tiktoken_rs::CoreBPE;
use tracing::debug;

const TOKENS_PER_WORD: f64 = 1.3;
const PREVIEW_CHARS: usize = 50;

pub fn estimate_tokens(text: &str) -> usize {
    let word_count = text.split_whitespace().count();
    (word_count as f64 * TOKENS_PER_WORD) as usize
}

/// Counts prompt tokens for one model. Built once per run.
pub struct TokenCounter {
    bpe: Option<CoreBPE>,
}

impl TokenCounter {
    pub fn for_model(model: &str) -> Self {
        let bpe = match tiktoken_rs::get_bpe_from_model(model) {
            Ok(bpe) => Some(bpe),
            Err(e) => {
                debug!("No tokenizer for model '{model}' ({e}); using word-count estimate");
                None
            }
        };
        Self { bpe }
    }

    /// True when counts come from the model's own encoding.
    pub fn is_exact(&self) -> bool {
        self.bpe.is_some()
    }

    pub fn count(&self, text: &str) -> usize {
        match &self.bpe {
            Some(bpe) => bpe.encode_with_special_tokens(text).len(),
            None => estimate_tokens(text),
        }
    }
}

/// One diagnostic line: token count plus the first 50 characters of the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenReport<'a> {
    pub tokens: usize,
    pub preview: &'a str,
}

impl<'a> TokenReport<'a> {
    pub fn for_prompt(prompt: &'a str, counter: &TokenCounter) -> Self {
        Self {
            tokens: counter.count(prompt),
            preview: crate::ingest::truncate_chars(prompt, PREVIEW_CHARS),
        }
    }
}

impl fmt::Display for TokenReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\x1b[37m{} tokens\x1b[0m in prompt: \x1b[92m{}\x1b[0m",
            self.tokens, self.preview
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_tokens_scales_word_count() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("one two three four five six seven eight nine ten"), 13);
    }

    #[test]
    fn test_gpt4_model_uses_bpe_counts() {
        let counter = TokenCounter::for_model("gpt-4-1106-preview");
        assert!(counter.is_exact());
        // cl100k_base: "hello" + " world"
        assert_eq!(counter.count("hello world"), 2);
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn test_bpe_count_differs_from_word_estimate() {
        let counter = TokenCounter::for_model("gpt-4-1106-preview");
        let text = "hello world";
        assert_ne!(counter.count(text), estimate_tokens(text));
    }

    #[test]
    fn test_unknown_model_falls_back_to_estimate() {
        let counter = TokenCounter::for_model("not-a-real-model");
        assert!(!counter.is_exact());
        assert_eq!(counter.count("one two three four five six seven eight nine ten"), 13);
    }

    #[test]
    fn test_report_preview_is_first_fifty_chars() {
        let counter = TokenCounter::for_model("not-a-real-model");
        let prompt = "a".repeat(80);
        let report = TokenReport::for_prompt(&prompt, &counter);
        assert_eq!(report.preview.len(), 50);
    }

    #[test]
    fn test_report_display_format() {
        let counter = TokenCounter::for_model("not-a-real-model");
        let report = TokenReport::for_prompt("Please generate a detailed explanation", &counter);
        assert_eq!(
            report.to_string(),
            "\x1b[37m6 tokens\x1b[0m in prompt: \x1b[92mPlease generate a detailed explanation\x1b[0m"
        );
    }

    #[test]
    fn test_report_uses_counter_for_token_figure() {
        let counter = TokenCounter::for_model("gpt-4-1106-preview");
        let report = TokenReport::for_prompt("hello world", &counter);
        assert_eq!(report.tokens, 2);
    }
}
