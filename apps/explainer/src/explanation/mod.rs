// Explanation generation: role framing, prompt construction, token
// diagnostics and the per-profile request loop.
// All remote calls go through llm_client::ChatCompletion.

pub mod generator;
pub mod prompts;
pub mod role;
pub mod tokens;

pub use generator::ExplanationGenerator;
