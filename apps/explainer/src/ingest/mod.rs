// Document ingestion: load the two input documents and cut the profiles
// document into per-candidate records.

pub mod loader;
pub mod segment;

pub use loader::load_text;
pub use segment::{split_profiles, truncate_chars};
