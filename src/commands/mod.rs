//! Command implementations

pub mod generate;
pub mod prompt;

pub use generate::{GenerateConfig, GenerateResult, generate_passphrase, join_words, pick_words};
pub use prompt::{COUNT_PROMPT, prompt_word_count};
