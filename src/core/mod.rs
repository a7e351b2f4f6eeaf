//! Core domain types for wordlists
//!
//! Words and the line formats they are read from. Everything here is pure and
//! independent of files or randomness.

mod format;
mod word;

pub use format::WordlistFormat;
pub use word::{Word, WordError, is_valid_word};
