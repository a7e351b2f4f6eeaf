//! Wordlists for passphrase generation
//!
//! A [`Wordlist`] is the ordered, read-only sampling universe parsed from a file.

pub mod loader;

use crate::core::{Word, WordError, WordlistFormat};
use rand::prelude::IndexedRandom;
use rand::{CryptoRng, Rng};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Ordered list of accepted words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<Word>,
}

impl Wordlist {
    /// Number of accepted words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Draw one word uniformly at random
    ///
    /// Only cryptographically secure generators are accepted. Returns `None` for an empty list.
    pub fn choose<R: Rng + CryptoRng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// Append a word whose index is the current length of the list
    fn push(&mut self, text: &str) -> Result<(), WordError> {
        let word = Word::new(text, self.words.len())?;
        self.words.push(word);
        Ok(())
    }
}

/// Error raised while loading a wordlist
#[derive(Debug)]
pub enum WordlistError {
    /// A line did not match the format or did not hold a valid word
    InvalidWordlist {
        reason: String,
        lineno: usize,
        path: PathBuf,
        format: WordlistFormat,
    },
    /// Reading the file failed; `lineno` is set when the failure hit a specific line
    Io {
        path: PathBuf,
        lineno: Option<usize>,
        source: io::Error,
    },
    /// The file parsed cleanly but held no words
    Empty { path: PathBuf, format: WordlistFormat },
}

impl WordlistError {
    /// 1-based line number, when the error is tied to a line
    #[must_use]
    pub const fn lineno(&self) -> Option<usize> {
        match self {
            Self::InvalidWordlist { lineno, .. } => Some(*lineno),
            Self::Io { lineno, .. } => *lineno,
            Self::Empty { .. } => None,
        }
    }
}

impl fmt::Display for WordlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWordlist {
                reason,
                lineno,
                path,
                format,
            } => write!(
                f,
                "Invalid wordlist not in {format} format: {reason} ({}:{lineno})",
                path.display()
            ),
            Self::Io {
                path,
                lineno: Some(lineno),
                source,
            } => write!(f, "Failed to read {}:{lineno}: {source}", path.display()),
            Self::Io {
                path,
                lineno: None,
                source,
            } => write!(f, "Failed to read {}: {source}", path.display()),
            Self::Empty { path, format } => write!(
                f,
                "Wordlist {} contains no words in {format} format",
                path.display()
            ),
        }
    }
}

impl std::error::Error for WordlistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
