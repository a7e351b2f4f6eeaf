//! Wordlist word representation
//!
//! A Word stores the text of an accepted wordlist entry along with its position in the list.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Any character that may not appear in a word
///
/// Word characters are Unicode letters and numbers, the underscore and the hyphen.
static INVALID_WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_-]").expect("word character class is valid"));

/// A single wordlist entry
///
/// The text is guaranteed to be a valid word (see [`is_valid_word`]) and the index is its
/// zero-based position among the accepted entries of the list it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    index: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one character"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word contains invalid character {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Check whether a whole string is a valid word
///
/// # Examples
/// ```
/// use wordlist_passphrase::core::is_valid_word;
///
/// assert!(is_valid_word("drop-kick"));
/// assert!(!is_valid_word("two words"));
/// assert!(!is_valid_word(""));
/// ```
#[must_use]
pub fn is_valid_word(text: &str) -> bool {
    !text.is_empty() && !INVALID_WORD_CHAR.is_match(text)
}

impl Word {
    /// Create a new Word
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - The text contains anything other than word characters and hyphens
    ///
    /// # Examples
    /// ```
    /// use wordlist_passphrase::core::Word;
    ///
    /// let word = Word::new("abacus", 0).unwrap();
    /// assert_eq!(word.text(), "abacus");
    ///
    /// assert!(Word::new("two words", 1).is_err());
    /// assert!(Word::new("", 2).is_err());
    /// ```
    pub fn new(text: impl Into<String>, index: usize) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = INVALID_WORD_CHAR
            .find(&text)
            .and_then(|m| m.as_str().chars().next())
        {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text, index })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the position of the word in its wordlist
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Human-readable description used by the pick trace
    #[must_use]
    pub fn describe(&self) -> String {
        format!("index {}: '{}'", self.index, self.text)
    }
}
