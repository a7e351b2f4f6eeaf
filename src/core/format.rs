//! Wordlist line formats
//!
//! Each format knows how to pull the candidate word out of a single trimmed line.

use super::word::is_valid_word;
use clap::ValueEnum;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Dice roll in decimal digits, optional whitespace, then the word
static DICELIST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{Nd}+\s*(?P<word>\S*)$").expect("dicelist line pattern is valid")
});

/// Layout of the lines in a wordlist file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum WordlistFormat {
    /// One word per line
    #[value(name = "plain")]
    Plain,
    /// Dice roll number followed by a word, as in the EFF lists
    #[value(name = "dicelist-eff")]
    DicelistEff,
}

impl WordlistFormat {
    /// Name of the format as accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::DicelistEff => "dicelist-eff",
        }
    }

    /// Extract the candidate word from a trimmed, non-blank line
    ///
    /// Returns `None` when the whole line does not match the format. A returned word has
    /// not yet been checked against the word shape; for `dicelist-eff` it may be empty.
    ///
    /// # Examples
    /// ```
    /// use wordlist_passphrase::core::WordlistFormat;
    ///
    /// assert_eq!(WordlistFormat::DicelistEff.capture_word("11113  abacus"), Some("abacus"));
    /// assert_eq!(WordlistFormat::Plain.capture_word("two words"), None);
    /// ```
    #[must_use]
    pub fn capture_word(self, line: &str) -> Option<&str> {
        match self {
            Self::Plain => is_valid_word(line).then_some(line),
            Self::DicelistEff => DICELIST_LINE
                .captures(line)
                .and_then(|caps| caps.name("word"))
                .map(|word| word.as_str()),
        }
    }
}

impl fmt::Display for WordlistFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
