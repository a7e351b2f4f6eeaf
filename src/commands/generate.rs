//! Passphrase generation command
//!
//! Draws words from a wordlist and joins them into a passphrase.

use crate::core::Word;
use crate::wordlists::Wordlist;
use rand::{CryptoRng, Rng};
use std::num::NonZeroUsize;

/// Configuration for generating a passphrase
pub struct GenerateConfig {
    pub count: NonZeroUsize,
    pub join_char: char,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(count: NonZeroUsize) -> Self {
        Self {
            count,
            join_char: ' ',
        }
    }
}

/// Result of generating a passphrase
pub struct GenerateResult<'a> {
    /// Picked words in draw order
    pub picks: Vec<&'a Word>,
    pub passphrase: String,
}

/// Draw `count` words independently and with replacement
///
/// Returns `None` if the wordlist is empty.
pub fn pick_words<'a, R: Rng + CryptoRng + ?Sized>(
    wordlist: &'a Wordlist,
    count: NonZeroUsize,
    rng: &mut R,
) -> Option<Vec<&'a Word>> {
    (0..count.get())
        .map(|_| wordlist.choose(&mut *rng))
        .collect()
}

/// Join picked words with a single separator character
#[must_use]
pub fn join_words(picks: &[&Word], join_char: char) -> String {
    let separator = join_char.to_string();
    picks
        .iter()
        .map(|word| word.text())
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Generate a passphrase from the given wordlist
///
/// # Errors
///
/// Returns an error if the wordlist is empty.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use std::path::Path;
/// use wordlist_passphrase::commands::{GenerateConfig, generate_passphrase};
/// use wordlist_passphrase::core::WordlistFormat;
/// use wordlist_passphrase::wordlists::loader::parse;
///
/// let wordlist = parse("alpha\nbeta\n".as_bytes(), Path::new("w.txt"), WordlistFormat::Plain).unwrap();
/// let config = GenerateConfig::new(NonZeroUsize::new(4).unwrap());
/// let result = generate_passphrase(&config, &wordlist, &mut rand::rng()).unwrap();
/// assert_eq!(result.passphrase.split(' ').count(), 4);
/// ```
pub fn generate_passphrase<'a, R: Rng + CryptoRng + ?Sized>(
    config: &GenerateConfig,
    wordlist: &'a Wordlist,
    rng: &mut R,
) -> Result<GenerateResult<'a>, String> {
    let picks = pick_words(wordlist, config.count, rng)
        .ok_or_else(|| "Cannot pick words from an empty wordlist".to_string())?;

    debug_assert_eq!(picks.len(), config.count.get());

    let passphrase = join_words(&picks, config.join_char);
    Ok(GenerateResult { picks, passphrase })
}
