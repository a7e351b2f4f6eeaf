//! Command line interface
//!
//! Option parsing, option validation and the end-to-end generation run.

use crate::commands::{GenerateConfig, generate_passphrase, prompt_word_count};
use crate::core::WordlistFormat;
use crate::output::{print_passphrase, print_pick_trace};
use crate::wordlists::WordlistError;
use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::debug;
use rand::{CryptoRng, Rng};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "wordlist_passphrase",
    about = "Generate a passphrase from words drawn at random out of a wordlist file",
    version,
    author
)]
pub struct Args {
    /// The format of the wordlist file
    #[arg(long = "wordlist-format", value_enum, value_name = "FORMAT")]
    pub wordlist_format: WordlistFormat,

    /// The file that contains the list of words to use
    #[arg(long, value_name = "PATH")]
    pub wordlist: PathBuf,

    /// The number of words to use (prompted for when omitted)
    #[arg(short = 'n', long = "count", value_name = "COUNT")]
    pub count: Option<NonZeroUsize>,

    /// The character to join the words together
    #[arg(long, default_value = " ", value_name = "CHAR", allow_hyphen_values = true)]
    pub join_char: String,

    /// Suppresses the pick trace and logging output (the count prompt is still shown)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Error type for bad command line options
#[derive(Debug)]
pub enum UsageError {
    JoinChar(String),
    WordlistNotFound(PathBuf),
    WordlistIsDirectory(PathBuf),
    WordlistUnreadable { path: PathBuf, source: io::Error },
    MissingCount,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JoinChar(value) => write!(
                f,
                "Invalid value for '--join-char': The join char must be a single character, but got {value:?}"
            ),
            Self::WordlistNotFound(path) => write!(
                f,
                "Invalid value for '--wordlist': File '{}' does not exist.",
                path.display()
            ),
            Self::WordlistIsDirectory(path) => write!(
                f,
                "Invalid value for '--wordlist': File '{}' is a directory.",
                path.display()
            ),
            Self::WordlistUnreadable { path, source } => write!(
                f,
                "Invalid value for '--wordlist': File '{}' is not readable: {source}",
                path.display()
            ),
            Self::MissingCount => write!(
                f,
                "Missing option '--count' / '-n': no word count was entered"
            ),
        }
    }
}

impl std::error::Error for UsageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordlistUnreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Validate the join character option
///
/// # Errors
///
/// Returns `UsageError::JoinChar` unless `value` is exactly one character.
pub fn parse_join_char(value: &str) -> Result<char, UsageError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(UsageError::JoinChar(value.to_string())),
    }
}

/// Check that the wordlist path is an existing, readable, non-directory file
///
/// # Errors
///
/// Returns the matching `UsageError` for a missing, directory or unreadable path.
pub fn check_wordlist_path(path: &Path) -> Result<(), UsageError> {
    let metadata = fs::metadata(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            UsageError::WordlistNotFound(path.to_path_buf())
        } else {
            UsageError::WordlistUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if metadata.is_dir() {
        return Err(UsageError::WordlistIsDirectory(path.to_path_buf()));
    }

    File::open(path)
        .map(drop)
        .map_err(|source| UsageError::WordlistUnreadable {
            path: path.to_path_buf(),
            source,
        })
}

/// Run a full generation: validate options, load the wordlist, pick words, print
///
/// The passphrase is the only thing written to `out`. The count prompt and, unless quiet,
/// the pick trace are written to `diag`.
///
/// # Errors
///
/// Returns a `UsageError` for bad options, a `WordlistError` for a bad or empty wordlist,
/// or an I/O error from the streams.
pub fn run<I, O, D, R>(
    args: Args,
    input: &mut I,
    out: &mut O,
    diag: &mut D,
    rng: &mut R,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    D: Write,
    R: Rng + CryptoRng + ?Sized,
{
    let join_char = parse_join_char(&args.join_char)?;
    check_wordlist_path(&args.wordlist)?;

    let count = match args.count {
        Some(count) => count,
        None => prompt_word_count(input, diag)
            .context("Failed to read the word count")?
            .ok_or(UsageError::MissingCount)?,
    };

    let wordlist = load_from_file(&args.wordlist, args.wordlist_format)?;
    if wordlist.is_empty() {
        return Err(WordlistError::Empty {
            path: args.wordlist,
            format: args.wordlist_format,
        }
        .into());
    }

    let mut config = GenerateConfig::new(count);
    config.join_char = join_char;
    debug!("drawing {count} words from {} candidates", wordlist.len());

    let result = generate_passphrase(&config, &wordlist, rng).map_err(|e| anyhow!(e))?;

    if !args.quiet {
        print_pick_trace(diag, &result)?;
    }
    print_passphrase(out, &result)?;

    Ok(())
}
