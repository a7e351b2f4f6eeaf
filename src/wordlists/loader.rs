//! Wordlist loading utilities
//!
//! Parses wordlist files line by line under a [`WordlistFormat`].

use super::{Wordlist, WordlistError};
use crate::core::WordlistFormat;
use log::{debug, trace};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Parse a wordlist from any line-oriented reader
///
/// Lines end at LF, CRLF or a lone CR. Blank lines are skipped and do not consume an index.
/// The first bad line aborts parsing. `path` is only used to label errors.
///
/// # Errors
///
/// Returns `WordlistError::InvalidWordlist` for a line that does not match `format` or does
/// not hold a valid word, and `WordlistError::Io` if reading fails.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use wordlist_passphrase::core::WordlistFormat;
/// use wordlist_passphrase::wordlists::loader::parse;
///
/// let input = "11111 abacus\n\n11112 abdomen\n";
/// let words = parse(input.as_bytes(), Path::new("eff.txt"), WordlistFormat::DicelistEff).unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words.words()[1].text(), "abdomen");
/// ```
pub fn parse<R: BufRead>(
    reader: R,
    path: &Path,
    format: WordlistFormat,
) -> Result<Wordlist, WordlistError> {
    let mut result = Wordlist::default();
    let mut lineno = 0;

    for chunk in reader.split(b'\n') {
        let chunk = chunk.map_err(|source| read_error(path, lineno + 1, source))?;
        // A CR right before the LF is part of a CRLF ending; any other CR ends a line
        let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk.as_slice());

        for raw in chunk.split(|&byte| byte == b'\r') {
            lineno += 1;
            let line = std::str::from_utf8(raw).map_err(|err| {
                read_error(path, lineno, io::Error::new(io::ErrorKind::InvalidData, err))
            })?;
            parse_line(&mut result, line, lineno, path, format)?;
        }
    }

    debug!(
        "parsed {} words from {} ({format})",
        result.len(),
        path.display()
    );
    Ok(result)
}

fn parse_line(
    result: &mut Wordlist,
    line: &str,
    lineno: usize,
    path: &Path,
    format: WordlistFormat,
) -> Result<(), WordlistError> {
    let bad_line = |reason: String| WordlistError::InvalidWordlist {
        reason,
        lineno,
        path: path.to_path_buf(),
        format,
    };

    let line = line.trim();
    if line.is_empty() {
        trace!("{}:{lineno}: skipping blank line", path.display());
        return Ok(());
    }

    let word = format
        .capture_word(line)
        .ok_or_else(|| bad_line("Not a valid line".to_string()))?;

    result
        .push(word)
        .map_err(|_| bad_line(format!("Invalid word '{word}'")))
}

fn read_error(path: &Path, lineno: usize, source: io::Error) -> WordlistError {
    WordlistError::Io {
        path: path.to_path_buf(),
        lineno: Some(lineno),
        source,
    }
}

/// Open and parse a wordlist file
///
/// The file handle is closed before this returns, on success or failure.
///
/// # Errors
///
/// Returns `WordlistError::Io` if the file cannot be opened, otherwise whatever [`parse`]
/// reports.
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    format: WordlistFormat,
) -> Result<Wordlist, WordlistError> {
    let path = path.as_ref();
    debug!("opening wordlist {}", path.display());

    let file = File::open(path).map_err(|source| WordlistError::Io {
        path: path.to_path_buf(),
        lineno: None,
        source,
    })?;

    parse(BufReader::new(file), path, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::io::Write;

    fn parse_str(input: &str, format: WordlistFormat) -> Result<Wordlist, WordlistError> {
        parse(input.as_bytes(), Path::new("list.txt"), format)
    }

    fn texts(wordlist: &Wordlist) -> Vec<&str> {
        wordlist.words().iter().map(Word::text).collect()
    }

    #[test]
    fn plain_parses_in_file_order() {
        let wordlist = parse_str("alpha\nbeta\ngamma\n", WordlistFormat::Plain).unwrap();

        assert_eq!(texts(&wordlist), vec!["alpha", "beta", "gamma"]);
        for (i, word) in wordlist.words().iter().enumerate() {
            assert_eq!(word.index(), i);
        }
    }

    #[test]
    fn plain_trims_surrounding_whitespace() {
        let wordlist = parse_str("  alpha\t\n\tbeta  \r\n", WordlistFormat::Plain).unwrap();
        assert_eq!(texts(&wordlist), vec!["alpha", "beta"]);
    }

    #[test]
    fn blank_lines_do_not_affect_indices() {
        let input = "\n\n  \nalpha\n\n\t\nbeta\ngamma\n\n\n";
        let wordlist = parse_str(input, WordlistFormat::Plain).unwrap();

        assert_eq!(wordlist.len(), 3);
        assert_eq!(wordlist.words()[0].index(), 0);
        assert_eq!(wordlist.words()[2].text(), "gamma");
        assert_eq!(wordlist.words()[2].index(), 2);
    }

    #[test]
    fn cr_only_line_endings() {
        let wordlist = parse_str("alpha\rbeta\rgamma\r", WordlistFormat::Plain).unwrap();
        assert_eq!(texts(&wordlist), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn crlf_counts_as_one_line_break() {
        let input = "alpha\r\nbeta\r\ntwo words\r\n";
        let err = parse_str(input, WordlistFormat::Plain).unwrap_err();
        assert_eq!(err.lineno(), Some(3));
    }

    #[test]
    fn mixed_line_endings_keep_line_numbers() {
        // alpha, blank, beta, gamma, then the bad line
        let input = "alpha\r\rbeta\ngamma\r\nbad line\n";
        let err = parse_str(input, WordlistFormat::Plain).unwrap_err();
        assert_eq!(err.lineno(), Some(5));

        let wordlist = parse_str("alpha\r\rbeta\ngamma\r\n", WordlistFormat::Plain).unwrap();
        assert_eq!(texts(&wordlist), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn duplicate_words_keep_distinct_indices() {
        let wordlist = parse_str("echo\necho\n", WordlistFormat::Plain).unwrap();
        assert_eq!(wordlist.words()[0].index(), 0);
        assert_eq!(wordlist.words()[1].index(), 1);
    }

    #[test]
    fn plain_rejects_internal_whitespace_with_line_number() {
        let err = parse_str("alpha\n\ntwo words\nbeta\n", WordlistFormat::Plain).unwrap_err();

        match &err {
            WordlistError::InvalidWordlist {
                reason,
                lineno,
                format,
                ..
            } => {
                assert_eq!(reason, "Not a valid line");
                assert_eq!(*lineno, 3);
                assert_eq!(*format, WordlistFormat::Plain);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Invalid wordlist not in plain format: Not a valid line (list.txt:3)"
        );
    }

    #[test]
    fn dicelist_parses_eff_lines() {
        let input = "11111\tabacus\n11112\tabdomen\n42  correct\n";
        let wordlist = parse_str(input, WordlistFormat::DicelistEff).unwrap();
        assert_eq!(texts(&wordlist), vec!["abacus", "abdomen", "correct"]);
    }

    #[test]
    fn dicelist_roll_without_word_is_invalid_word() {
        let err = parse_str("11111 abacus\n42  \n", WordlistFormat::DicelistEff).unwrap_err();

        match err {
            WordlistError::InvalidWordlist { reason, lineno, .. } => {
                assert_eq!(reason, "Invalid word ''");
                assert_eq!(lineno, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn dicelist_bad_word_shape() {
        let err = parse_str("11111 abacus!\n", WordlistFormat::DicelistEff).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid wordlist not in dicelist-eff format: Invalid word 'abacus!' (list.txt:1)"
        );
    }

    #[test]
    fn dicelist_missing_roll_is_not_valid_line() {
        let err = parse_str("abacus\n", WordlistFormat::DicelistEff).unwrap_err();
        assert!(matches!(
            err,
            WordlistError::InvalidWordlist { ref reason, lineno: 1, .. } if reason == "Not a valid line"
        ));
    }

    #[test]
    fn plain_reading_of_dicelist_fails() {
        let err = parse_str("11111 abacus\n", WordlistFormat::Plain).unwrap_err();
        assert_eq!(err.lineno(), Some(1));
    }

    #[test]
    fn empty_input_is_not_rejected_by_parser() {
        let wordlist = parse_str("\n\n   \n", WordlistFormat::Plain).unwrap();
        assert!(wordlist.is_empty());
    }

    #[test]
    fn invalid_utf8_is_io_error_with_line() {
        let input: &[u8] = b"alpha\n\xff\xfe\n";
        let err = parse(input, Path::new("bin.txt"), WordlistFormat::Plain).unwrap_err();
        assert!(matches!(err, WordlistError::Io { lineno: Some(2), .. }));
    }

    #[test]
    fn load_from_file_reads_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "11111 abacus").unwrap();
        writeln!(file, "11112 abdomen").unwrap();

        let wordlist = load_from_file(file.path(), WordlistFormat::DicelistEff).unwrap();
        assert_eq!(texts(&wordlist), vec!["abacus", "abdomen"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_from_file(&missing, WordlistFormat::Plain).unwrap_err();
        assert!(matches!(
            err,
            WordlistError::Io { ref path, lineno: None, .. } if *path == missing
        ));
    }
}
