//! Display functions for command results

use crate::commands::GenerateResult;
use crate::core::Word;
use std::io::{self, Write};

/// Format one line of the pick trace
///
/// The draw number is zero-padded to at least two digits.
#[must_use]
pub fn format_pick(draw: usize, word: &Word) -> String {
    format!("{draw:02} picked {}", word.describe())
}

/// Write the pick trace followed by a blank separator line
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn print_pick_trace<W: Write>(out: &mut W, result: &GenerateResult<'_>) -> io::Result<()> {
    for (draw, word) in result.picks.iter().enumerate() {
        writeln!(out, "{}", format_pick(draw, word))?;
    }
    writeln!(out)?;
    out.flush()
}

/// Write the passphrase as a single line
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn print_passphrase<W: Write>(out: &mut W, result: &GenerateResult<'_>) -> io::Result<()> {
    writeln!(out, "{}", result.passphrase)?;
    out.flush()
}
