//! Interactive word count prompt
//!
//! Asks the operator for the number of words when it was not given on the command line.

use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;

/// Prompt text shown before reading the word count
pub const COUNT_PROMPT: &str = "Please specify the number of words to generate";

/// Ask for the word count until a positive integer is entered
///
/// The prompt and any complaints go to `out`; answers are read from `input`.
/// Returns `Ok(None)` if the input ends before a valid answer.
///
/// # Errors
///
/// Returns an I/O error if writing the prompt or reading the answer fails.
pub fn prompt_word_count<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<NonZeroUsize>> {
    loop {
        let Some(answer) = get_user_input(input, out, COUNT_PROMPT)? else {
            writeln!(out)?;
            return Ok(None);
        };

        if answer.is_empty() {
            continue;
        }

        match answer.parse::<NonZeroUsize>() {
            Ok(count) => return Ok(Some(count)),
            Err(_) => writeln!(out, "Error: '{answer}' is not a valid integer >= 1.")?,
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
