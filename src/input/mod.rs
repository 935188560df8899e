//! Interactive input helpers. Validation is pure and the prompt loops are
//! generic over their reader and writer so they can be exercised against
//! in-memory buffers.

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

pub const LENGTH_PROMPT: &str = "Enter the sequence length: ";
pub const LENGTH_RETRY_MESSAGE: &str = "Please enter a positive integer for the sequence length.";

/// The entered text was not a positive integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidLength(String);

impl fmt::Display for InvalidLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid sequence length: {:?}", self.0)
    }
}

impl Error for InvalidLength {}

/// Validates a sequence length entry. Surrounding whitespace is accepted,
/// anything that is not a base-10 integer greater than zero is rejected.
pub fn parse_length(input: &str) -> Result<usize, InvalidLength> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(length) if length > 0 => Ok(length),
        _ => Err(InvalidLength(trimmed.to_string())),
    }
}

/// Prompts for the sequence length until a valid value is entered. The loop
/// has no retry limit; end of input is an error.
pub fn prompt_length<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<usize> {
    loop {
        let line = read_prompted_line(input, output, LENGTH_PROMPT)?;
        match parse_length(&line) {
            Ok(length) => return Ok(length),
            Err(_) => writeln!(output, "{}", LENGTH_RETRY_MESSAGE)?,
        }
    }
}

/// Prompts once and returns the entered line verbatim, without its line
/// terminator. Empty entries are allowed.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    read_prompted_line(input, output, prompt)
}

fn read_prompted_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input while waiting for a reply",
        ));
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
