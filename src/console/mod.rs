//! Terminal glue: screen clearing, line input, and command parsing.
//!
//! Everything user-facing that is not factorization lives here, so the core
//! stays pure. Input is parsed into a [`Command`]; anything unusable becomes
//! an [`InputError`] that the prompt loop reports and recovers from.

use std::fmt;
use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Exit the program.
    Quit,
    /// Factor this number (0 and 1 are trivial cases handled by the caller).
    Number(u64),
}

/// Input that could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Blank line.
    Empty,
    /// Not `quit` and not an integer.
    NotANumber(String),
    /// A negative integer.
    Negative(i64),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Failed to get a valid input"),
            InputError::NotANumber(input) => {
                write!(f, "'{}' is not a valid number", input)
            }
            InputError::Negative(_) => {
                write!(f, "This program only accepts positive integers")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parses one trimmed input line.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    if line == "quit" {
        return Ok(Command::Quit);
    }
    // Parse signed so negative input is rejected rather than wrapped.
    match line.parse::<i64>() {
        Ok(n) if n < 0 => Err(InputError::Negative(n)),
        Ok(n) => Ok(Command::Number(n as u64)),
        Err(_) => Err(InputError::NotANumber(line.to_string())),
    }
}

/// Clears the terminal and homes the cursor. Best effort: a terminal that
/// cannot be cleared is not worth aborting over.
pub fn clear_display() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

/// Prints `prompt` (no newline appended) and reads one line from stdin,
/// trimmed. EOF is reported as an error; the caller treats it as quit.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut buf = String::new();
    let bytes = io::stdin().lock().read_line(&mut buf)?;
    if bytes == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(buf.trim().to_string())
}
