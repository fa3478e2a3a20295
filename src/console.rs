//! Terminal helpers shared by the menu binaries.

use crate::error::{Error, Result};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Prints `msg` and reads one trimmed line. Fails once stdin is closed.
pub fn prompt(msg: &str) -> io::Result<String> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::ErrorKind::UnexpectedEof.into());
    }
    Ok(line.trim().to_string())
}

/// Prompts until the user presses Enter.
pub fn pause(msg: &str) -> io::Result<()> {
    prompt(msg).map(|_| ())
}

pub fn clear_screen() -> io::Result<()> {
    print!("\x1B[2J\x1B[1;1H");
    io::stdout().flush()
}

/// Parses a count or score typed at a prompt.
pub fn parse_number<T: FromStr>(input: &str) -> Result<T> {
    input.trim().parse().map_err(|_| Error::InvalidInput {
        input: input.to_string(),
    })
}
