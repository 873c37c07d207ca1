/*!
 * Prompt helpers for the interactive session: read a line after a prompt,
 * parse the target port and the rapid open/close repetition count.
 *
 * A value that is not an integer is returned as an error and ends the session.
 */

use std::io::{BufRead, Write};

use crate::core::types::{NetworkError, NetworkResult, Target};

pub const HOST_PROMPT: &str = "Enter server IP (e.g., 127.0.0.1): ";
pub const PORT_PROMPT: &str = "Enter port (e.g., 30001): ";
pub const COUNT_PROMPT: &str = "How many times? ";

/// Prints `prompt` without a newline and reads one line.
/// Returns `None` at end of input; otherwise the line minus its terminator.
pub fn read_input<R, W>(input: &mut R, out: &mut W, prompt: &str) -> NetworkResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", prompt)?;
    out.flush()?;
    read_line(input)
}

/// Reads one line, stripping only `\n` / `\r\n`.
/// Bytes that are not UTF-8 are replaced, so a garbled line is just an unknown selection.
pub fn read_line<R: BufRead>(input: &mut R) -> NetworkResult<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Parses a port, allowing surrounding whitespace.
/// Only non-integers are rejected here; range is checked when an action connects.
pub fn parse_port(input: &str) -> NetworkResult<i32> {
    input
        .trim()
        .parse()
        .map_err(|_| NetworkError::InvalidPort(input.to_string()))
}

/// Parses the rapid open/close repetition count. Zero or negative means no attempts.
pub fn parse_count(input: &str) -> NetworkResult<i32> {
    input
        .trim()
        .parse()
        .map_err(|_| NetworkError::InvalidCount(input.to_string()))
}

/// Reads the server IP (or hostname) and port
pub fn target_input<R, W>(input: &mut R, out: &mut W) -> NetworkResult<Target>
where
    R: BufRead,
    W: Write,
{
    let host = read_input(input, out, HOST_PROMPT)?.ok_or(NetworkError::InputClosed)?;
    let port = read_input(input, out, PORT_PROMPT)?.ok_or(NetworkError::InputClosed)?;
    Ok(Target::new(host.trim(), parse_port(&port)?))
}

/// Asks how many rapid connections to make
pub fn count_input<R, W>(input: &mut R, out: &mut W) -> NetworkResult<i32>
where
    R: BufRead,
    W: Write,
{
    let count = read_input(input, out, COUNT_PROMPT)?.ok_or(NetworkError::InputClosed)?;
    parse_count(&count)
}
