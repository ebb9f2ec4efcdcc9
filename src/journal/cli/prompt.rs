use journal::config::JournalConfig;
use std::io::{self, BufRead, Write};

/// Read one line without its line ending. `None` at end of input.
pub(super) fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}

/// Show `prompt` (no newline) and read the answer.
pub(super) fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    read_line(input)
}

/// Collect body lines up to the end marker. End of input also ends the body.
pub(super) fn read_body<R: BufRead>(
    input: &mut R,
    config: &JournalConfig,
) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if config.is_end_marker(&line) {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}
