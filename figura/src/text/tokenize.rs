use std::io::Read;

use anyhow::{Context, Result};

// ASCII whitespace, plus the vertical tab which `char::is_ascii_whitespace` leaves out
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Splits `text` into words separated by ASCII whitespace or vertical tabs. Empty words are never produced.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_separator).filter(|w| !w.is_empty()).collect()
}

/// Reads `reader` to the end and returns its owned words.
/// Invalid UTF-8 sequences do not fail the read, they become U+FFFD inside their word.
pub fn read_words(mut reader: impl Read) -> Result<Vec<String>> {
    let mut bytes = vec![];
    reader
        .read_to_end(&mut bytes)
        .context("could not read input")?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(tokenize(&text).into_iter().map(str::to_owned).collect())
}
