use std::io::{Read, Write};

use anyhow::{Result, ensure};
use figura::text::{WordsConfig, process_word, read_words};
use log::debug;

/// Reads all words from `input` and writes two lines per word to `out`:
/// the word with [`WordsConfig::old_char`] replaced, then its Latin letters merged with [`WordsConfig::merge_with`].
pub fn run(input: impl Read, out: &mut impl Write, config: &WordsConfig) -> Result<()> {
    let words = read_words(input)?;
    ensure!(!words.is_empty(), "empty input");
    debug!("[WORDS] read {} words", words.len());

    for word in &words {
        let (replaced, merged) = process_word(word, config);
        writeln!(out, "{replaced}")?;
        writeln!(out, "{merged}")?;
    }
    Ok(())
}
