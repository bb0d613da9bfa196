mod letters;
mod tokenize;

use serde::{Deserialize, Serialize};

#[doc(inline)]
pub use letters::merge_latin_letters;
#[doc(inline)]
pub use letters::replace_chars;
#[doc(inline)]
pub use tokenize::read_words;
#[doc(inline)]
pub use tokenize::tokenize;

/// Configuration of the per-word transformations
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WordsConfig {
    /// Character to be replaced in every word
    pub old_char: char,
    /// Replacement for [`WordsConfig::old_char`]
    pub new_char: char,
    /// Fixed string whose Latin letters are merged with those of every word
    pub merge_with: String,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            old_char: 'c',
            new_char: 'b',
            merge_with: "def_ghk".to_string(),
        }
    }
}

/// The two output lines for `word`: the word after replacement, and its merged Latin letters.
pub fn process_word(word: &str, config: &WordsConfig) -> (String, String) {
    (
        replace_chars(word, config.old_char, config.new_char),
        merge_latin_letters(word, &config.merge_with),
    )
}
