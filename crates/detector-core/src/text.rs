//! Text normalization applied before tokenization.
//!
//! Must match the cleaning the tokenizer vocabulary was built with:
//! - lowercase everything
//! - drop every character that is neither a word character nor whitespace
//! - drop `\n` outright (adjacent lines are joined with no separator)
//!
//! A word character is a letter (`L*`), a number (`Nd`, `Nl`, `No`) or `_`.
//! Combining marks are not word characters, even on alphabetic scripts.
//! Whitespace is the Unicode `White_Space` set plus the ASCII separators `\x1c`..=`\x1f`.
//!
//! Leading and trailing whitespace is left alone; callers trim raw input first.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Normalize raw text for the tokenizer. Total: never fails, empty in, empty out.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || is_space(c))
        .filter(|&c| c != '\n')
        .collect()
}

fn is_word_char(c: char) -> bool {
    use GeneralCategory::*;
    c == '_'
        || matches!(
            get_general_category(c),
            UppercaseLetter
                | LowercaseLetter
                | TitlecaseLetter
                | ModifierLetter
                | OtherLetter
                | DecimalNumber
                | LetterNumber
                | OtherNumber
        )
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Trim raw input and reject it when nothing is left.
pub fn prepare_input(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
