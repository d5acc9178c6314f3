//! Word tokenization and scan-time policy filters.

/// A word token with its half-open byte span in the source text.
///
/// Produced fresh per scan, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub word: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split text into word tokens: maximal runs of ASCII letters and
/// apostrophes.
///
/// Single-character tokens other than "I" and "a" are dropped, as are
/// tokens consisting entirely of apostrophes.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if is_word_byte(bytes[i]) {
            let start = i;
            while i < bytes.len() && is_word_byte(bytes[i]) {
                i += 1;
            }
            let word = &text[start..i];
            if word.len() == 1 && word != "I" && word != "a" {
                continue;
            }
            if word.bytes().all(|b| b == b'\'') {
                continue;
            }
            tokens.push(Token {
                word,
                start,
                end: i,
            });
        } else {
            i += 1;
        }
    }
    tokens
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'\''
}

/// Whether a token should be exempt from spell checking: numbers, email
/// addresses, URLs, and single characters.
pub fn is_skippable(word: &str) -> bool {
    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    if word.contains('@') {
        return true;
    }
    let lower = word.to_ascii_lowercase();
    if lower.starts_with("http") {
        return true;
    }
    word.len() <= 1
}

/// Heuristic proper-noun detection: a capitalized word that is not at the
/// start of the text and not right after sentence-ending punctuation.
///
/// Only the last three characters before the word are inspected, so
/// punctuation further back does not count. False positives and negatives
/// are accepted trade-offs.
pub fn is_likely_proper_noun(word: &str, start: usize, text: &str) -> bool {
    let Some(first) = word.chars().next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    if start == 0 {
        return false;
    }
    let Some(prefix) = text.get(..start) else {
        return false;
    };
    let window: String = {
        let mut tail: Vec<char> = prefix.chars().rev().take(3).collect();
        tail.reverse();
        tail.into_iter().collect()
    };
    let trimmed = window.trim_end();
    if trimmed.ends_with(['.', '!', '?']) {
        return false;
    }
    true
}
