//! Case harmonization between a matched original and its suggestion.

/// Whether the position `at` begins a sentence: only whitespace between it
/// and the start of the text or the previous `.`, `!` or `?`.
pub fn is_sentence_start(text: &str, at: usize) -> bool {
    if at == 0 {
        return true;
    }
    let Some(before) = text.get(..at) else {
        return false;
    };
    let before = before.trim_end();
    if before.is_empty() {
        return true;
    }
    before.ends_with(['.', '!', '?'])
}

/// Harmonize a suggestion's case with the original it replaces.
///
/// An all-uppercase original (containing at least one letter) uppercases
/// the whole suggestion. Otherwise the suggestion's first letter is
/// capitalized when the original's first character is not lowercase, or
/// when `capitalize` forces it (match at a sentence start).
pub fn match_case(original: &str, suggestion: &str, capitalize: bool) -> String {
    if original.is_empty() || suggestion.is_empty() {
        return suggestion.to_string();
    }
    let has_letter = original.chars().any(|c| c.is_alphabetic());
    if has_letter && original == original.to_uppercase() {
        return suggestion.to_uppercase();
    }
    let first_not_lower = original
        .chars()
        .next()
        .is_some_and(|c| !c.is_lowercase());
    if first_not_lower || capitalize {
        let mut chars = suggestion.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }
    suggestion.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_start_at_text_start() {
        assert!(is_sentence_start("Hello world", 0));
    }

    #[test]
    fn sentence_start_after_period_and_space() {
        let text = "Done. Next";
        assert!(is_sentence_start(text, 6));
    }

    #[test]
    fn sentence_start_after_exclamation() {
        let text = "Wow!  next";
        assert!(is_sentence_start(text, 6));
    }

    #[test]
    fn sentence_start_only_whitespace_before() {
        assert!(is_sentence_start("   word", 3));
    }

    #[test]
    fn not_sentence_start_mid_sentence() {
        let text = "the quick fox";
        assert!(!is_sentence_start(text, 4));
    }

    #[test]
    fn not_sentence_start_after_comma() {
        let text = "one, two";
        assert!(!is_sentence_start(text, 5));
    }

    #[test]
    fn match_case_lowercase_passthrough() {
        assert_eq!(match_case("recieve", "receive", false), "receive");
    }

    #[test]
    fn match_case_capitalized_original() {
        assert_eq!(match_case("Recieve", "receive", false), "Receive");
    }

    #[test]
    fn match_case_all_uppercase_original() {
        assert_eq!(match_case("RECIEVE", "receive", false), "RECEIVE");
    }

    #[test]
    fn match_case_forced_capitalization() {
        assert_eq!(match_case("recieve", "receive", true), "Receive");
    }

    #[test]
    fn match_case_single_letter_original_not_shouting() {
        // "I is" -> "I am": single uppercase letter originals like "I"
        // uppercase the whole suggestion only when it is genuinely all-caps.
        assert_eq!(match_case("I is", "I am", false), "I am");
    }

    #[test]
    fn match_case_empty_inputs() {
        assert_eq!(match_case("", "word", false), "word");
        assert_eq!(match_case("word", "", false), "");
    }

    #[test]
    fn match_case_multiword_suggestion() {
        assert_eq!(match_case("Alot", "a lot", false), "A lot");
    }
}
