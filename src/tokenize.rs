// src/tokenize.rs

use once_cell::sync::Lazy;
use regex::Regex;

// Word characters plus apostrophe, fenced by word boundaries. A match can
// neither start nor end on the apostrophe itself.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[\w']+\b").unwrap());

/// Split a text blob into word tokens, in order, original casing kept.
/// A token is cut at its first apostrophe: possessive suffixes drop off,
/// and so do the tails of genuine contractions ("don't" → "don").
pub fn words(text: &str) -> Vec<&str> {
    WORD_RE
        .find_iter(text)
        .map(|m| trim_apostrophe(m.as_str()))
        .collect()
}

fn trim_apostrophe(word: &str) -> &str {
    match word.find('\'') {
        Some(i) => &word[..i],
        None => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_non_word_chars() {
        assert_eq!(words("Bob ate jellyfish."), vec!["Bob", "ate", "jellyfish"]);
        assert_eq!(words("na-ja, SpongeBob!"), vec!["na", "ja", "SpongeBob"]);
    }

    #[test]
    fn truncates_at_first_apostrophe() {
        assert_eq!(words("don't"), vec!["don"]);
        assert_eq!(words("O'Brien"), vec!["O"]);
        assert_eq!(words("Bobs' Haus"), vec!["Bobs", "Haus"]);
    }

    #[test]
    fn keeps_underscores_and_digits() {
        assert_eq!(words("mr_krabs hat 42 Taler"), vec!["mr_krabs", "hat", "42", "Taler"]);
    }

    #[test]
    fn handles_umlauts() {
        assert_eq!(words("Thaddäus Tentakel"), vec!["Thaddäus", "Tentakel"]);
    }

    #[test]
    fn stray_apostrophes_yield_no_tokens() {
        assert_eq!(words("'' ' ''"), Vec::<&str>::new());
    }

    #[test]
    fn order_and_casing_are_preserved() {
        assert_eq!(words("Bob bob BOB"), vec!["Bob", "bob", "BOB"]);
    }
}
