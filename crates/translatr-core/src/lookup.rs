use translatr_types::{Language, WordPair};

/// Find an exact, case-insensitive translation for `query` in the requested
/// direction.
///
/// The word table stores Spanish terms in `source` and English terms in
/// `target`. Any direction outside that pairing matches either field and
/// returns the opposite one.
pub fn find_translation(
    words: &[WordPair],
    query: &str,
    from: Language,
    to: Language,
) -> Option<String> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return None;
    }

    match (from, to) {
        (Language::Spanish, Language::English) => words
            .iter()
            .find(|w| w.source.to_lowercase() == term)
            .map(|w| w.target.clone()),
        (Language::English, Language::Spanish) => words
            .iter()
            .find(|w| w.target.to_lowercase() == term)
            .map(|w| w.source.clone()),
        _ => words.iter().find_map(|w| {
            if w.source.to_lowercase() == term {
                Some(w.target.clone())
            } else if w.target.to_lowercase() == term {
                Some(w.source.clone())
            } else {
                None
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(id: i64, source: &str, target: &str) -> WordPair {
        WordPair {
            id: Some(id),
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    fn sample() -> Vec<WordPair> {
        vec![pair(1, "casa", "house"), pair(2, "perro", "dog")]
    }

    #[test]
    fn spanish_to_english_matches_source() {
        let words = sample();
        let found = find_translation(&words, "casa", Language::Spanish, Language::English);
        assert_eq!(found.as_deref(), Some("house"));
    }

    #[test]
    fn english_to_spanish_matches_target() {
        let words = sample();
        let found = find_translation(&words, "dog", Language::English, Language::Spanish);
        assert_eq!(found.as_deref(), Some("perro"));
    }

    #[test]
    fn match_is_case_insensitive_and_trimmed() {
        let words = sample();
        let found = find_translation(&words, "  CASA ", Language::Spanish, Language::English);
        assert_eq!(found.as_deref(), Some("house"));
    }

    #[test]
    fn unknown_word_finds_nothing() {
        let words = sample();
        let found = find_translation(&words, "gato", Language::Spanish, Language::English);
        assert_eq!(found, None);
    }

    #[test]
    fn other_pairings_match_either_field() {
        let words = sample();
        // French -> German is not the stored direction; either column matches
        // and the opposite one comes back.
        let via_source = find_translation(&words, "casa", Language::French, Language::German);
        assert_eq!(via_source.as_deref(), Some("house"));
        let via_target = find_translation(&words, "house", Language::French, Language::German);
        assert_eq!(via_target.as_deref(), Some("casa"));
    }

    #[test]
    fn empty_query_finds_nothing() {
        let words = sample();
        assert_eq!(
            find_translation(&words, "   ", Language::Spanish, Language::English),
            None
        );
    }
}
