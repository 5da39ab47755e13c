use translatr_types::{Language, WordPair};

use crate::lookup::find_translation;

/// Shown when the dictionary has no entry for the input. Informational, not
/// an error.
pub const NO_MATCH: &str = "No translation found in dictionary.";

/// Shown when translate is requested with empty input.
pub const EMPTY_INPUT: &str = "Please enter a word to translate.";

/// Shown when the word service cannot be reached. Deliberately distinct from
/// the no-match message.
pub const BACKEND_UNREACHABLE: &str = "Error contacting backend. Make sure the API is running.";

/// Client-side state of the translator view.
#[derive(Debug)]
pub struct TranslatorView {
    pub from: Language,
    pub to: Language,
    input: String,
    translation: Option<String>,
    error: Option<String>,
}

impl Default for TranslatorView {
    fn default() -> Self {
        Self {
            from: Language::Spanish,
            to: Language::English,
            input: String::new(),
            translation: None,
            error: None,
        }
    }
}

impl TranslatorView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a lookup: store the input and clear the previous result.
    /// Returns false (and sets the prompt message) when the input is empty,
    /// in which case no network call should be made.
    pub fn begin(&mut self, text: &str) -> bool {
        self.input = text.to_string();
        self.translation = None;
        self.error = None;

        if text.trim().is_empty() {
            self.error = Some(EMPTY_INPUT.to_string());
            return false;
        }
        true
    }

    /// Resolve the pending lookup against a fetched word list.
    pub fn apply(&mut self, words: &[WordPair]) {
        self.translation = Some(
            find_translation(words, &self.input, self.from, self.to)
                .unwrap_or_else(|| NO_MATCH.to_string()),
        );
    }

    /// Mark the pending lookup as failed to reach the service.
    pub fn fail(&mut self) {
        self.error = Some(BACKEND_UNREACHABLE.to_string());
    }

    /// Exchange the two language labels. Input text is untouched and no
    /// lookup is triggered.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub fn set_direction(&mut self, from: Language, to: Language) {
        self.from = from;
        self.to = to;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<WordPair> {
        vec![
            WordPair {
                id: Some(1),
                source: "casa".to_string(),
                target: "house".to_string(),
            },
            WordPair {
                id: Some(2),
                source: "perro".to_string(),
                target: "dog".to_string(),
            },
        ]
    }

    #[test]
    fn translate_resolves_against_snapshot() {
        let mut view = TranslatorView::new();
        assert!(view.begin("casa"));
        view.apply(&words());
        assert_eq!(view.translation(), Some("house"));
        assert_eq!(view.error(), None);
    }

    #[test]
    fn no_match_is_a_message_not_an_error() {
        let mut view = TranslatorView::new();
        assert!(view.begin("gato"));
        view.apply(&words());
        assert_eq!(view.translation(), Some(NO_MATCH));
        assert_eq!(view.error(), None);
    }

    #[test]
    fn empty_input_short_circuits() {
        let mut view = TranslatorView::new();
        assert!(!view.begin("   "));
        assert_eq!(view.error(), Some(EMPTY_INPUT));
        assert_eq!(view.translation(), None);
    }

    #[test]
    fn service_failure_is_distinct_from_no_match() {
        let mut view = TranslatorView::new();
        assert!(view.begin("casa"));
        view.fail();
        assert_eq!(view.error(), Some(BACKEND_UNREACHABLE));
        assert_ne!(view.error(), Some(NO_MATCH));
    }

    #[test]
    fn swap_exchanges_labels_only() {
        let mut view = TranslatorView::new();
        view.begin("casa");
        view.swap();
        assert_eq!(view.from, Language::English);
        assert_eq!(view.to, Language::Spanish);
        assert_eq!(view.input(), "casa");
        // Swapping must not produce a result on its own.
        assert_eq!(view.translation(), None);
    }

    #[test]
    fn swapped_direction_looks_up_the_other_column() {
        let mut view = TranslatorView::new();
        view.swap();
        view.begin("house");
        view.apply(&words());
        assert_eq!(view.translation(), Some("casa"));
    }
}
