use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A stored translation entry.
///
/// `id` is assigned by the store and immutable afterwards. It is optional on
/// the client side only: a row that somehow reaches the dictionary view
/// without an id is mutated locally instead of through the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub source: String,
    pub target: String,
}

/// Request body for creating or overwriting a word pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWord {
    pub source: String,
    pub target: String,
}

/// Generic success body for update/delete responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

/// Generic failure body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
}

/// The closed set of language labels offered by the translator view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Spanish,
    English,
    French,
    German,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Spanish,
        Language::English,
        Language::French,
        Language::German,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::Spanish => "Spanish",
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spanish" => Ok(Language::Spanish),
            "english" => Ok(Language::English),
            "french" => Ok(Language::French),
            "german" => Ok(Language::German),
            other => Err(format!(
                "unknown language '{other}' (expected spanish, english, french or german)"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    // ui -> app
    Translate(String),
    SwapLanguages,
    SetDirection { from: Language, to: Language },
    ShowDictionary,
    FilterWords(String),
    AddWord { source: String, target: String },
    EditWord { row: usize, source: String, target: String },
    DeleteWord { row: usize },
    ReloadWords,

    // app -> ui
    ShowTranslation {
        text: String,
        from: Language,
        to: Language,
    },
    ShowWords(Vec<WordPair>),
    ShowMessage(String),
    ShowError(String),
}
