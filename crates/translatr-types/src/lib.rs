pub mod types;

pub use types::{AppEvent, ErrorMessage, Language, NewWord, StatusMessage, WordPair};
