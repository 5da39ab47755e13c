mod client;

pub use client::ApiClient;

use translatr_types::{NewWord, StatusMessage, WordPair};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),
}

/// Word service operations as seen by the client views.
///
/// The terminal app talks to this trait so its event handlers can run
/// against an in-memory fake in tests.
#[async_trait::async_trait]
pub trait WordsApi: Send + Sync {
    /// Fetch every stored word pair
    async fn list_words(&self) -> Result<Vec<WordPair>, ApiError>;

    /// Create a pair, returning it with the assigned id
    async fn create_word(&self, word: &NewWord) -> Result<WordPair, ApiError>;

    /// Overwrite both fields of the pair matching `id`
    async fn update_word(&self, id: i64, word: &NewWord) -> Result<StatusMessage, ApiError>;

    /// Remove the pair matching `id`
    async fn delete_word(&self, id: i64) -> Result<StatusMessage, ApiError>;
}
