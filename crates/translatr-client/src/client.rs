use translatr_types::{NewWord, StatusMessage, WordPair};

use crate::{ApiError, WordsApi};

/// HTTP client for the word service.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn words_url(&self) -> String {
        format!("{}/api/words", self.base_url)
    }

    fn word_url(&self, id: i64) -> String {
        format!("{}/api/words/{}", self.base_url, id)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status().as_u16()))
    }
}

#[async_trait::async_trait]
impl WordsApi for ApiClient {
    async fn list_words(&self) -> Result<Vec<WordPair>, ApiError> {
        let response = self.client.get(self.words_url()).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn create_word(&self, word: &NewWord) -> Result<WordPair, ApiError> {
        let response = self.client.post(self.words_url()).json(word).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn update_word(&self, id: i64, word: &NewWord) -> Result<StatusMessage, ApiError> {
        let response = self
            .client
            .put(self.word_url(id))
            .json(word)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn delete_word(&self, id: i64) -> Result<StatusMessage, ApiError> {
        let response = self.client.delete(self.word_url(id)).send().await?;
        Ok(check_status(response)?.json().await?)
    }
}
