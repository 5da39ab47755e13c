use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::time::Duration;

use kanal::AsyncReceiver;
use tokio::time::timeout;
use translatr_client::{ApiError, WordsApi};
use translatr_types::{AppEvent, NewWord, StatusMessage, WordPair};

/// In-memory stand-in for the word service.
pub struct MockApi {
    words: Mutex<Vec<WordPair>>,
    next_id: AtomicI64,
    pub fail: AtomicBool,
    pub calls: AtomicUsize,
}

impl MockApi {
    pub fn new(words: Vec<WordPair>) -> Self {
        let next_id = words.iter().filter_map(|w| w.id).max().unwrap_or(0) + 1;
        Self {
            words: Mutex::new(words),
            next_id: AtomicI64::new(next_id),
            fail: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn words(&self) -> Vec<WordPair> {
        self.words.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            Err(ApiError::Status(500))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl WordsApi for MockApi {
    async fn list_words(&self) -> Result<Vec<WordPair>, ApiError> {
        self.check()?;
        Ok(self.words())
    }

    async fn create_word(&self, word: &NewWord) -> Result<WordPair, ApiError> {
        self.check()?;
        let pair = WordPair {
            id: Some(self.next_id.fetch_add(1, Ordering::SeqCst)),
            source: word.source.clone(),
            target: word.target.clone(),
        };
        self.words.lock().unwrap().push(pair.clone());
        Ok(pair)
    }

    async fn update_word(&self, id: i64, word: &NewWord) -> Result<StatusMessage, ApiError> {
        self.check()?;
        for pair in self
            .words
            .lock()
            .unwrap()
            .iter_mut()
            .filter(|w| w.id == Some(id))
        {
            pair.source = word.source.clone();
            pair.target = word.target.clone();
        }
        Ok(StatusMessage {
            message: "Updated successfully".to_string(),
        })
    }

    async fn delete_word(&self, id: i64) -> Result<StatusMessage, ApiError> {
        self.check()?;
        self.words.lock().unwrap().retain(|w| w.id != Some(id));
        Ok(StatusMessage {
            message: "Deleted successfully".to_string(),
        })
    }
}

pub fn pair(id: i64, source: &str, target: &str) -> WordPair {
    WordPair {
        id: Some(id),
        source: source.to_string(),
        target: target.to_string(),
    }
}

pub fn local_pair(source: &str, target: &str) -> WordPair {
    WordPair {
        id: None,
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// Receive the next ui-bound event or panic after two seconds.
pub async fn next_event(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}
