use std::sync::Arc;

use tokio::sync::RwLock;
use translatr_config::Config;
use translatr_core::{DictionaryView, TranslatorView};

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }
}

/// View state owned by the event loop.
#[derive(Default)]
pub struct Session {
    pub dictionary: DictionaryView,
    pub translator: TranslatorView,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}
