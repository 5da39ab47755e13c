use std::env;

use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_db_path() -> String {
    "translatr.db".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the word service listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Path of the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            db_path: default_db_path(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("TRANSLATR_BIND").unwrap_or_else(|_| default_bind_addr());
        let db_path = env::var("TRANSLATR_DB").unwrap_or_else(|_| default_db_path());
        Self { bind_addr, db_path }
    }
}
