use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::server::ServerConfig;

pub mod api;
pub mod server;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Build a config from the process environment, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig::from_env(),
            api: ApiConfig::from_env(),
        }
    }
}
