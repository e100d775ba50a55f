//! Tool configuration.

use std::path::Path;

use anyhow::Error;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
    value::Uncased,
};
use serde::{Deserialize, Serialize};

/// The default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.twitter.com/1.1/";

/// The default config file path.
pub const DEFAULT_CONFIG_PATH: &str = "./roost.toml";

/// The main configuration struct.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// API access configuration.
    pub api: ApiConfig,
}

impl Config {
    /// Loads a config from the environment and a given config path.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Config, Error> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("ROOST_").split("__"))
            .merge(
                Env::raw()
                    .only(&["ACCESS_TOKEN"])
                    .map(|k| Uncased::from(format!("API.{}", k))),
            )
            .extract()
            .map_err(Error::from)
    }
}

/// API connectivity config.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    /// The API endpoint, with a trailing slash.
    pub endpoint: String,
    /// The bearer token requests are made with.
    pub access_token: String,
    /// How many pages a single listing may fetch before giving up.
    ///
    /// `0` lifts the limit.
    pub max_pages: u32,
}

impl ApiConfig {
    /// The page limit, if there is one.
    pub fn page_limit(&self) -> Option<u32> {
        (self.max_pages > 0).then_some(self.max_pages)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            access_token: String::new(),
            max_pages: 500,
        }
    }
}
