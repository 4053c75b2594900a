//! # rb-config
//!
//! Runtime settings for the server binary, read from the environment
//! (and an optional `.env` file).
//!
//! | Variable          | Default   |
//! |-------------------|-----------|
//! | `PORT`            | `3000`    |
//! | `BLOG_HOST`       | `0.0.0.0` |
//! | `BLOG_PORT`       | (`PORT` wins when both are set) |
//! | `BLOG_STATIC_DIR` | `public`  |
//! | `BLOG_LOG_LEVEL`  | `info`    |

use std::collections::HashMap;
use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Settings {
    /// Loads `.env` if present, then reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        Self::from_vars(std::env::vars())
    }

    /// Builds settings from an explicit set of environment variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();
        let port = vars.get("PORT").cloned();

        Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("static_dir", DEFAULT_STATIC_DIR)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(Environment::with_prefix("BLOG").source(Some(vars.into_iter().collect())))
            .set_override_option("port", port)?
            .build()?
            .try_deserialize()
    }
}
