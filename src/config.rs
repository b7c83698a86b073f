use std::env::{var, VarError};
use std::path::PathBuf;

use reqwest::Url;
use thiserror::Error;
use tracing::*;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SESSION_FILE: &str = ".property-session.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Origin the `/api/properties/` paths are resolved against, without trailing slash.
    pub api_url: String,
    pub session_file: PathBuf,
    /// Cookies sent with every request, `name=value; other=value`.
    pub cookie: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read environment variable : {0}")]
    Var(#[from] VarError),
    #[error("Invalid api url {0} : {1}")]
    Url(String, String),
}

impl Config {
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        Url::parse(api_url).map_err(|err| ConfigError::Url(api_url.to_string(), err.to_string()))?;
        Ok(Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            cookie: None,
        })
    }

    #[instrument(name = "config_init", fields(api_url = field::Empty))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::new(&optional_var("PROPERTY_API_URL")?.unwrap_or(DEFAULT_API_URL.to_string()))?;
        Span::current().record("api_url", &config.api_url.as_str());

        if let Some(file) = optional_var("PROPERTY_SESSION_FILE")? {
            config.session_file = PathBuf::from(file);
        }
        config.cookie = optional_var("PROPERTY_API_COOKIE")?.filter(|c| !c.trim().is_empty());

        debug!("Loaded configuration, session file {}", config.session_file.display());
        Ok(config)
    }
}

fn optional_var(key: &str) -> Result<Option<String>, VarError> {
    match var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err),
    }
}
