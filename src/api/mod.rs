use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::*;

use crate::config::Config;
use crate::storage::{SessionStore, StorageError};

pub mod properties;
pub mod loader;

/// Client for the `/api/properties/` endpoints. Cloning is cheap and clones share the cookie jar and session store.
#[derive(Clone)]
pub struct PropertyApi {
    client: Client,
    api_url: String,
    store: Arc<dyn SessionStore>,
}

#[derive(Error, Debug)]
pub enum PropertyError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("Failed to fetch property")]
    FetchFailed,
    #[error("Failed to create property")]
    CreateFailed,
    #[error("Invalid property ID")]
    InvalidId,
    #[error("Invalid api url {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Could not serialize property : {0}")]
    Serde(#[from] serde_json::Error),
}

impl PropertyApi {
    /// Builds a client that keeps cookies between requests, seeded with the configured ones.
    #[instrument(name = "property_api_init", skip(config, store), fields(api_url = %config.api_url))]
    pub fn new(config: &Config, store: Arc<dyn SessionStore>) -> Result<Self, PropertyError> {
        let jar = Arc::new(Jar::default());
        if let Some(cookie) = &config.cookie {
            let url = Url::parse(&config.api_url).map_err(|err| PropertyError::InvalidUrl(format!("{} : {}", config.api_url, err)))?;
            for pair in cookie.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
                jar.add_cookie_str(pair, &url);
            }
            debug!("Seeded cookie jar for {}", url);
        }

        let client = Client::builder().cookie_provider(jar).build()?;
        Ok(PropertyApi::with_client(client, &config.api_url, store))
    }

    pub fn with_client(client: Client, api_url: &str, store: Arc<dyn SessionStore>) -> Self {
        PropertyApi {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    fn properties_url(&self) -> String {
        format!("{}/api/properties", self.api_url)
    }
}
