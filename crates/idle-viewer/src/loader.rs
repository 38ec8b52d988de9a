// File: crates/idle-viewer/src/loader.rs
// Summary: Data loader: one GET of the full player dataset.

use async_trait::async_trait;
use idle_data::PlayerDataset;
use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::debug;

/// Fixed endpoint, resolved against the server root like a page-relative request.
pub const PLAYERS_PATH: &str = "/api/players";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid server url {url:?}: {reason}")]
    BadUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {status}")]
    Status { url: Url, status: StatusCode },

    #[error("malformed player data from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of the player dataset.
#[async_trait]
pub trait PlayerLoader: Send + Sync {
    async fn load(&self) -> Result<PlayerDataset, LoadError>;
}

/// Fetches `<base>/api/players`. No retries, no timeout, no custom headers.
#[derive(Clone, Debug)]
pub struct HttpLoader {
    client: reqwest::Client,
    url: Url,
}

impl HttpLoader {
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, LoadError> {
        let bad = |reason: String| LoadError::BadUrl { url: base_url.to_owned(), reason };
        let base = Url::parse(base_url).map_err(|e| bad(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(bad("not a base url".into()));
        }
        let url = base.join(PLAYERS_PATH).map_err(|e| bad(e.to_string()))?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url { &self.url }
}

#[async_trait]
impl PlayerLoader for HttpLoader {
    async fn load(&self) -> Result<PlayerDataset, LoadError> {
        let url = self.url.clone();
        debug!(%url, "requesting player data");
        let transport = |source| LoadError::Transport { url: url.clone(), source };

        let response = self.client.get(url.clone()).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { url: url.clone(), status });
        }
        let body = response.bytes().await.map_err(transport)?;
        let dataset: PlayerDataset =
            serde_json::from_slice(&body).map_err(|source| LoadError::Decode { url: url.clone(), source })?;
        debug!(%url, players = dataset.len(), bytes = body.len(), "player data received");
        Ok(dataset)
    }
}
