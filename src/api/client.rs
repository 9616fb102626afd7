use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tokio::time::timeout;

use crate::api::error::FetchError;
use crate::api::types::Pokemon;
use crate::config::ApiConfig;

const USER_AGENT: &str = concat!("pokecard/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce a record for a numeric id.
///
/// The orchestrator only talks to this trait, so tests can swap the HTTP
/// client for an in-memory source.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    async fn fetch(&self, id: u16) -> Result<Pokemon, FetchError>;
}

pub struct PokeApiClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl PokeApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| FetchError::Build { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/{id}`
    pub fn record_url(&self, id: u16) -> Result<Url, FetchError> {
        let url = format!("{}/{}", self.base_url, id);
        Url::parse(&url).map_err(|_| FetchError::InvalidUrl { url })
    }

    async fn do_fetch(&self, id: u16) -> Result<Pokemon, FetchError> {
        let url = self.record_url(id)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Connection { id, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                id,
                status: status.as_u16(),
            });
        }

        response
            .json::<Pokemon>()
            .await
            .map_err(|source| FetchError::Decode { id, source })
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    async fn fetch(&self, id: u16) -> Result<Pokemon, FetchError> {
        match timeout(self.request_timeout, self.do_fetch(id)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                id,
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}
