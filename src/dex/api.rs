//! Data source seam and the PokeAPI HTTP client behind it.
//!
//! The roller only needs "creature by id" and "species by id"; [`DexSource`]
//! abstracts that so tests can feed fixtures. [`PokeApiClient`] is the real
//! implementation: plain GETs, no auth, no caching, no retries.

use std::future::Future;
use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;
use tokio::time::timeout;

use super::errors::RollError;
use super::payload::{CreaturePayload, SpeciesPayload};
use crate::config::ApiConfig;
use crate::logutil::single_line;

/// Where a roll gets its two payloads from.
pub trait DexSource {
    fn creature(&self, id: u32) -> impl Future<Output = Result<CreaturePayload, RollError>> + Send;
    fn species(&self, id: u32) -> impl Future<Output = Result<SpeciesPayload, RollError>> + Send;
}

pub struct PokeApiClient {
    base_url: String,
    timeout_seconds: u64,
    client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (proxy settings, custom TLS, tests).
    pub fn with_client(config: &ApiConfig, client: reqwest::Client) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_seconds: config.timeout_seconds as u64,
            client,
        }
    }

    pub fn creature_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }

    pub fn species_url(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, RollError> {
        debug!("GET {}", url);
        let limit = Duration::from_secs(self.timeout_seconds);

        let response = timeout(limit, self.client.get(&url).send())
            .await
            .map_err(|_| RollError::Timeout {
                url: url.clone(),
                seconds: self.timeout_seconds,
            })??;

        let status = response.status();
        if !status.is_success() {
            return Err(RollError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = timeout(limit, response.text())
            .await
            .map_err(|_| RollError::Timeout {
                url: url.clone(),
                seconds: self.timeout_seconds,
            })??;

        serde_json::from_str(&body).map_err(|source| {
            debug!("Undecodable body from {}: {}", url, single_line(&body));
            RollError::Decode { url, source }
        })
    }
}

impl DexSource for PokeApiClient {
    async fn creature(&self, id: u32) -> Result<CreaturePayload, RollError> {
        self.get_json(self.creature_url(id)).await
    }

    async fn species(&self, id: u32) -> Result<SpeciesPayload, RollError> {
        self.get_json(self.species_url(id)).await
    }
}
