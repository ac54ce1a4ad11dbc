//! Country list retrieval
//!
//! [`CountriesService`] performs exactly one GET per call and maps every
//! outcome into the closed [`FetchError`] set. Endpoint, transport and
//! decoder are all injected so each stage can be replaced independently.

use crate::config::CountriesConfig;
use crate::decoder::{CountriesDecoder, JsonCountriesDecoder};
use crate::errors::FetchError;
use crate::models::Country;
use crate::transport::{HttpTransport, Transport};
use async_trait::async_trait;
use reqwest::Url;
use std::sync::Arc;

pub const DEFAULT_ENDPOINT: &str = "https://gist.githubusercontent.com/peymano-wmt/32dcb892b06648910ddd40406e37fdab/raw/db25946fd77c5873b0303b858e861ce724e0dcd0/countries.json";

/// Source of country lists consumed by the store.
#[async_trait]
pub trait CountriesFetcher: Send + Sync {
    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError>;
}

pub struct CountriesService {
    endpoint: String,
    transport: Arc<dyn Transport>,
    decoder: Arc<dyn CountriesDecoder>,
}

impl CountriesService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_components(
            endpoint,
            Arc::new(HttpTransport::new()),
            Arc::new(JsonCountriesDecoder::new()),
        )
    }

    pub fn with_components(
        endpoint: impl Into<String>,
        transport: Arc<dyn Transport>,
        decoder: Arc<dyn CountriesDecoder>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            decoder,
        }
    }

    pub fn from_config(config: &CountriesConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode the country list served at `endpoint`.
    pub async fn fetch_from(&self, endpoint: &str) -> Result<Vec<Country>, FetchError> {
        let url = parse_endpoint(endpoint).ok_or_else(|| {
            log::error!("Refusing to fetch from invalid endpoint '{}'", endpoint);
            FetchError::InvalidUrl(endpoint.to_string())
        })?;

        log::info!("Fetching countries from {}", url);
        let body = self.transport.get(&url).await.map_err(|e| {
            log::error!("Transport failure fetching countries: {}", e);
            FetchError::TransportFailure(e)
        })?;

        let Some(body) = body.filter(|bytes| !bytes.is_empty()) else {
            log::warn!("Countries endpoint {} returned no body", url);
            return Err(FetchError::EmptyBody);
        };

        match self.decoder.decode(Some(&body)) {
            Ok(Some(countries)) => {
                log::info!("Fetched {} countries", countries.len());
                Ok(countries)
            }
            Ok(None) => {
                log::info!("Countries payload was null, treating as an empty list");
                Ok(Vec::new())
            }
            Err(e) => {
                log::error!("Failed to decode countries payload: {}", e);
                Err(FetchError::DecodingFailure)
            }
        }
    }
}

impl Default for CountriesService {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl CountriesFetcher for CountriesService {
    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        self.fetch_from(&self.endpoint).await
    }
}

/// Accepts only absolute URLs that name a host.
fn parse_endpoint(endpoint: &str) -> Option<Url> {
    Url::parse(endpoint).ok().filter(Url::has_host)
}
