//! Configuration type definitions

use crate::errors::ConfigError;
use crate::service::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountriesConfig {
    /// URL of the JSON document holding the country list.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for CountriesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl CountriesConfig {
    /// Reject settings that can never work.
    ///
    /// URL syntax is checked by the service, which reports it as
    /// `FetchError::InvalidUrl` at fetch time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".to_string()));
        }
        Ok(())
    }
}
