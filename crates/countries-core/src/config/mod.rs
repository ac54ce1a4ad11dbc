//! Configuration for the countries pipeline
//!
//! Settings are read from YAML and fall back to defaults for every key, so an
//! empty document yields a working configuration pointing at the public
//! country list.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;


use crate::errors::ConfigError;
use std::path::Path;

/// Load a configuration from a YAML file
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<CountriesConfig, ConfigError> {
    ConfigLoader::from_file(path).await
}
