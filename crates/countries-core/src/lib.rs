//! Fetch, decode and publish the remote country list.
//!
//! This crate implements the data pipeline behind a country browser: a single
//! HTTP GET against a JSON endpoint, a decoding layer with precise per-field
//! nullability rules, and an observable store that turns every refresh into
//! exactly one published outcome. Presentation concerns (lists, detail views,
//! pull-to-refresh) live outside and only consume the store's slots.
//!
//! # Architecture Overview
//!
//! - **Models**: immutable `Country`, `Currency` and `Language` values
//! - **Decoder**: bytes to `Option<Vec<Country>>`, strict on required keys
//! - **Transport**: pluggable GET capability with a reqwest implementation
//! - **Service**: endpoint validation and outcome mapping into [`FetchError`]
//! - **Store**: `countries` and `last_error` slots refreshed asynchronously
//! - **Configuration**: YAML settings with sensible defaults

pub mod config;
pub mod decoder;
pub mod errors;
pub mod models;
pub mod service;
pub mod store;
pub mod transport;

pub use config::{ConfigLoader, CountriesConfig};
pub use decoder::{CountriesDecoder, JsonCountriesDecoder};
pub use errors::{
    ConfigError, DecodeError, DecodeErrorCategory, FetchError, TransportError, TransportErrorKind,
};
pub use models::{Country, Currency, Language};
pub use service::{CountriesFetcher, CountriesService, DEFAULT_ENDPOINT};
pub use store::{CountriesStore, CountryList, Observable};
pub use transport::{HttpTransport, Transport};

#[cfg(test)]
pub mod test_utils;
