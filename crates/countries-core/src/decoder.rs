//! Payload decoding for the country list
//!
//! The decoder is a capability so that the service can be tested with
//! doubles that return canned outcomes. The JSON implementation is strict on
//! required keys and primitive types, lenient on unknown keys, and treats a
//! missing payload as "no data" rather than as a failure.

use crate::errors::DecodeError;
use crate::models::Country;

pub trait CountriesDecoder: Send + Sync {
    /// Decode a raw payload.
    ///
    /// `None` means no payload was supplied and yields `Ok(None)`. A JSON
    /// `null` document yields `Ok(None)` as well; `[]` yields `Ok(Some(vec![]))`.
    fn decode(&self, bytes: Option<&[u8]>) -> Result<Option<Vec<Country>>, DecodeError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCountriesDecoder;

impl JsonCountriesDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl CountriesDecoder for JsonCountriesDecoder {
    fn decode(&self, bytes: Option<&[u8]>) -> Result<Option<Vec<Country>>, DecodeError> {
        let Some(bytes) = bytes else {
            log::debug!("No payload supplied, nothing to decode");
            return Ok(None);
        };

        match serde_json::from_slice::<Option<Vec<Country>>>(bytes) {
            Ok(countries) => {
                log::debug!(
                    "Decoded {} countries from {} bytes",
                    countries.as_ref().map_or(0, Vec::len),
                    bytes.len()
                );
                Ok(countries)
            }
            Err(e) => {
                let err = DecodeError::from(e);
                log::warn!("Rejected country payload: {}", err);
                Err(err)
            }
        }
    }
}
