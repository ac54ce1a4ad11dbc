//! HTTP transport capability
//!
//! The service never talks to reqwest directly. It issues one GET through a
//! [`Transport`], which lets tests substitute an in-memory double and lets
//! embedders bring their own client.

use crate::errors::{TransportError, TransportErrorKind};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a single GET.
    ///
    /// The status code is not interpreted: whatever body the server sent is
    /// returned. `Ok(None)` means the response carried no body.
    async fn get(&self, url: &Url) -> Result<Option<Vec<u8>>, TransportError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<Option<Vec<u8>>, TransportError> {
        log::debug!("HttpTransport sending GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                log::error!("HTTP request to {} failed: {}", url, e);
                TransportError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {} returned {}, passing body on to the decoder", url, status);
        }

        let body = response.bytes().await.map_err(|e| {
            log::error!("Failed to read response body from {}: {}", url, e);
            TransportError::new(TransportErrorKind::Body, e.to_string())
        })?;

        log::debug!("HttpTransport received {} bytes ({})", body.len(), status);
        if body.is_empty() {
            Ok(None)
        } else {
            Ok(Some(body.to_vec()))
        }
    }
}
