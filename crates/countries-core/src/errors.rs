//! Error types for every stage of the countries pipeline
//!
//! Each layer owns a small closed taxonomy. The transport reports what went
//! wrong on the wire, the decoder reports why a payload was rejected, and the
//! service folds both into [`FetchError`], the only error the store ever
//! publishes. All of them are plain values: cloneable and comparable so that
//! observers and tests can match on the exact outcome of a refresh.

use std::fmt;
use thiserror::Error;

/// Terminal outcome of a failed fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
    #[error("Response contained no body")]
    EmptyBody,
    #[error("Transport failure: {0}")]
    TransportFailure(TransportError),
    #[error("Response body could not be decoded")]
    DecodingFailure,
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::TransportFailure(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// The connection could not be established.
    Connect,
    /// The request failed before a response arrived.
    Request,
    /// The response body could not be read.
    Body,
    /// A client-level status failure (e.g. from `error_for_status`).
    Status(u16),
    /// Any fault the client could not classify.
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::Connect => write!(f, "connect"),
            TransportErrorKind::Request => write!(f, "request"),
            TransportErrorKind::Body => write!(f, "body"),
            TransportErrorKind::Status(code) => write!(f, "status {}", code),
            TransportErrorKind::Other => write!(f, "other"),
        }
    }
}

/// Network-level fault reported by a [`Transport`](crate::transport::Transport).
///
/// The original cause is kept as its kind plus the underlying message so the
/// error stays comparable after it has crossed the store boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} error: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            TransportErrorKind::Status(code) => Some(code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if let Some(status) = err.status() {
            TransportErrorKind::Status(status.as_u16())
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::Body
        } else if err.is_request() || err.is_builder() || err.is_redirect() {
            TransportErrorKind::Request
        } else {
            TransportErrorKind::Other
        };
        TransportError::new(kind, err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorCategory {
    /// Bytes are not syntactically valid JSON.
    Syntax,
    /// Valid JSON that does not match the country schema.
    Data,
    /// Input ended in the middle of a value.
    Eof,
    /// Reading the input itself failed.
    Io,
}

impl fmt::Display for DecodeErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecodeErrorCategory::Syntax => "syntax",
            DecodeErrorCategory::Data => "data",
            DecodeErrorCategory::Eof => "eof",
            DecodeErrorCategory::Io => "io",
        };
        f.write_str(name)
    }
}

/// A payload was present but could not be turned into countries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Decoding failed ({category}): {message}")]
pub struct DecodeError {
    pub category: DecodeErrorCategory,
    pub message: String,
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let category = match err.classify() {
            Category::Syntax => DecodeErrorCategory::Syntax,
            Category::Data => DecodeErrorCategory::Data,
            Category::Eof => DecodeErrorCategory::Eof,
            Category::Io => DecodeErrorCategory::Io,
        };
        DecodeError {
            category,
            message: err.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(String),
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
