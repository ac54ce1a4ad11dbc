//! Country data model
//!
//! Values are created by decoding a payload (or directly in tests) and are
//! never mutated afterwards. Only `Currency::symbol` and `Language::code` are
//! optional; every other key must be present in the payload.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    /// Absent and `null` both decode to `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Currency {
    pub fn new(code: impl Into<String>, name: impl Into<String>, symbol: Option<&str>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            symbol: symbol.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
}

impl Language {
    pub fn new(code: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            code: code.map(str::to_string),
            name: name.into(),
        }
    }
}

/// A single entry of the remote country list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub capital: String,
    pub code: String,
    pub currency: Currency,
    pub flag: String,
    pub language: Language,
    pub name: String,
    pub region: String,
}

impl Country {
    /// Case-insensitive match of `query` against the name or the capital.
    ///
    /// A blank query matches every country.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.capital.to_lowercase().contains(&needle)
    }
}
