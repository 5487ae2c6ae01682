//! Shape checking helpers for backend JSON.
//!
//! Wire structs deserialize with serde (missing required fields fail there),
//! then convert into domain types, which reports any
//! remaining shape problem as a [`SchemaError`].

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// A response body that does not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SchemaError(pub String);

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

/// A scalar the backend sends either as a JSON number or as text
/// (`"$1,299.00"`, `"4.5"`, `""`).
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Null(()),
}

impl Loose {
    fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => {
                let cleaned: String = s
                    .trim()
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect();
                cleaned.parse().ok()
            }
            Self::Null(()) => None,
        }
    }
}

/// Price as a number; unparseable text counts as zero.
pub fn price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Loose::deserialize(deserializer)?.to_f64().unwrap_or(0.0))
}

/// Optional decimal; blank or unparseable text is `None`.
pub fn loose_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Loose::deserialize(deserializer)?.to_f64())
}

/// Optional count; blank, negative or unparseable is `None`.
pub fn loose_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(Loose::deserialize(deserializer)?
        .to_f64()
        .filter(|n| *n >= 0.0)
        .map(|n| n as u64))
}

/// Optional text; blank is `None`.
pub fn non_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
