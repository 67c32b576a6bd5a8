//! Success-response envelopes.
//!
//! Dropbox Sign nests the payload of a successful call under a named key and
//! may attach a top-level `warnings` array:
//!
//! ```json
//! { "signature_request": { ... }, "warnings": [{ "warning_msg": "...", "warning_name": "..." }] }
//! ```

use crate::error::{Result, TransportError, TransportErrorKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

const WARNINGS_KEY: &str = "warnings";

/// A non-fatal warning returned alongside a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Warning {
    /// Human-readable warning message.
    #[serde(rename = "warning_msg")]
    pub message: String,
    /// Machine-readable warning identifier.
    #[serde(rename = "warning_name")]
    pub name: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.name)
    }
}

/// Decoded payload of a successful call together with any warnings.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    /// The payload found under the requested key.
    pub payload: T,
    /// Warnings attached to the response. Empty when none were sent.
    pub warnings: Vec<Warning>,
}

impl<T> Envelope<T> {
    /// Discard the warnings and return the payload.
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Split into payload and warnings.
    pub fn into_parts(self) -> (T, Vec<Warning>) {
        (self.payload, self.warnings)
    }

    /// Returns true if the response carried at least one warning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Decode a successful response body, extracting the payload under `key`.
///
/// Fails with [`TransportErrorKind::MissingKey`] when `key` is absent and with
/// [`TransportErrorKind::Decode`] when the body or payload does not decode.
/// A `warnings` field that is not a valid warning list is dropped rather than
/// failing the call.
pub fn parse_envelope<T: DeserializeOwned>(body: &[u8], key: &str) -> Result<Envelope<T>> {
    let mut document: Map<String, Value> = serde_json::from_slice(body).map_err(|e| {
        TransportError::new(TransportErrorKind::Decode, "failed to decode response body")
            .with_source(e)
    })?;

    let raw_payload = document.remove(key).ok_or_else(|| {
        TransportError::new(
            TransportErrorKind::MissingKey,
            format!("missing key '{}' in response", key),
        )
    })?;

    let payload = serde_json::from_value(raw_payload).map_err(|e| {
        TransportError::new(
            TransportErrorKind::Decode,
            format!("failed to decode '{}' payload", key),
        )
        .with_source(e)
    })?;

    let warnings = match document.remove(WARNINGS_KEY) {
        None | Some(Value::Null) => Vec::new(),
        Some(raw) => serde_json::from_value(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring malformed warnings in response");
            Vec::new()
        }),
    };

    Ok(Envelope { payload, warnings })
}
