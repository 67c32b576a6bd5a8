//! Error types for the Dropbox Sign SDK.
//!
//! Every failed call produces exactly one [`DropboxSignError`], which is either
//! a structured [`ApiError`] reported by the remote service or a local
//! [`TransportError`] (network, serialization, malformed body, cancellation).

use serde::Deserialize;
use thiserror::Error;

/// Result type for Dropbox Sign operations.
pub type Result<T> = std::result::Result<T, DropboxSignError>;

const NOT_FOUND: u16 = 404;
const BAD_REQUEST: u16 = 400;
const UNAUTHORIZED: u16 = 401;

/// Errors that can occur when using the Dropbox Sign SDK.
#[derive(Error, Debug)]
pub enum DropboxSignError {
    /// Structured error returned by the Dropbox Sign API.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Local or protocol-level failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl DropboxSignError {
    /// Returns the HTTP status code if available.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DropboxSignError::Api(e) => Some(e.status_code),
            DropboxSignError::Transport(e) => e.status_code,
        }
    }

    /// Returns true if this is a 404 Not Found error.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(NOT_FOUND)
    }

    /// Returns true if this is a 400 Bad Request error.
    pub fn is_bad_request(&self) -> bool {
        self.status_code() == Some(BAD_REQUEST)
    }

    /// Returns true if this is a 401 Unauthorized error.
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(UNAUTHORIZED)
    }

    /// Returns true if the call was abandoned because of a cancellation signal.
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            DropboxSignError::Transport(TransportError {
                kind: TransportErrorKind::Cancelled,
                ..
            })
        )
    }

    /// Returns the API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            DropboxSignError::Api(e) => Some(e),
            DropboxSignError::Transport(_) => None,
        }
    }

    /// Returns the transport error, if this is one.
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            DropboxSignError::Api(_) => None,
            DropboxSignError::Transport(e) => Some(e),
        }
    }
}

/// Structured error reported by the Dropbox Sign API for a rejected request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name}{}: {message}", path_suffix(.path))]
pub struct ApiError {
    /// HTTP status code of the response that carried the error.
    pub status_code: u16,
    /// Machine-readable error identifier (e.g. `not_found`).
    pub name: String,
    /// Human-readable error message.
    pub message: String,
    /// Path to the offending request field (e.g. `signers[0].email_address`).
    pub path: Option<String>,
}

impl ApiError {
    /// Returns the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        Some(self.status_code)
    }

    /// Returns true if this is a 404 Not Found error.
    pub fn is_not_found(&self) -> bool {
        self.status_code == NOT_FOUND
    }

    /// Returns true if this is a 400 Bad Request error.
    pub fn is_bad_request(&self) -> bool {
        self.status_code == BAD_REQUEST
    }

    /// Returns true if this is a 401 Unauthorized error.
    pub fn is_unauthorized(&self) -> bool {
        self.status_code == UNAUTHORIZED
    }
}

fn path_suffix(path: &Option<String>) -> String {
    match path.as_deref() {
        Some(path) if !path.is_empty() => format!(" ({})", path),
        _ => String::new(),
    }
}

/// Category of a [`TransportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Invalid client configuration.
    Config,
    /// The request body could not be serialized.
    Serialize,
    /// The request could not be built or sent.
    Request,
    /// The HTTP client timed out.
    Timeout,
    /// A caller-supplied cancellation signal fired before completion.
    Cancelled,
    /// The response body could not be read.
    ReadBody,
    /// The success envelope did not contain the expected key.
    MissingKey,
    /// The success body or payload could not be decoded.
    Decode,
    /// A non-success response carried an unparseable error body.
    MalformedErrorBody,
}

/// Local or protocol-level failure that did not come from a structured API error.
#[derive(Error, Debug)]
#[error("dropbox sign client error{}", transport_detail(.status_code, .message, .source))]
pub struct TransportError {
    /// What went wrong.
    pub kind: TransportErrorKind,
    /// Human-readable description.
    pub message: String,
    /// HTTP status code, when a response was received.
    pub status_code: Option<u16>,
    #[source]
    source: Option<BoxError>,
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// The status is shown in place of the cause when a response was received.
fn transport_detail(status_code: &Option<u16>, message: &str, source: &Option<BoxError>) -> String {
    match (status_code, source) {
        (Some(status), _) => format!(" (status {}): {}", status, message),
        (None, Some(source)) => format!(": {}: {}", message, source),
        (None, None) => format!(": {}", message),
    }
}

impl TransportError {
    /// Create a transport error without an underlying cause.
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            source: None,
        }
    }

    /// Attach the HTTP status code of the response.
    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Attach the underlying cause.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the HTTP status code if available.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Returns true if this is a 404 Not Found error.
    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(NOT_FOUND)
    }

    /// Returns true if this is a 400 Bad Request error.
    pub fn is_bad_request(&self) -> bool {
        self.status_code == Some(BAD_REQUEST)
    }

    /// Returns true if this is a 401 Unauthorized error.
    pub fn is_unauthorized(&self) -> bool {
        self.status_code == Some(UNAUTHORIZED)
    }

    /// Map a `reqwest` send failure, keeping timeouts distinguishable.
    pub(crate) fn from_reqwest(context: &str, err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else {
            TransportErrorKind::Request
        };
        let status = err.status().map(|s| s.as_u16());
        let mut transport = Self::new(kind, context).with_source(err);
        transport.status_code = status;
        transport
    }
}

/// Extract a status code from any of this crate's error types.
fn status_of(err: &(dyn std::error::Error + 'static)) -> Option<u16> {
    if let Some(e) = err.downcast_ref::<DropboxSignError>() {
        return e.status_code();
    }
    if let Some(e) = err.downcast_ref::<ApiError>() {
        return e.status_code();
    }
    if let Some(e) = err.downcast_ref::<TransportError>() {
        return e.status_code();
    }
    None
}

/// Returns true if `err` is a Dropbox Sign error with status 404.
///
/// Errors that do not come from this crate always return false.
pub fn is_not_found(err: &(dyn std::error::Error + 'static)) -> bool {
    status_of(err) == Some(NOT_FOUND)
}

/// Returns true if `err` is a Dropbox Sign error with status 400.
pub fn is_bad_request(err: &(dyn std::error::Error + 'static)) -> bool {
    status_of(err) == Some(BAD_REQUEST)
}

/// Returns true if `err` is a Dropbox Sign error with status 401.
pub fn is_unauthorized(err: &(dyn std::error::Error + 'static)) -> bool {
    status_of(err) == Some(UNAUTHORIZED)
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_msg: String,
    #[serde(default)]
    error_name: String,
    #[serde(default)]
    error_path: Option<String>,
}

/// Convert the body of a non-success response into a typed error.
///
/// A well-formed `{"error": {...}}` body becomes an [`ApiError`] carrying
/// `status_code`; the service does not echo the status inside the body.
/// Anything else becomes a [`TransportError`] that still carries the status.
pub fn classify_error(body: &[u8], status_code: u16) -> DropboxSignError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            tracing::debug!(
                status = status_code,
                name = %envelope.error.error_name,
                "API returned an error"
            );
            ApiError {
                status_code,
                name: envelope.error.error_name,
                message: envelope.error.error_msg,
                path: envelope.error.error_path,
            }
            .into()
        }
        Err(e) => {
            let raw = String::from_utf8_lossy(body);
            tracing::error!(status = status_code, error = %e, "Failed to parse error response");
            TransportError::new(
                TransportErrorKind::MalformedErrorBody,
                format!("failed to parse error response: {}", raw),
            )
            .with_status(status_code)
            .with_source(e)
            .into()
        }
    }
}
