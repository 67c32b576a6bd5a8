//! Dropbox Sign API client.
//!
//! The main entry point for interacting with the Dropbox Sign API.

use crate::envelope::{Envelope, parse_envelope};
use crate::error::{DropboxSignError, Result, TransportError, TransportErrorKind, classify_error};
use crate::signature_request::SignatureRequestClient;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Url, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.hellosign.com/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_API_KEY: &str = "DROPBOX_SIGN_API_KEY";
const ENV_BASE_URL: &str = "DROPBOX_SIGN_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "DROPBOX_SIGN_TIMEOUT_SECS";

/// Dropbox Sign API client.
///
/// Cheap to clone; clones share the underlying connection pool. No call
/// mutates the client, so one instance can serve many concurrent tasks.
///
/// # Example
///
/// ```rust,no_run
/// use dropbox_sign::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("your-api-key");
///
///     let response = client.signature_requests().get("signature_request_id").await?;
///     println!("Title: {}", response.payload.title);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for the API (default: https://api.hellosign.com/v3).
    pub base_url: Option<String>,
    /// Request timeout (default: 30 seconds). Ignored when `http_client` is set.
    pub timeout: Option<Duration>,
    /// User-Agent header value. Ignored when `http_client` is set.
    pub user_agent: Option<String>,
    /// Pre-configured HTTP client to use instead of building one.
    pub http_client: Option<HttpClient>,
}

impl Client {
    /// Create a new Dropbox Sign client with default configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dropbox_sign::Client;
    ///
    /// let client = Client::new("your-api-key");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new Dropbox Sign client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dropbox_sign::{Client, ClientConfig};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config("your-api-key", ClientConfig {
    ///     timeout: Some(Duration::from_secs(60)),
    ///     user_agent: Some("my-app/1.0".to_string()),
    ///     ..Default::default()
    /// });
    /// ```
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Self {
        let http = match config.http_client {
            Some(http) => http,
            None => {
                let timeout = config
                    .timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
                let user_agent = config
                    .user_agent
                    .unwrap_or_else(|| format!("dropbox-sign-rust/{}", env!("CARGO_PKG_VERSION")));

                HttpClient::builder()
                    .timeout(timeout)
                    .user_agent(user_agent)
                    .build()
                    .expect("Failed to create HTTP client")
            }
        };

        Self {
            http,
            base_url: config
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: api_key.into(),
        }
    }

    /// Create a client from environment variables.
    ///
    /// Reads `DROPBOX_SIGN_API_KEY` (required), `DROPBOX_SIGN_BASE_URL` and
    /// `DROPBOX_SIGN_TIMEOUT_SECS` (optional).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a client from a variable lookup. `from_env` passes the process
    /// environment.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TransportError::new(
                    TransportErrorKind::Config,
                    format!("{} environment variable is not set", ENV_API_KEY),
                )
            })?;

        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    TransportError::new(
                        TransportErrorKind::Config,
                        format!("invalid {}: {:?}", ENV_TIMEOUT_SECS, raw),
                    )
                    .with_source(e)
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self::with_config(
            api_key,
            ClientConfig {
                base_url: lookup(ENV_BASE_URL).filter(|url| !url.trim().is_empty()),
                timeout,
                ..Default::default()
            },
        ))
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the client for signature request operations.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dropbox_sign::Client;
    ///
    /// let client = Client::new("your-api-key");
    /// let signature_requests = client.signature_requests();
    /// ```
    pub fn signature_requests(&self) -> SignatureRequestClient {
        SignatureRequestClient::new(self.clone())
    }

    /// Join `segments` onto the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let invalid_base = || {
            TransportError::new(
                TransportErrorKind::Config,
                format!("invalid base URL: {}", self.base_url),
            )
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid_base().with_source(e))?;
        url.path_segments_mut()
            .map_err(|_| invalid_base())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, path = url.path(), "Sending Dropbox Sign request");

        Ok(self
            .http
            .request(method, url)
            .basic_auth(&self.api_key, Some("")))
    }

    /// Make an authenticated GET request and decode the payload under `key`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        key: &str,
    ) -> Result<Envelope<T>> {
        let (status, body) = self.execute(self.request(Method::GET, segments)?).await?;
        Self::handle_response(status, &body, key)
    }

    /// Make an authenticated POST request with a JSON body and decode the
    /// payload under `key`.
    pub(crate) async fn post<T, B>(
        &self,
        segments: &[&str],
        body: &B,
        key: &str,
    ) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let json = serde_json::to_vec(body).map_err(|e| {
            TransportError::new(TransportErrorKind::Serialize, "failed to serialize request")
                .with_source(e)
        })?;

        let request = self
            .request(Method::POST, segments)?
            .header(header::CONTENT_TYPE, "application/json")
            .body(json);

        let (status, body) = self.execute(request).await?;
        Self::handle_response(status, &body, key)
    }

    /// Make an authenticated POST request without a body, expecting no payload.
    pub(crate) async fn post_empty(&self, segments: &[&str]) -> Result<()> {
        let (status, body) = self.execute(self.request(Method::POST, segments)?).await?;

        if status.is_success() {
            Ok(())
        } else {
            Err(classify_error(&body, status.as_u16()))
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<(reqwest::StatusCode, Vec<u8>)> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest("failed to execute request", e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received Dropbox Sign response");

        let body = response.bytes().await.map_err(|e| {
            let mut err = TransportError::from_reqwest("failed to read response body", e);
            if err.kind == TransportErrorKind::Request {
                err.kind = TransportErrorKind::ReadBody;
            }
            err.with_status(status.as_u16())
        })?;

        Ok((status, body.to_vec()))
    }

    fn handle_response<T: DeserializeOwned>(
        status: reqwest::StatusCode,
        body: &[u8],
        key: &str,
    ) -> Result<Envelope<T>> {
        if !status.is_success() {
            return Err(classify_error(body, status.as_u16()));
        }

        parse_envelope(body, key).map_err(|err| match err {
            DropboxSignError::Transport(transport) => transport.with_status(status.as_u16()).into(),
            other => other,
        })
    }
}

/// Run `operation` until it completes or `cancel` resolves, whichever is first.
///
/// When `cancel` wins, the in-flight request is dropped and a
/// [`TransportErrorKind::Cancelled`] error is returned.
///
/// # Example
///
/// ```rust,no_run
/// use dropbox_sign::{Client, with_cancellation};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() {
///     let client = Client::new("your-api-key");
///     let result = with_cancellation(
///         client.signature_requests().get("signature_request_id"),
///         tokio::time::sleep(Duration::from_secs(5)),
///     )
///     .await;
///
///     if let Err(e) = result {
///         if e.is_cancelled() {
///             println!("gave up waiting");
///         }
///     }
/// }
/// ```
pub async fn with_cancellation<T, F, C>(operation: F, cancel: C) -> Result<T>
where
    F: Future<Output = Result<T>>,
    C: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = cancel => {
            tracing::debug!("Dropbox Sign request cancelled");
            Err(TransportError::new(TransportErrorKind::Cancelled, "request cancelled").into())
        }
        result = operation => result,
    }
}
