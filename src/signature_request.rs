//! Signature request operations.
//!
//! This module provides the SignatureRequestClient for sending signature
//! requests from templates, retrieving their status, and cancelling them.

use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::{SendSignatureRequest, SignatureRequest};

const PAYLOAD_KEY: &str = "signature_request";

/// Client for signature request operations.
///
/// Access via `client.signature_requests()`.
pub struct SignatureRequestClient {
    client: Client,
}

impl SignatureRequestClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get a signature request by ID.
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
    ///     match client.signature_requests().get("signature_request_id").await {
    ///         Ok(response) => println!(
    ///             "Complete: {}, declined: {}",
    ///             response.payload.is_complete, response.payload.is_declined
    ///         ),
    ///         Err(e) if e.is_not_found() => println!("No such signature request"),
    ///         Err(e) => return Err(e.into()),
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get(&self, signature_request_id: &str) -> Result<Envelope<SignatureRequest>> {
        self.client
            .get(&["signature_request", signature_request_id], PAYLOAD_KEY)
            .await
    }

    /// Send a signature request built from one or more templates.
    ///
    /// The templates define the documents and fields; the request supplies
    /// the signers and per-request options.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dropbox_sign::Client;
    /// use dropbox_sign::types::{SendSignatureRequest, TemplateSigner};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-api-key");
    ///
    ///     let request = SendSignatureRequest {
    ///         title: Some("Contract Signature".to_string()),
    ///         test_mode: Some(true),
    ///         ..SendSignatureRequest::new(
    ///             vec![TemplateSigner::new("Signer", "John Doe", "john@example.com")],
    ///             vec!["template-id".to_string()],
    ///         )
    ///     };
    ///
    ///     let response = client.signature_requests().send_with_template(&request).await?;
    ///     println!("Sent: {}", response.payload.signature_request_id);
    ///     for warning in &response.warnings {
    ///         println!("Warning: {}", warning);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn send_with_template(
        &self,
        request: &SendSignatureRequest,
    ) -> Result<Envelope<SignatureRequest>> {
        self.client
            .post(
                &["signature_request", "send_with_template"],
                request,
                PAYLOAD_KEY,
            )
            .await
    }

    /// Cancel an incomplete signature request.
    ///
    /// Only requests that have not been completed by every signer can be
    /// cancelled.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dropbox_sign::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-api-key");
    ///     client.signature_requests().cancel("signature_request_id").await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn cancel(&self, signature_request_id: &str) -> Result<()> {
        self.client
            .post_empty(&["signature_request", "cancel", signature_request_id])
            .await
    }
}
