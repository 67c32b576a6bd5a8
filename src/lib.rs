//! # Dropbox Sign Rust SDK
//!
//! Typed Rust client for the Dropbox Sign (formerly HelloSign) signature
//! request API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dropbox_sign::{Client, SendSignatureRequest, TemplateSigner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key");
//!
//!     let request = SendSignatureRequest::new(
//!         vec![TemplateSigner::new("Signer", "John Doe", "john@example.com")],
//!         vec!["template-id".to_string()],
//!     );
//!
//!     let response = client.signature_requests().send_with_template(&request).await?;
//!     println!("Signature request sent: {}", response.payload.signature_request_id);
//!     Ok(())
//! }
//! ```
//!
//! ## Warnings
//!
//! Successful calls return an [`Envelope`] holding the payload and any
//! non-fatal warnings the API attached to the response.
//!
//! ## Error Handling
//!
//! All operations return `Result<T, DropboxSignError>`. The error is either a
//! structured [`ApiError`] from the service or a local [`TransportError`]:
//!
//! ```rust,no_run
//! use dropbox_sign::{Client, DropboxSignError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new("your-api-key");
//!
//!     match client.signature_requests().get("signature_request_id").await {
//!         Ok(response) => println!("Title: {}", response.payload.title),
//!         Err(e) if e.is_not_found() => println!("Signature request not found"),
//!         Err(e) if e.is_unauthorized() => println!("Invalid API key"),
//!         Err(DropboxSignError::Api(e)) => println!("Rejected: {}", e),
//!         Err(DropboxSignError::Transport(e)) => println!("Transport failure: {}", e),
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events (requests at `debug`, dropped malformed
//! warnings at `warn`). Install a subscriber to see them.

pub mod client;
pub mod envelope;
pub mod error;
pub mod signature_request;
pub mod types;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig, DEFAULT_BASE_URL, with_cancellation};
pub use envelope::{Envelope, Warning, parse_envelope};
pub use error::{
    ApiError, DropboxSignError, Result, TransportError, TransportErrorKind, classify_error,
    is_bad_request, is_not_found, is_unauthorized,
};
pub use signature_request::SignatureRequestClient;

pub use types::{
    Cc, CustomField, SendSignatureRequest, Signature, SignatureRequest, SignerStatus,
    SigningMethod, SigningOptions, SmsPhoneNumberType, TemplateSigner,
};
