//! Basic usage example for the Dropbox Sign SDK.
//!
//! This example demonstrates:
//! - Creating a client from the environment
//! - Sending a signature request from a template (in test mode)
//! - Fetching its status
//! - Cancelling it
//!
//! Run with:
//! ```bash
//! DROPBOX_SIGN_API_KEY=... TEMPLATE_ID=... SIGNER_EMAIL=... cargo run --example basic
//! ```

use dropbox_sign::{Client, SendSignatureRequest, TemplateSigner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dropbox_sign=debug".parse()?),
        )
        .with_target(false)
        .init();

    let template_id = std::env::var("TEMPLATE_ID")?;
    let signer_email = std::env::var("SIGNER_EMAIL")?;

    let client = Client::from_env()?;

    println!("Sending signature request...");
    let request = SendSignatureRequest {
        title: Some("Example Contract".to_string()),
        test_mode: Some(true),
        ..SendSignatureRequest::new(
            vec![TemplateSigner::new("Signer", "Example Signer", signer_email)],
            vec![template_id],
        )
    };

    let sent = client
        .signature_requests()
        .send_with_template(&request)
        .await?;
    for warning in &sent.warnings {
        println!("  warning: {}", warning);
    }

    let id = sent.payload.signature_request_id;
    println!("Sent: {}", id);

    println!("\nFetching status...");
    let fetched = client.signature_requests().get(&id).await?.into_payload();
    println!("  Complete: {}", fetched.is_complete);
    for signature in &fetched.signatures {
        println!(
            "  {} -> {}",
            signature.signer_email_address,
            signature.status().as_str()
        );
    }

    println!("\nCancelling...");
    match client.signature_requests().cancel(&id).await {
        Ok(()) => println!("Cancelled."),
        Err(e) if e.is_not_found() => println!("Already gone."),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
