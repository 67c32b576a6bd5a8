//! Integration tests for the Dropbox Sign client.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use dropbox_sign::{Client, ClientConfig, TransportErrorKind, with_cancellation};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> Client {
    Client::with_config(
        "test-api-key",
        ClientConfig {
            base_url: Some(server.uri()),
            ..Default::default()
        },
    )
}

fn signature_request_body(id: &str) -> serde_json::Value {
    serde_json::json!({
        "signature_request": {
            "signature_request_id": id,
            "title": "Test Document",
            "original_title": "Test Document",
            "is_complete": false,
            "is_declined": false,
            "has_error": false,
            "files_url": "https://example.com/files",
            "details_url": "https://example.com/details",
            "cc_email_addresses": [],
            "metadata": {},
            "created_at": 1234567890,
            "signatures": []
        }
    })
}

#[tokio::test]
async fn test_client_creation() {
    let client = Client::new("test-api-key");
    assert_eq!(client.base_url(), "https://api.hellosign.com/v3");
}

#[tokio::test]
async fn test_client_with_custom_config() {
    let client = Client::with_config(
        "test-api-key",
        ClientConfig {
            base_url: Some("https://custom.api.com".to_string()),
            timeout: Some(Duration::from_secs(60)),
            user_agent: Some("test-agent/1.0".to_string()),
            http_client: None,
        },
    );
    assert_eq!(client.base_url(), "https://custom.api.com");
}

#[tokio::test]
async fn test_basic_auth_with_empty_password() {
    let mock_server = MockServer::start().await;
    let expected = format!("Basic {}", BASE64.encode("test-api-key:"));

    Mock::given(method("GET"))
        .and(path("/signature_request/sr-1"))
        .and(header("Authorization", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(signature_request_body("sr-1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = mock_client(&mock_server)
        .signature_requests()
        .get("sr-1")
        .await
        .unwrap();
    assert_eq!(response.payload.signature_request_id, "sr-1");
}

#[tokio::test]
async fn test_custom_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/signature_request/sr-1"))
        .and(header("User-Agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(signature_request_body("sr-1")))
        .mount(&mock_server)
        .await;

    let client = Client::with_config(
        "test-api-key",
        ClientConfig {
            base_url: Some(mock_server.uri()),
            user_agent: Some("test-agent/1.0".to_string()),
            ..Default::default()
        },
    );

    assert!(client.signature_requests().get("sr-1").await.is_ok());
}

#[tokio::test]
async fn test_pluggable_http_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/signature_request/sr-1"))
        .and(header("User-Agent", "pluggable/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(signature_request_body("sr-1")))
        .mount(&mock_server)
        .await;

    let http = reqwest::Client::builder()
        .user_agent("pluggable/2.0")
        .build()
        .unwrap();

    let client = Client::with_config(
        "test-api-key",
        ClientConfig {
            base_url: Some(mock_server.uri()),
            user_agent: Some("ignored/1.0".to_string()),
            http_client: Some(http),
            ..Default::default()
        },
    );

    assert!(client.signature_requests().get("sr-1").await.is_ok());
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/signature_request/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(signature_request_body("slow"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_config(
        "test-api-key",
        ClientConfig {
            base_url: Some(mock_server.uri()),
            timeout: Some(Duration::from_millis(100)),
            ..Default::default()
        },
    );

    let err = client.signature_requests().get("slow").await.unwrap_err();
    let transport = err.as_transport().expect("expected transport error");
    assert_eq!(transport.kind, TransportErrorKind::Timeout);
    assert!(!err.is_cancelled());
}

#[tokio::test]
async fn test_cancellation_abandons_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/signature_request/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(signature_request_body("slow"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let result = with_cancellation(
        client.signature_requests().get("slow"),
        tokio::time::sleep(Duration::from_millis(50)),
    )
    .await;

    let err = result.unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(
        err.as_transport().map(|t| t.kind),
        Some(TransportErrorKind::Cancelled)
    );
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let client = Client::with_config(
        "test-api-key",
        ClientConfig {
            base_url: Some("http://127.0.0.1:1".to_string()),
            ..Default::default()
        },
    );

    let err = client.signature_requests().get("sr-1").await.unwrap_err();
    let transport = err.as_transport().expect("expected transport error");
    assert_eq!(transport.kind, TransportErrorKind::Request);
    assert_eq!(err.status_code(), None);
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/signature_request/sr-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(signature_request_body("sr-1")))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.signature_requests().get("sr-1").await })
        })
        .collect();

    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(response.payload.signature_request_id, "sr-1");
    }
}
