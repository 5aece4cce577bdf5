/// Integration tests for the platform HTTP client
///
/// Runs the credential listing against a mockito server and, end to end,
/// through the propagator with a recording writer.
mod common;

use common::{env, RecordingWriter};
use credbridge::adapters::PlatformClient;
use credbridge::domain::errors::{PlatformError, PropagationError};
use credbridge::domain::models::{AwsConfigKey, PlatformConfig};
use credbridge::domain::ports::CredentialCatalog;
use credbridge::services::{CredentialPropagator, PropagationSettings};
use mockito::Server;

fn listing_body() -> String {
    serde_json::json!([
        {
            "id": 1,
            "name": "warehouse",
            "type": "Database",
            "username": "analyst",
            "owner": "etl",
            "remoteHostId": 7
        },
        {
            "id": 2,
            "name": "s3_upload",
            "type": "Amazon Web Services S3",
            "username": "AKIAEXAMPLE"
        }
    ])
    .to_string()
}

#[tokio::test]
async fn test_list_credentials_sends_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/credentials")
        .match_header("authorization", "Bearer test-token")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(listing_body())
        .create_async()
        .await;

    let client = PlatformClient::new(server.url());
    let records = client.list_credentials("test-token").await.expect("listing failed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "warehouse");
    assert_eq!(records[1].credential_type, "Amazon Web Services S3");
    assert_eq!(records[1].id, Some(2));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_credentials_unauthorized() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/credentials")
        .with_status(401)
        .with_body(r#"{"error":"invalid_token"}"#)
        .create_async()
        .await;

    let client = PlatformClient::new(server.url());
    let err = client.list_credentials("bad").await.unwrap_err();

    match err {
        PlatformError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid_token"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_credentials_malformed_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/credentials")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"not": "a list"}"#)
        .create_async()
        .await;

    let client = PlatformClient::new(server.url());
    let err = client.list_credentials("t").await.unwrap_err();

    assert!(matches!(err, PlatformError::Decode(_)));
}

#[tokio::test]
async fn test_list_credentials_unreachable_host() {
    let config = PlatformConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: Some(2),
        ..PlatformConfig::default()
    };
    let client = PlatformClient::with_config(&config).unwrap();

    let err = client.list_credentials("t").await.unwrap_err();

    assert!(matches!(err, PlatformError::Request(_)));
}

#[tokio::test]
async fn test_propagate_through_http_listing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/credentials")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(listing_body())
        .create_async()
        .await;

    let writer = RecordingWriter::new();
    let env = env(&[
        ("CIVIS_API_KEY", "t"),
        ("WAREHOUSE_USERNAME", "analyst"),
        ("WAREHOUSE_PASSWORD", "pg-secret"),
        ("S3_UPLOAD_USERNAME", "AKIAEXAMPLE"),
        ("S3_UPLOAD_PASSWORD", "s3-secret"),
    ]);

    CredentialPropagator::new(
        PlatformClient::new(server.url()),
        &writer,
        PropagationSettings::default(),
    )
    .propagate(&env)
    .await
    .unwrap();

    assert_eq!(
        writer.calls(),
        vec![
            (AwsConfigKey::AccessKeyId, "AKIAEXAMPLE".to_string()),
            (AwsConfigKey::SecretAccessKey, "s3-secret".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_propagate_server_error_aborts_without_writes() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/credentials")
        .with_status(503)
        .create_async()
        .await;

    let writer = RecordingWriter::new();
    let env = env(&[("CIVIS_API_KEY", "t"), ("MYAWS_USERNAME", "u")]);

    let result = CredentialPropagator::new(
        PlatformClient::new(server.url()),
        &writer,
        PropagationSettings::default(),
    )
    .propagate(&env)
    .await;

    assert!(matches!(
        result,
        Err(PropagationError::CredentialListing(PlatformError::Status { status: 503, .. }))
    ));
    assert!(writer.calls().is_empty());
}
