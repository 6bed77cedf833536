//! HTTP client tests against a local mock fact service.

mod common;

use catfact::config::ApiConfig;
use catfact::fact::{CatFactClient, FactError, FactSource};
use common::mock_fact_server::{MockFactServer, MockResponse};

fn api_config(base_url: String) -> ApiConfig {
    ApiConfig {
        base_url,
        max_length: 150,
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
    }
}

#[tokio::test]
async fn fetches_fact_and_sends_max_length() {
    let server = MockFactServer::start().await;
    server
        .enqueue(MockResponse::fact("A group of cats is called a clowder."))
        .await;

    let client = CatFactClient::new(&api_config(server.base_url())).unwrap();
    let fact = client.fetch_fact().await.unwrap();
    assert_eq!(fact, "A group of cats is called a clowder.");

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/fact");
    assert_eq!(requests[0].query.as_deref(), Some("max_length=150"));
}

#[tokio::test]
async fn fact_whitespace_is_trimmed() {
    let server = MockFactServer::start().await;
    server.enqueue(MockResponse::fact("  Cats purr.\n")).await;

    let client = CatFactClient::new(&api_config(server.base_url())).unwrap();
    assert_eq!(client.fetch_fact().await.unwrap(), "Cats purr.");
}

#[tokio::test]
async fn server_error_is_upstream_error() {
    let server = MockFactServer::start().await;
    server
        .enqueue(MockResponse::raw(503, r#"{"message":"down"}"#))
        .await;

    let client = CatFactClient::new(&api_config(server.base_url())).unwrap();
    match client.fetch_fact().await {
        Err(FactError::Upstream { status, message }) => {
            assert_eq!(status, 503);
            assert!(message.contains("down"));
        }
        other => panic!("Expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockFactServer::start().await;
    server.enqueue(MockResponse::raw(200, r#"{"data": []}"#)).await;

    let client = CatFactClient::new(&api_config(server.base_url())).unwrap();
    let err = client.fetch_fact().await.unwrap_err();
    assert!(matches!(err, FactError::Decode { .. }), "got {:?}", err);
}

#[tokio::test]
async fn empty_fact_is_decode_error() {
    let server = MockFactServer::start().await;
    server.enqueue(MockResponse::fact("   ")).await;

    let client = CatFactClient::new(&api_config(server.base_url())).unwrap();
    let err = client.fetch_fact().await.unwrap_err();
    assert!(matches!(err, FactError::Decode { .. }), "got {:?}", err);
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockFactServer::start().await;
    server
        .enqueue(MockResponse::fact("late").with_delay(2_000))
        .await;

    let client = CatFactClient::new(&api_config(server.base_url())).unwrap();
    let err = client.fetch_fact().await.unwrap_err();
    assert!(matches!(err, FactError::Timeout { duration: 1 }), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_server_is_connection_error() {
    let port = common::free_port();
    let client = CatFactClient::new(&api_config(format!("http://127.0.0.1:{}", port))).unwrap();
    let err = client.fetch_fact().await.unwrap_err();
    assert!(matches!(err, FactError::Connection { .. }), "got {:?}", err);
}
