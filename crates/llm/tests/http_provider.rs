//! Tests for HttpProvider header construction and failure classification.

use kismet_llm::{ErrorKind, HttpProvider};
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

#[test]
fn bearer_sets_authorization_header() {
    let client = kismet_llm::Client::new();
    let provider = HttpProvider::bearer(client, "test-key", "http://example.com/v1/chat")
        .expect("bearer provider");

    let auth = provider
        .headers()
        .get("authorization")
        .expect("authorization header");
    assert_eq!(auth.to_str().unwrap(), "Bearer test-key");
    assert_eq!(provider.endpoint(), "http://example.com/v1/chat");
}

#[test]
fn bearer_sets_content_type_and_accept() {
    let client = kismet_llm::Client::new();
    let provider =
        HttpProvider::bearer(client, "k", "http://example.com").expect("bearer provider");

    let ct = provider
        .headers()
        .get("content-type")
        .expect("content-type");
    assert_eq!(ct.to_str().unwrap(), "application/json");
    let accept = provider.headers().get("accept").expect("accept");
    assert_eq!(accept.to_str().unwrap(), "application/json");
}

#[test]
fn custom_header_sets_named_header() {
    let client = kismet_llm::Client::new();
    let provider = HttpProvider::custom_header(client, "x-api-key", "sk-123", "http://example.com")
        .expect("custom header provider")
        .with_header("anthropic-version", "2023-06-01")
        .expect("version header");

    let key = provider.headers().get("x-api-key").expect("x-api-key");
    assert_eq!(key.to_str().unwrap(), "sk-123");
    let version = provider
        .headers()
        .get("anthropic-version")
        .expect("anthropic-version");
    assert_eq!(version.to_str().unwrap(), "2023-06-01");
    assert!(provider.headers().get("authorization").is_none());
}

#[test]
fn invalid_header_value_is_rejected() {
    let client = kismet_llm::Client::new();
    assert!(HttpProvider::bearer(client, "bad\nkey", "http://example.com").is_err());
}

#[test]
fn default_timeout_is_ten_seconds() {
    let provider = HttpProvider::no_auth(kismet_llm::Client::new(), "http://example.com");
    assert_eq!(provider.timeout(), Duration::from_secs(10));
}

#[tokio::test]
async fn send_posts_json_and_parses_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .and(header("authorization", "Bearer k"))
        .and(body_json(json!({ "hello": "world" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = HttpProvider::bearer(
        kismet_llm::Client::new(),
        "k",
        &format!("{}/v1/chat", server.uri()),
    )
    .unwrap();
    let reply: Value = provider
        .send("test", &json!({ "hello": "world" }))
        .await
        .unwrap();
    assert_eq!(reply["ok"], true);
}

#[tokio::test]
async fn query_key_is_sent_in_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let provider = HttpProvider::query_key(
        kismet_llm::Client::new(),
        "key",
        "secret",
        &format!("{}/generate", server.uri()),
    );
    let _: Value = provider.send("gemini", &json!({})).await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let provider = HttpProvider::no_auth(kismet_llm::Client::new(), &server.uri());
    let err = provider
        .send::<Value>("openai", &json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.provider, "openai");
    match err.kind {
        ErrorKind::Http { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected http error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparsable_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let provider = HttpProvider::no_auth(kismet_llm::Client::new(), &server.uri());
    let err = provider
        .send::<Value>("claude", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Malformed(_)));
}

#[tokio::test]
async fn slow_vendor_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let provider = HttpProvider::no_auth(kismet_llm::Client::new(), &server.uri())
        .with_timeout(Duration::from_millis(50));
    let err = provider
        .send::<Value>("grok", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Timeout(t) if t == Duration::from_millis(50)));
}

#[tokio::test]
async fn unreachable_vendor_is_transport_error() {
    let provider = HttpProvider::no_auth(kismet_llm::Client::new(), "http://127.0.0.1:1/v1");
    let err = provider
        .send::<Value>("deepseek", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Transport(_)));
    assert!(err.to_string().starts_with("deepseek: transport error"));
}
