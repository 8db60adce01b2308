//! End-to-end pipeline tests against a local mock server.
//!
//! Everything here exercises the real [`ReqwestTransport`], so the chain,
//! the retry loop, and header and body encoding are all covered on the
//! wire rather than through fakes.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use critiq_http::{
    InterceptorChain, LoggingInterceptor, RateLimitRetry, ReqwestTransport, Request,
    RetryInterceptor, RetryStrategy, ServerErrorRetry, StatusCode,
};

fn pipeline(strategy: Box<dyn RetryStrategy>) -> InterceptorChain {
    let transport = Arc::new(ReqwestTransport::new());
    InterceptorChain::new(vec![
        Box::new(LoggingInterceptor::new()),
        Box::new(RetryInterceptor::new(strategy, transport)),
    ])
}

#[tokio::test]
async fn test_recovers_from_transient_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
        .mount(&server)
        .await;

    let chain = pipeline(Box::new(ServerErrorRetry::default()));
    let request = Request::get(format!("{}/flaky", server.uri()))
        .build()
        .unwrap();

    let response = chain.send(&request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), "recovered");
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_returns_final_server_error_after_exhaustion() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let chain = pipeline(Box::new(ServerErrorRetry::default()));
    let request = Request::get(format!("{}/down", server.uri()))
        .build()
        .unwrap();

    let response = chain.send(&request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // Initial attempt plus three retries.
    assert_eq!(server.received_requests().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_waits_out_rate_limit_and_retries() {
    let server = MockServer::start().await;
    // Reset epoch far in the past, so the wait clamps to zero.
    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("X-RateLimit-Remaining", "0")
                .insert_header("X-RateLimit-Reset", "1"),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(ResponseTemplate::new(200).set_body_string("allowed"))
        .mount(&server)
        .await;

    let chain = pipeline(Box::new(RateLimitRetry::new()));
    let request = Request::get(format!("{}/limited", server.uri()))
        .build()
        .unwrap();

    let response = chain.send(&request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_forwards_request_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/private"))
        .and(header("authorization", "token secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("granted"))
        .mount(&server)
        .await;

    let chain = pipeline(Box::new(ServerErrorRetry::default()));
    let request = Request::get(format!("{}/private", server.uri()))
        .header("Authorization", "token secret")
        .build()
        .unwrap();

    let response = chain.send(&request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), "granted");
}

#[tokio::test]
async fn test_posts_json_body() {
    let server = MockServer::start().await;
    let payload = json!({ "model": "gpt-4-turbo", "messages": [] });
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let chain = pipeline(Box::new(ServerErrorRetry::default()));
    let request = Request::post(format!("{}/v1/chat/completions", server.uri()))
        .json(&payload)
        .build()
        .unwrap();

    let response = chain.send(&request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["ok"], json!(true));
}
