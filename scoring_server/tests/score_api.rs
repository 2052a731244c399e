//! HTTP-level tests against a live router bound to an ephemeral port.

use std::sync::Arc;
use reqwest::StatusCode;
use risk_model::ScoringEngine;
use scoring_server::{router, serve};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(Arc::new(ScoringEngine::new()));
    tokio::spawn(serve(listener, app, std::future::pending()));
    format!("http://{}", addr)
}

async fn post_score(base_url: &str, body: &Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/score", base_url))
        .json(body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_score_full_payload() {
    let base_url = spawn_server().await;
    let (status, body) = post_score(
        &base_url,
        &json!({"ticker": "AAPL", "rsi": 65.5, "pe": 25.2, "peg": 1.1, "sentiment": 0.3, "atr": 2.5}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticker"], "AAPL");
    assert_eq!(body["model_version"], "v0.1");

    // base risk 0.304, jitter within 0.05
    let score = body["risk_score"].as_f64().unwrap();
    assert!((0.254..=0.354).contains(&score), "{}", score);

    let latency = body["latency_ms"].as_u64().unwrap();
    assert!((10..=30).contains(&latency));
    assert!(body["timestamp"].as_f64().unwrap() > 1_600_000_000.0);
}

#[tokio::test]
async fn test_score_defaults() {
    let base_url = spawn_server().await;
    let (status, body) = post_score(&base_url, &json!({"ticker": "MSFT"})).await;

    assert_eq!(status, StatusCode::OK);
    let score = body["risk_score"].as_f64().unwrap();
    assert!((0.183..=0.284).contains(&score), "{}", score);
}

#[tokio::test]
async fn test_score_saturates_at_one() {
    let base_url = spawn_server().await;
    for _ in 0..20 {
        let (status, body) =
            post_score(&base_url, &json!({"ticker": "RISKY", "rsi": 100, "pe": 100, "sentiment": -1})).await;
        assert_eq!(status, StatusCode::OK);
        let score = body["risk_score"].as_f64().unwrap();
        assert!((0.95..=1.0).contains(&score), "{}", score);
    }
}

#[tokio::test]
async fn test_missing_ticker_is_422() {
    let base_url = spawn_server().await;
    let (status, body) = post_score(&base_url, &json!({"rsi": 70.0})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["details"][0]["field"], "ticker");
    assert!(body.get("risk_score").is_none());
}

#[tokio::test]
async fn test_wrong_type_is_422() {
    let base_url = spawn_server().await;
    let (status, body) = post_score(&base_url, &json!({"ticker": "AAPL", "pe": "cheap"})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "pe");
}

#[tokio::test]
async fn test_malformed_json_is_422() {
    let base_url = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{}/score", base_url))
        .header("content-type", "application/json")
        .body("{\"ticker\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "body");
}

#[tokio::test]
async fn test_health() {
    let base_url = spawn_server().await;
    let body: Value = reqwest::get(format!("{}/health", base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, json!({"status": "ok", "model_version": "v0.1"}));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let base_url = spawn_server().await;
    let response = reqwest::get(format!("{}/scores", base_url)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "no route for /scores");
}

#[tokio::test]
async fn test_get_score_not_allowed() {
    let base_url = spawn_server().await;
    let response = reqwest::get(format!("{}/score", base_url)).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_concurrent_requests() {
    let base_url = spawn_server().await;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let base_url = base_url.clone();
            tokio::spawn(async move {
                let ticker = format!("T{}", i);
                let (status, body) = post_score(&base_url, &json!({"ticker": ticker})).await;
                (ticker, status, body)
            })
        })
        .collect();

    for handle in handles {
        let (ticker, status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ticker"], ticker.as_str());
    }
}
