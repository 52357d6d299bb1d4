//! Chat client tests against a local stub service.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use chat_client::{ChatClient, GenerationError, GenerationOptions};
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Captured {
    bodies: Arc<Mutex<Vec<Value>>>,
    auth: Arc<Mutex<Vec<String>>>,
}

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn echo_completion(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    captured.auth.lock().unwrap().push(auth);
    captured.bodies.lock().unwrap().push(body);

    Json(json!({
        "choices": [
            { "message": { "role": "assistant", "content": "\n  red | large  \n" } },
            { "message": { "role": "assistant", "content": "ignored" } }
        ],
        "usage": { "prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14 }
    }))
}

#[tokio::test]
async fn generate_text_returns_trimmed_first_choice() {
    let captured = Captured::default();
    let router = Router::new()
        .route("/v1/chat/completions", post(echo_completion))
        .with_state(captured.clone());
    let base_url = spawn_stub(router).await;

    let client = ChatClient::new("sk-test").with_base_url(base_url);
    let options = GenerationOptions::for_refinement().system_prompt("You clean data");

    let text = client.generate_text("hello", &options).await.unwrap();

    assert_eq!(text, "red | large");
    assert_eq!(captured.auth.lock().unwrap()[0], "Bearer sk-test");

    let body = captured.bodies.lock().unwrap()[0].clone();
    assert_eq!(body["model"], "deepseek-chat");
    assert_eq!(body["max_tokens"], 2000);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "hello");
    assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
}

#[tokio::test]
async fn chat_completion_reports_usage() {
    let router = Router::new()
        .route("/v1/chat/completions", post(echo_completion))
        .with_state(Captured::default());
    let base_url = spawn_stub(router).await;

    let client = ChatClient::new("sk-test").with_base_url(base_url);
    let request = chat_client::ChatRequest::from_prompt("hi", &GenerationOptions::default());

    let response = client.chat_completion(&request).await.unwrap();

    assert_eq!(response.content, "\n  red | large  \n");
    assert_eq!(response.usage.unwrap().total_tokens, 14);
}

#[tokio::test]
async fn non_success_status_is_status_error() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (StatusCode::UNAUTHORIZED, "invalid api key").into_response() }),
    );
    let base_url = spawn_stub(router).await;

    let client = ChatClient::new("sk-bad").with_base_url(base_url);
    let err = client
        .generate_text("hello", &GenerationOptions::default())
        .await
        .unwrap_err();

    match err {
        GenerationError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_json_is_parse_error() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { "this is not json" }),
    );
    let base_url = spawn_stub(router).await;

    let client = ChatClient::new("sk-test").with_base_url(base_url);
    let err = client
        .generate_text("hello", &GenerationOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Parse(_)));
    assert_eq!(err.kind(), "parse");
}

#[tokio::test]
async fn empty_choices_is_distinct_error() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let base_url = spawn_stub(router).await;

    let client = ChatClient::new("sk-test").with_base_url(base_url);
    let err = client
        .generate_text("hello", &GenerationOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::EmptyChoices));
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ChatClient::new("sk-test").with_base_url(format!("http://{}", addr));
    let err = client
        .generate_text("hello", &GenerationOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Network(_)));
}

#[tokio::test]
async fn slow_service_hits_timeout() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "choices": [{ "message": { "content": "late" } }] }))
        }),
    );
    let base_url = spawn_stub(router).await;

    let client = ChatClient::new("sk-test")
        .with_base_url(base_url)
        .with_timeout(Duration::from_millis(200))
        .unwrap();
    let err = client
        .generate_text("hello", &GenerationOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Network(_)));
}

#[tokio::test]
async fn batch_generate_keeps_slot_for_failures() {
    let calls = Arc::new(Mutex::new(0usize));
    let router = Router::new()
        .route(
            "/v1/chat/completions",
            post(|State(calls): State<Arc<Mutex<usize>>>| async move {
                let n = {
                    let mut calls = calls.lock().unwrap();
                    *calls += 1;
                    *calls
                };
                if n == 2 {
                    (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
                } else {
                    Json(json!({ "choices": [{ "message": { "content": format!("reply {}", n) } }] }))
                        .into_response()
                }
            }),
        )
        .with_state(calls.clone());
    let base_url = spawn_stub(router).await;

    let client = ChatClient::new("sk-test").with_base_url(base_url);
    let results = client
        .batch_generate(&["one", "two", "three"], &GenerationOptions::default())
        .await;

    assert_eq!(
        results,
        vec![Some("reply 1".to_string()), None, Some("reply 3".to_string())]
    );
    assert_eq!(*calls.lock().unwrap(), 3);
}
