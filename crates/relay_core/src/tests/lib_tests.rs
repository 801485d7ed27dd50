use super::*;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use shared::command::Command;
use tokio::{
    net::TcpListener,
    sync::{mpsc, Mutex},
};

#[derive(Debug)]
enum Seen {
    Post { path: &'static str, body: Value },
    Get { body_len: usize },
}

#[derive(Clone)]
struct DeviceState {
    tx: Arc<Mutex<mpsc::UnboundedSender<Seen>>>,
}

async fn handle_move(State(state): State<DeviceState>, Json(body): Json<Value>) -> Json<Value> {
    let _ = state.tx.lock().await.send(Seen::Post { path: "move", body });
    Json(json!({ "message": "OK" }))
}

async fn handle_pipet(State(state): State<DeviceState>, Json(body): Json<Value>) -> StatusCode {
    let _ = state.tx.lock().await.send(Seen::Post {
        path: "pipet_control",
        body,
    });
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn handle_request(State(state): State<DeviceState>, body: Bytes) -> Json<Value> {
    let _ = state.tx.lock().await.send(Seen::Get {
        body_len: body.len(),
    });
    Json(json!({ "x": 10, "y": 20, "z": 30 }))
}

async fn handle_plain() -> &'static str {
    "ack"
}

async fn spawn_device_server() -> (String, mpsc::UnboundedReceiver<Seen>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = mpsc::unbounded_channel();
    let state = DeviceState {
        tx: Arc::new(Mutex::new(tx)),
    };
    let app = Router::new()
        .route("/move", post(handle_move))
        .route("/pipet_control", post(handle_pipet))
        .route("/request", get(handle_request))
        .route("/plain", post(handle_plain))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), rx)
}

fn request_for(command: &Command, server_url: &str) -> RelayRequest {
    RelayRequest::new(
        command.to_message().expect("serialize"),
        command.endpoint().as_str(),
        server_url,
    )
}

#[tokio::test]
async fn move_is_posted_as_json_and_returns_status_and_body() {
    let (server_url, mut seen) = spawn_device_server().await;
    let command = Command::move_to("world", "1", "2", "3");

    let result = HttpRelay::new()
        .dispatch(request_for(&command, &server_url))
        .await;

    assert_eq!(result, RelayResult::ok(200, json!({ "message": "OK" })));
    match seen.recv().await.expect("server saw request") {
        Seen::Post { path, body } => {
            assert_eq!(path, "move");
            assert_eq!(
                body,
                json!({
                    "type": "move",
                    "coordinate_system": "world",
                    "data": { "x": "1", "y": "2", "z": "3" }
                })
            );
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

#[tokio::test]
async fn request_endpoint_uses_get_without_body() {
    let (server_url, mut seen) = spawn_device_server().await;

    let result = HttpRelay::new()
        .dispatch(request_for(&Command::request_current_position(), &server_url))
        .await;

    assert_eq!(
        result,
        RelayResult::ok(200, json!({ "x": 10, "y": 20, "z": 30 }))
    );
    match seen.recv().await.expect("server saw request") {
        Seen::Get { body_len } => assert_eq!(body_len, 0),
        other => panic!("unexpected request: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_status_becomes_relay_error() {
    let (server_url, mut seen) = spawn_device_server().await;

    let result = HttpRelay::new()
        .dispatch(request_for(&Command::pipet_control(""), &server_url))
        .await;

    assert_eq!(
        result,
        RelayResult::error("Request failed with status code 500")
    );
    match seen.recv().await.expect("server saw request") {
        Seen::Post { path, body } => {
            assert_eq!(path, "pipet_control");
            assert_eq!(body["data"]["pipet_level"], json!(0));
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_reply_is_kept_as_text() {
    let (server_url, _seen) = spawn_device_server().await;

    let result = HttpRelay::new()
        .dispatch(RelayRequest::new("{}", "plain", server_url))
        .await;

    assert_eq!(result, RelayResult::ok(200, json!("ack")));
}

#[tokio::test]
async fn malformed_message_is_reported_without_sending() {
    let (server_url, mut seen) = spawn_device_server().await;

    let result = HttpRelay::new()
        .dispatch(RelayRequest::new("{not json", "move", server_url))
        .await;

    match result {
        RelayResult::Error { error } => {
            assert!(error.starts_with("invalid command message"), "{error}")
        }
        other => panic!("expected error, got {other:?}"),
    }
    assert!(seen.try_recv().is_err());
}

#[tokio::test]
async fn unreachable_server_is_reported_as_network_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let result = HttpRelay::new()
        .dispatch(RelayRequest::new("{}", "move", format!("http://{addr}")))
        .await;

    match result {
        RelayResult::Error { error } => assert!(error.starts_with("Network Error"), "{error}"),
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn body_decoding_falls_back_to_text() {
    assert_eq!(decode_body(r#"{"a":1}"#.to_string()), json!({ "a": 1 }));
    assert_eq!(decode_body(String::new()), json!(""));
    assert_eq!(decode_body("ready".to_string()), json!("ready"));
}

#[test]
fn config_defaults_to_lab_device_address() {
    assert_eq!(RelayConfig::default().server_url, DEFAULT_SERVER_URL);
    assert_eq!(config::current().server_url, DEFAULT_SERVER_URL);
}
