use super::*;

use chat::WebhookQuery;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn request_for(endpoint: &str) -> WebhookRequest {
    WebhookRequest {
        endpoint: endpoint.to_owned(),
        query: WebhookQuery {
            message: "wake up neo".to_owned(),
            timestamp: "2024-01-01T00:00:00Z".to_owned(),
            session_id: "session_1_abcdefghi".to_owned(),
        },
    }
}

/// Serve exactly one canned HTTP response on a loopback port.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = vec![0_u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}/webhook")
}

#[test]
fn build_request_encodes_query_and_accept_header() {
    let client = reqwest::Client::new();
    let built = build_request(&client, &request_for("http://localhost:5678/webhook/chat"))
        .build()
        .expect("request builds");

    assert_eq!(built.method(), reqwest::Method::GET);
    assert_eq!(built.url().path(), "/webhook/chat");
    let pairs = built
        .url()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<_>>();
    assert_eq!(
        pairs,
        vec![
            ("message".to_owned(), "wake up neo".to_owned()),
            ("timestamp".to_owned(), "2024-01-01T00:00:00Z".to_owned()),
            ("sessionId".to_owned(), "session_1_abcdefghi".to_owned()),
        ]
    );
    assert_eq!(
        built.headers().get(ACCEPT).and_then(|v| v.to_str().ok()),
        Some(ACCEPT_JSON)
    );
}

#[tokio::test]
async fn fetch_reply_decodes_json_body() {
    let url = serve_once("200 OK", r#"{"text":"hello"}"#).await;
    let client = reqwest::Client::new();
    let body = fetch_reply(&client, &request_for(&url)).await;
    assert_eq!(body, Ok(json!({ "text": "hello" })));
}

#[tokio::test]
async fn fetch_reply_maps_error_status() {
    let url = serve_once("500 Internal Server Error", "{}").await;
    let client = reqwest::Client::new();
    let body = fetch_reply(&client, &request_for(&url)).await;
    assert_eq!(body, Err(ChatError::Http { status: 500 }));
}

#[tokio::test]
async fn fetch_reply_rejects_non_json_body() {
    let url = serve_once("200 OK", "not json").await;
    let client = reqwest::Client::new();
    let body = fetch_reply(&client, &request_for(&url)).await;
    assert!(matches!(body, Err(ChatError::InvalidBody(_))));
}

#[tokio::test]
async fn fetch_reply_reports_unreachable_endpoint() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = reqwest::Client::new();
    let body = fetch_reply(&client, &request_for(&format!("http://{addr}/webhook"))).await;
    assert!(matches!(body, Err(ChatError::Network(_))));
}
