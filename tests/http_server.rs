//! End-to-end tests against a live listener on an ephemeral port

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bluegreen_server::config::{AppState, Config};
use bluegreen_server::server::{bind_listener, start_server_loop};
use bluegreen_server::{Release, BLUE, GREEN};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Request, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

struct TestServer {
    addr: SocketAddr,
    shutdown: Arc<Notify>,
    handle: JoinHandle<()>,
}

fn test_config() -> Config {
    let mut config = Config::load_from("does-not-exist/bluegreen-test-config", None).unwrap();
    config.logging.access_log = false;
    config
}

fn spawn_server(release: &'static Release) -> TestServer {
    spawn_server_with(release, test_config())
}

fn spawn_server_with(release: &'static Release, config: Config) -> TestServer {
    let listener = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(AppState::new(config, release));
    let shutdown = Arc::new(Notify::new());
    let handle = tokio::spawn(start_server_loop(listener, state, Arc::clone(&shutdown)));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

async fn get(addr: SocketAddr, path: &str) -> (StatusCode, Bytes) {
    let stream = TcpStream::connect(addr).await.unwrap();
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
        .await
        .unwrap();
    tokio::spawn(conn);

    let req = Request::builder()
        .uri(path)
        .header("Host", addr.to_string())
        .body(Empty::<Bytes>::new())
        .unwrap();
    let resp = sender.send_request(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

async fn get_json(addr: SocketAddr, path: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(addr, path).await;
    (status, serde_json::from_slice(&body).unwrap())
}

/// Pull the server timestamp out of the landing page
fn page_timestamp(html: &str) -> String {
    const MARKER: &str = r#"<span id="server-time">"#;
    let start = html.find(MARKER).unwrap() + MARKER.len();
    let end = start + html[start..].find("</span>").unwrap();
    html[start..end].to_string()
}

#[tokio::test]
async fn test_health_on_both_variants() {
    for release in [&BLUE, &GREEN] {
        let server = spawn_server(release);
        let (status, body) = get_json(server.addr, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], release.version);
        server.shutdown.notify_one();
    }
}

#[tokio::test]
async fn test_blue_info_and_missing_features() {
    let server = spawn_server(&BLUE);

    let (status, info) = get_json(server.addr, "/api/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["environment"], "blue");
    assert_eq!(info["version"], "1.0");
    assert!(info.get("features").is_none());
    assert!(info["hostname"].as_str().is_some_and(|h| !h.is_empty()));

    let (status, _) = get(server.addr, "/api/features").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    server.shutdown.notify_one();
}

#[tokio::test]
async fn test_green_info_and_features() {
    let server = spawn_server(&GREEN);

    let (status, info) = get_json(server.addr, "/api/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["environment"], "green");
    assert_eq!(info["version"], "2.0");
    let features = info["features"].as_array().unwrap();
    assert!(!features.is_empty());
    assert!(features.iter().all(serde_json::Value::is_string));

    let (status, catalog) = get_json(server.addr, "/api/features").await;
    assert_eq!(status, StatusCode::OK);
    let entries = catalog["newFeatures"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    for entry in entries {
        assert!(entry["name"].as_str().is_some_and(|s| !s.is_empty()));
        assert!(entry["description"].as_str().is_some_and(|s| !s.is_empty()));
        assert_eq!(entry["status"], "completed");
    }

    server.shutdown.notify_one();
}

#[tokio::test]
async fn test_landing_page_is_fresh() {
    let server = spawn_server(&BLUE);

    let mut previous = String::new();
    for _ in 0..3 {
        let (status, body) = get(server.addr, "/").await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("BLUE ENVIRONMENT"));

        let timestamp = page_timestamp(&html);
        assert!(timestamp >= previous, "{timestamp} < {previous}");
        previous = timestamp;
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    server.shutdown.notify_one();
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let server = spawn_server(&GREEN);
    let (status, _) = get(server.addr, "/health").await;
    assert_eq!(status, StatusCode::OK);

    server.shutdown.notify_one();
    tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server loop exits after shutdown")
        .unwrap();

    assert!(TcpStream::connect(server.addr).await.is_err());
}

#[tokio::test]
async fn test_busy_keep_alive_connection_outlives_header_timeout() {
    let mut config = test_config();
    config.performance.header_read_timeout = 1;
    let server = spawn_server_with(&GREEN, config);

    let stream = TcpStream::connect(server.addr).await.unwrap();
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
        .await
        .unwrap();
    tokio::spawn(conn);

    // Total time on one connection exceeds the timeout; each gap does not
    for _ in 0..4 {
        let req = Request::builder()
            .uri("/health")
            .header("Host", server.addr.to_string())
            .body(Empty::<Bytes>::new())
            .unwrap();
        let resp = sender.send_request(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        resp.into_body().collect().await.unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
    }

    server.shutdown.notify_one();
}

#[tokio::test]
async fn test_stalled_request_head_is_closed() {
    let mut config = test_config();
    config.performance.header_read_timeout = 1;
    let server = spawn_server_with(&BLUE, config);

    let mut stream = TcpStream::connect(server.addr).await.unwrap();
    stream.write_all(b"GET /health HTTP/1.1\r\nHost: test\r\n").await.unwrap();

    // Server gives up on the head and closes; any reply bytes are ignored
    let mut buf = Vec::new();
    let closed = tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut buf)).await;
    assert!(closed.is_ok(), "connection still open after header timeout");

    server.shutdown.notify_one();
}
