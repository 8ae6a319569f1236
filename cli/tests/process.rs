//! End-to-end tests of the client against an in-process stub of the core.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tempfile::TempDir;

use plagium::{collect_comparable, ClientError, Config, PlagiumClient, ReportEntry};

/// A multipart part as seen by the stub.
#[derive(Debug, Clone, PartialEq)]
struct ReceivedPart {
    field: String,
    file_name: Option<String>,
    bytes: usize,
}

#[derive(Clone, Default)]
struct Recorder {
    requests: Arc<Mutex<Vec<Vec<ReceivedPart>>>>,
}

/// Pairs every received file with every later one, like the core does.
async fn process_stub(State(recorder): State<Recorder>, mut multipart: Multipart) -> Json<Value> {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().map(|s| s.to_string());
        let bytes = field.bytes().await.unwrap().len();
        parts.push(ReceivedPart {
            field: name,
            file_name,
            bytes,
        });
    }

    let names: Vec<String> = parts.iter().filter_map(|p| p.file_name.clone()).collect();
    let mut report = Vec::new();
    for i in 0..names.len() {
        for j in i + 1..names.len() {
            report.push(json!({ "file1": names[i], "file2": names[j], "similarity": 87.456 }));
        }
    }

    recorder.requests.lock().unwrap().push(parts);
    Json(json!({ "report": report }))
}

async fn failing_stub() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "tree comparison failed")
}

async fn garbage_stub() -> &'static str {
    "<html>not json</html>"
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> PlagiumClient {
    let config = Config {
        base_url: format!("http://{}", addr),
        timeout: Duration::from_secs(5),
    };
    PlagiumClient::new(config).unwrap()
}

fn write_sources(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), format!("def {}():\n    return 1\n", name.replace('.', "_"))).unwrap();
    }
}

#[tokio::test]
async fn test_one_post_with_one_part_per_file() {
    let recorder = Recorder::default();
    let app = Router::new()
        .route("/v1.1/process", post(process_stub))
        .with_state(recorder.clone());
    let addr = spawn(app).await;

    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &["a.py", "b.py", "c.py"]);
    std::fs::write(dir.path().join("README.md"), "ignored").unwrap();

    let files = collect_comparable(&[dir.path().to_path_buf()], &[".py".to_string()]).unwrap();
    let response = client_for(addr).process(&files).await.unwrap();

    let requests = recorder.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);

    let parts = &requests[0];
    let fields: Vec<&str> = parts.iter().map(|p| p.field.as_str()).collect();
    assert_eq!(fields, vec!["file-1", "file-2", "file-3"]);
    let file_names: Vec<Option<&str>> = parts.iter().map(|p| p.file_name.as_deref()).collect();
    assert_eq!(file_names, vec![Some("a.py"), Some("b.py"), Some("c.py")]);
    assert!(parts.iter().all(|p| p.bytes > 0));

    assert_eq!(response.report.len(), 3);
    assert_eq!(
        response.report[0],
        ReportEntry {
            file1: "a.py".into(),
            file2: "b.py".into(),
            similarity: 87.456,
        }
    );
    assert_eq!(response.report[0].display_percentage(), "87.46%");
}

#[tokio::test]
async fn test_empty_report() {
    let app = Router::new().route("/v1.1/process", post(|| async { Json(json!({ "report": [] })) }));
    let addr = spawn(app).await;

    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &["a.py", "b.py"]);
    let files = collect_comparable(&[dir.path().to_path_buf()], &[".py".to_string()]).unwrap();

    let response = client_for(addr).process(&files).await.unwrap();
    assert!(response.report.is_empty());
}

#[tokio::test]
async fn test_server_error_status_is_reported() {
    let app = Router::new().route("/v1.1/process", post(failing_stub));
    let addr = spawn(app).await;

    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &["a.py", "b.py"]);
    let files = collect_comparable(&[dir.path().to_path_buf()], &[".py".to_string()]).unwrap();

    let err = client_for(addr).process(&files).await.unwrap_err();
    match err {
        ClientError::Server { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "tree comparison failed");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let app = Router::new().route("/v1.1/process", post(garbage_stub));
    let addr = spawn(app).await;

    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &["a.py", "b.py"]);
    let files = collect_comparable(&[dir.path().to_path_buf()], &[".py".to_string()]).unwrap();

    let err = client_for(addr).process(&files).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_core() {
    // Bind then release a port so nothing is listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &["a.py", "b.py"]);
    let files = collect_comparable(&[dir.path().to_path_buf()], &[".py".to_string()]).unwrap();

    let err = client_for(addr).process(&files).await.unwrap_err();
    match err {
        ClientError::Connection { url } => assert!(url.ends_with("/v1.1/process")),
        other => panic!("unexpected error: {:?}", other),
    }
}
