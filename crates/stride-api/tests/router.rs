//! Router-level tests driven through `tower::ServiceExt::oneshot`.

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use stride_api::{create_router, ApiConfig, AppState};

async fn test_router(results_dir: &std::path::Path) -> axum::Router {
    let config = ApiConfig {
        results_dir: results_dir.to_path_buf(),
        ..ApiConfig::default()
    };
    let state = AppState::new(config).await.unwrap();
    create_router(state, None)
}

fn with_client_addr(mut request: Request<Body>) -> Request<Body> {
    let addr: SocketAddr = "203.0.113.10:5555".parse().unwrap();
    request.extensions_mut().insert(ConnectInfo(addr));
    request
}

fn multipart_upload(filename: &str, content: &[u8]) -> Request<Body> {
    let boundary = "stride-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"video\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    with_client_addr(
        Request::builder()
            .method("POST")
            .uri("/api/analyze-video")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
}

#[tokio::test]
async fn health_endpoint_is_live() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_router(dir.path()).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unsupported_extension_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_router(dir.path()).await;

    let response = app
        .oneshot(multipart_upload("notes.txt", b"not a video"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_video_part_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_router(dir.path()).await;

    let boundary = "stride-test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; \
         name=\"athlete_id\"\r\n\r\nath-1\r\n--{boundary}--\r\n"
    );

    let request = with_client_addr(
        Request::builder()
            .method("POST")
            .uri("/api/analyze-video")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap(),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejected_upload_leaves_no_partial_output() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_router(dir.path()).await;

    let response = app
        .oneshot(multipart_upload("clip.mkv", b"wrong container"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was written under the results directory.
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty());
}
