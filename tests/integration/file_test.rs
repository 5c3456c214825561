//! Integration tests for file download and health endpoints.

mod helpers;

use axum::http::{StatusCode, header};

use dreamjob_entity::file::FileContent;
use helpers::TestApp;

#[tokio::test]
async fn test_download_existing_file() {
    let app = TestApp::new().await;
    let record = app
        .state
        .file_service
        .save(FileContent::new("notes.txt", "hello"))
        .await
        .unwrap();

    let response = app.request("GET", &format!("/files/{}", record.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.bytes, b"hello");
    assert_eq!(
        response.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"notes.txt\""
    );
    assert_eq!(
        response.headers[header::CONTENT_TYPE],
        "application/octet-stream"
    );
}

#[tokio::test]
async fn test_download_unknown_file_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/files/42").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_download_with_missing_blob_is_server_error() {
    let app = TestApp::new().await;
    let record = app
        .state
        .file_service
        .save(FileContent::new("gone.txt", "x"))
        .await
        .unwrap();
    std::fs::remove_file(&record.storage_path).unwrap();

    let response = app.request("GET", &format!("/files/{}", record.id)).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "STORAGE");
}

#[tokio::test]
async fn test_non_numeric_file_id_is_rejected() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/files/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_reports_components() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["storage"]["provider"], "local");
    assert_eq!(response.body["storage"]["healthy"], true);
    assert_eq!(response.body["database"]["provider"], "memory");
}

#[tokio::test]
async fn test_health_degrades_when_storage_root_disappears() {
    let app = TestApp::new().await;
    std::fs::remove_dir_all(app.storage_dir.path()).unwrap();

    let response = app.request("GET", "/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["storage"]["healthy"], false);
}
