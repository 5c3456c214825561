//! Integration tests for candidate endpoints.

mod helpers;

use axum::http::StatusCode;

use helpers::{Form, TestApp};

#[tokio::test]
async fn test_create_candidate_with_file() {
    let app = TestApp::new().await;

    let form = Form::candidate("Ann", "backend developer", "3").file("cv.pdf", b"%PDF");
    let response = app.multipart("POST", "/api/candidates", &form).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.body["name"], "Ann");
    assert_eq!(response.body["city_id"], 3);
    assert_eq!(response.body["file_id"], 1);
    assert_eq!(response.body["file_url"], "/files/1");
    assert!(response.body["creation_date"].is_string());

    let file = app.request("GET", "/files/1").await;
    assert_eq!(file.status, StatusCode::OK);
    assert_eq!(file.bytes, b"%PDF");
}

#[tokio::test]
async fn test_create_candidate_without_file_stores_empty_file() {
    let app = TestApp::new().await;

    let form = Form::candidate("Bob", "", "1");
    let response = app.multipart("POST", "/api/candidates", &form).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let file = app.request("GET", "/files/1").await;
    assert_eq!(file.status, StatusCode::OK);
    assert!(file.bytes.is_empty());
    assert_eq!(app.blob_count(), 1);
}

#[tokio::test]
async fn test_create_candidate_rejects_invalid_city() {
    let app = TestApp::new().await;

    let form = Form::candidate("Ann", "", "Paris").file("cv.pdf", b"x");
    let response = app.multipart("POST", "/api/candidates", &form).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
    assert_eq!(app.blob_count(), 0);
}

#[tokio::test]
async fn test_list_and_get_candidates() {
    let app = TestApp::new().await;
    for name in ["Ann", "Bob"] {
        let form = Form::candidate(name, "", "1").file("cv.txt", name.as_bytes());
        app.multipart("POST", "/api/candidates", &form).await;
    }

    let list = app.request("GET", "/api/candidates").await;
    assert_eq!(list.status, StatusCode::OK);
    let names: Vec<&str> = list
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ann", "Bob"]);

    let one = app.request("GET", "/api/candidates/2").await;
    assert_eq!(one.status, StatusCode::OK);
    assert_eq!(one.body["name"], "Bob");

    let missing = app.request("GET", "/api/candidates/99").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_without_file_keeps_attachment() {
    let app = TestApp::new().await;
    let form = Form::candidate("Ann", "", "1").file("a.txt", b"a");
    app.multipart("POST", "/api/candidates", &form).await;

    let form = Form::candidate("Anna", "senior", "2").file("", b"");
    let response = app.multipart("PUT", "/api/candidates/1", &form).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Anna");
    assert_eq!(response.body["description"], "senior");
    assert_eq!(response.body["file_id"], 1);
    assert_eq!(app.request("GET", "/files/1").await.bytes, b"a");
}

#[tokio::test]
async fn test_update_with_file_replaces_attachment() {
    let app = TestApp::new().await;
    let form = Form::candidate("Ann", "", "1").file("a.txt", &[1, 2, 3]);
    app.multipart("POST", "/api/candidates", &form).await;

    let form = Form::candidate("Ann", "", "1").file("b.txt", &[4, 5]);
    let response = app.multipart("PUT", "/api/candidates/1", &form).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["file_id"], 2);
    assert_eq!(app.request("GET", "/files/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.request("GET", "/files/2").await.bytes, vec![4, 5]);
    assert_eq!(app.blob_count(), 1);
}

#[tokio::test]
async fn test_update_unknown_candidate_is_not_found() {
    let app = TestApp::new().await;

    let form = Form::candidate("Ghost", "", "1").file("b.txt", b"b");
    let response = app.multipart("PUT", "/api/candidates/7", &form).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.blob_count(), 0);
}

#[tokio::test]
async fn test_delete_candidate_removes_file() {
    let app = TestApp::new().await;
    let form = Form::candidate("Ann", "", "1").file("a.txt", b"a");
    app.multipart("POST", "/api/candidates", &form).await;

    let response = app.request("DELETE", "/api/candidates/1").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(app.request("GET", "/files/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.blob_count(), 0);

    let again = app.request("DELETE", "/api/candidates/1").await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_over_limit_is_rejected() {
    let app = TestApp::new().await;

    let big = vec![0u8; 128 * 1024];
    let form = Form::candidate("Ann", "", "1").file("big.bin", &big);
    let response = app.multipart("POST", "/api/candidates", &form).await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["error"], "PAYLOAD_TOO_LARGE");
    assert_eq!(app.blob_count(), 0);
}

#[tokio::test]
async fn test_storage_failure_does_not_expose_blob_paths() {
    let app = TestApp::new().await;
    let root = app.storage_dir.path().to_string_lossy().into_owned();
    std::fs::remove_dir_all(app.storage_dir.path()).unwrap();

    let form = Form::candidate("Ann", "", "1").file("cv.pdf", b"%PDF");
    let response = app.multipart("POST", "/api/candidates", &form).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "STORAGE");
    let text = String::from_utf8_lossy(&response.bytes);
    assert!(!text.contains(&root), "blob path leaked: {text}");
    assert!(!text.contains("cv.pdf"), "blob name leaked: {text}");
}
