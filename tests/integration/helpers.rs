//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use dreamjob_api::{AppState, build_app};
use dreamjob_core::config::AppConfig;
use dreamjob_database::RepositoryManager;
use dreamjob_service::FileService;
use dreamjob_storage::LocalBlobStore;

const BOUNDARY: &str = "dreamjob-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Blob storage root, removed on drop
    pub storage_dir: tempfile::TempDir,
    /// Application state shared with the router
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application on in-memory repositories and a temp storage root.
    pub async fn new() -> Self {
        let storage_dir = tempfile::tempdir().expect("Failed to create storage dir");

        let mut config = AppConfig::default();
        config.storage.root_path = storage_dir.path().to_string_lossy().into_owned();
        config.storage.max_upload_size_bytes = 64 * 1024;

        let store = LocalBlobStore::new(&config.storage.root_path)
            .await
            .expect("Failed to init storage");
        let repositories = RepositoryManager::in_memory();
        let file_service = Arc::new(FileService::new(Arc::new(store), repositories.files()));
        let state = AppState::new(config, repositories, file_service);

        Self {
            router: build_app(state.clone()),
            storage_dir,
            state,
        }
    }

    /// Number of blobs currently on disk.
    pub fn blob_count(&self) -> usize {
        std::fs::read_dir(self.storage_dir.path())
            .expect("Failed to list storage dir")
            .count()
    }

    /// Send a request without a body.
    pub async fn request(&self, method: &str, path: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Send a multipart form.
    pub async fn multipart(&self, method: &str, path: &str, form: &Form) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(form.encode()))
            .expect("Failed to build request");
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            bytes,
            body,
        }
    }
}

/// Multipart form under construction.
#[derive(Debug, Default)]
pub struct Form {
    parts: Vec<Vec<u8>>,
}

impl Form {
    /// Start a candidate form with the three text fields.
    pub fn candidate(name: &str, description: &str, city_id: &str) -> Self {
        Self::default()
            .text("name", name)
            .text("description", description)
            .text("city_id", city_id)
    }

    /// Add a text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        let mut part = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n"
        )
        .into_bytes();
        part.extend_from_slice(value.as_bytes());
        part.extend_from_slice(b"\r\n");
        self.parts.push(part);
        self
    }

    /// Add the `file` part.
    pub fn file(mut self, file_name: &str, data: &[u8]) -> Self {
        let mut part = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        part.extend_from_slice(data);
        part.extend_from_slice(b"\r\n");
        self.parts.push(part);
        self
    }

    fn encode(&self) -> Vec<u8> {
        let mut body = self.parts.concat();
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub bytes: Vec<u8>,
    /// Body parsed as JSON, or `Null`
    pub body: Value,
}
