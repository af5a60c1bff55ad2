//! Shared helpers for API integration tests.
//!
//! Tests run against a live PostgreSQL instance named by
//! `LAYERHUB_TEST_DATABASE_URL` and skip silently when it is unset, so
//! `cargo test` stays green without infrastructure. The object store is
//! never contacted: every scenario here either uses link-backed layers or
//! fails validation before the upload step.

use std::sync::OnceLock;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt;

use layerhub_core::config::AppConfig;

/// Boundary marker for hand-built multipart bodies.
pub const BOUNDARY: &str = "layerhub-test-boundary";

/// Serializes tests in this binary; they share one database.
pub async fn serial() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().await
}

/// Acquire the test lock and build the app; `None` skips the test when no
/// test database is configured. The guard must be held for the whole test.
pub async fn acquire() -> Option<(MutexGuard<'static, ()>, TestApp)> {
    let guard = serial().await;
    let app = TestApp::try_new().await?;
    Some((guard, app))
}

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct assertions.
    pub db_pool: PgPool,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Raw body text.
    pub text: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or(Value::Null)
    }
}

impl TestApp {
    /// Create a test application, or `None` when no test database is
    /// configured.
    pub async fn try_new() -> Option<Self> {
        let url = std::env::var("LAYERHUB_TEST_DATABASE_URL").ok()?;

        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": {},
            "database": { "url": url, "max_connections": 5, "min_connections": 1 },
            "storage": { "endpoint": "localhost:9" },
            "auth": { "mode": "disabled" },
            "logging": {}
        }))
        .expect("test config");

        let db_pool = layerhub_database::DatabasePool::connect(&config.database)
            .await
            .expect("connect to test database")
            .into_pool();

        layerhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("run migrations");

        sqlx::query("TRUNCATE folders, layers RESTART IDENTITY CASCADE")
            .execute(&db_pool)
            .await
            .expect("clean database");

        let state =
            layerhub_api::app::build_state(config, db_pool.clone()).expect("build state");

        Some(Self {
            router: layerhub_api::build_app(state),
            db_pool,
        })
    }

    /// Issue a request with an optional JSON body.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).expect("request")).await
    }

    /// Issue a multipart POST, as the layer-create endpoint expects.
    pub async fn request_multipart(&self, uri: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("request");

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");

        TestResponse {
            status,
            text: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// Count rows in a table directly.
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.db_pool)
            .await
            .expect("count rows")
    }
}

/// Build a multipart body with text fields and an optional file part.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
