//! HTTP-level integration tests for the folder and layer APIs.
//!
//! Each test skips when `LAYERHUB_TEST_DATABASE_URL` is unset.

mod helpers;

use http::StatusCode;
use serde_json::json;

macro_rules! test_app {
    () => {
        match helpers::acquire().await {
            Some(pair) => pair,
            None => {
                eprintln!("LAYERHUB_TEST_DATABASE_URL not set; skipping");
                return;
            }
        }
    };
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_guard, app) = test_app!();
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
}

#[tokio::test]
async fn test_create_folder_and_list() {
    let (_guard, app) = test_app!();

    let response = app
        .request("POST", "/api/folders", Some(json!({"name": "root"})))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let folder = response.json();
    assert_eq!(folder["id"], 1);
    assert_eq!(folder["name"], "root");
    assert_eq!(folder["parent_id"], serde_json::Value::Null);
    assert_eq!(folder["created_by"], "Anonymous");

    let response = app.request("GET", "/api/folders", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_duplicate_folder_name_is_rejected() {
    let (_guard, app) = test_app!();

    app.request("POST", "/api/folders", Some(json!({"name": "root"})))
        .await;
    let response = app
        .request("POST", "/api/folders", Some(json!({"name": "root"})))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["error"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn test_create_folder_with_missing_parent_is_rejected() {
    let (_guard, app) = test_app!();

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({"name": "orphan", "parent_id": 99})),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_folder_update_applies_only_supplied_fields() {
    let (_guard, app) = test_app!();

    app.request("POST", "/api/folders", Some(json!({"name": "root"})))
        .await;
    app.request(
        "POST",
        "/api/folders",
        Some(json!({"name": "child", "parent_id": 1})),
    )
    .await;

    let response = app
        .request(
            "PATCH",
            "/api/folders",
            Some(json!({"id": 2, "name": "renamed"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let folder = response.json();
    assert_eq!(folder["name"], "renamed");
    assert_eq!(folder["parent_id"], 1);
}

#[tokio::test]
async fn test_list_folders_by_parent() {
    let (_guard, app) = test_app!();

    app.request("POST", "/api/folders", Some(json!({"name": "root"})))
        .await;
    app.request(
        "POST",
        "/api/folders",
        Some(json!({"name": "child", "parent_id": 1})),
    )
    .await;

    let roots = app.request("GET", "/api/folders/by-parent", None).await;
    assert_eq!(roots.status, StatusCode::OK);
    assert_eq!(roots.json()[0]["name"], "root");
    assert_eq!(roots.json().as_array().map(Vec::len), Some(1));

    let children = app
        .request("GET", "/api/folders/by-parent?parent_id=1", None)
        .await;
    assert_eq!(children.json()[0]["name"], "child");

    let missing = app
        .request("GET", "/api/folders/by-parent?parent_id=999", None)
        .await;
    assert_eq!(missing.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_deleting_a_folder_cascades_to_descendants() {
    let (_guard, app) = test_app!();

    app.request("POST", "/api/folders", Some(json!({"name": "root"})))
        .await;
    app.request(
        "POST",
        "/api/folders",
        Some(json!({"name": "child", "parent_id": 1})),
    )
    .await;
    let body = helpers::multipart_body(
        &[("server_link", "https://x.test/data"), ("folder_id", "2")],
        None,
    );
    let created = app.request_multipart("/api/layers?name=filed", body).await;
    assert_eq!(created.status, StatusCode::OK);

    let response = app.request("DELETE", "/api/folders?id=1", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json()["status"],
        "Folder with id 1 was successfully deleted"
    );

    assert_eq!(app.count("folders").await, 0);
    assert_eq!(app.count("layers").await, 0);
}

#[tokio::test]
async fn test_delete_missing_folder_is_rejected() {
    let (_guard, app) = test_app!();

    let response = app.request("DELETE", "/api/folders?id=7", None).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_folder_list_pagination_window() {
    let (_guard, app) = test_app!();

    for name in ["one", "two", "three"] {
        app.request("POST", "/api/folders", Some(json!({"name": name})))
            .await;
    }

    let response = app
        .request("GET", "/api/folders?limit=1&offset=1", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let folders = response.json();
    assert_eq!(folders.as_array().map(Vec::len), Some(1));
    assert_eq!(folders[0]["name"], "two");
}

#[tokio::test]
async fn test_create_layer_with_link_and_fetch_content() {
    let (_guard, app) = test_app!();

    let body = helpers::multipart_body(&[("server_link", "https://x.test/data")], None);
    let response = app.request_multipart("/api/layers?name=a", body).await;
    assert_eq!(response.status, StatusCode::OK);
    let layer = response.json();
    assert_eq!(layer["id"], 1);
    assert_eq!(layer["file_link"], "https://x.test/data");
    assert_eq!(layer["folder_id"], serde_json::Value::Null);

    // External links are returned verbatim, not fetched server-side.
    let content = app.request("GET", "/api/layers/content?id=1", None).await;
    assert_eq!(content.status, StatusCode::OK);
    assert_eq!(content.text, "https://x.test/data");
}

#[tokio::test]
async fn test_duplicate_layer_name_is_rejected() {
    let (_guard, app) = test_app!();

    let body = helpers::multipart_body(&[("server_link", "https://x.test/")], None);
    app.request_multipart("/api/layers?name=a", body).await;

    let body = helpers::multipart_body(&[("server_link", "https://y.test/")], None);
    let response = app.request_multipart("/api/layers?name=a", body).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["error"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn test_layer_create_requires_exactly_one_source() {
    let (_guard, app) = test_app!();

    let body = helpers::multipart_body(
        &[("server_link", "https://x.test/")],
        Some(("data.geojson", b"{}" as &[u8])),
    );
    let both = app.request_multipart("/api/layers?name=a", body).await;
    assert_eq!(both.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(both.json()["error"], "CONFLICTING_UPLOAD_SOURCE");

    let body = helpers::multipart_body(&[], None);
    let neither = app.request_multipart("/api/layers?name=a", body).await;
    assert_eq!(neither.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(neither.json()["error"], "MISSING_UPLOAD_SOURCE");

    assert_eq!(app.count("layers").await, 0);
}

#[tokio::test]
async fn test_layer_create_with_unsupported_extension_is_rejected() {
    let (_guard, app) = test_app!();

    let body = helpers::multipart_body(&[], Some(("data.txt", b"hello" as &[u8])));
    let response = app.request_multipart("/api/layers?name=notes", body).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["error"], "UNSUPPORTED_FILE_TYPE");
    assert_eq!(app.count("layers").await, 0);
}

#[tokio::test]
async fn test_layer_create_with_invalid_link_is_rejected() {
    let (_guard, app) = test_app!();

    let body = helpers::multipart_body(&[("server_link", "not a url")], None);
    let response = app.request_multipart("/api/layers?name=a", body).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["error"], "VALIDATION");
}

#[tokio::test]
async fn test_layer_update_moves_between_folders() {
    let (_guard, app) = test_app!();

    app.request("POST", "/api/folders", Some(json!({"name": "maps"})))
        .await;
    let body = helpers::multipart_body(&[("server_link", "https://x.test/")], None);
    app.request_multipart("/api/layers?name=a", body).await;

    let moved = app
        .request("PATCH", "/api/layers/1", Some(json!({"folder_id": 1})))
        .await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.json()["folder_id"], 1);

    let unfiled = app
        .request("PATCH", "/api/layers/1", Some(json!({"folder_id": null})))
        .await;
    assert_eq!(unfiled.status, StatusCode::OK);
    assert_eq!(unfiled.json()["folder_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_layer_update_to_missing_folder_leaves_layer_unchanged() {
    let (_guard, app) = test_app!();

    let body = helpers::multipart_body(&[("server_link", "https://x.test/")], None);
    app.request_multipart("/api/layers?name=a", body).await;

    let response = app
        .request("PATCH", "/api/layers/1", Some(json!({"folder_id": 999})))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let layers = app.request("GET", "/api/layers", None).await;
    assert_eq!(layers.json()[0]["folder_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_delete_link_backed_layer() {
    let (_guard, app) = test_app!();

    let body = helpers::multipart_body(&[("server_link", "https://x.test/")], None);
    app.request_multipart("/api/layers?name=a", body).await;

    let response = app.request("DELETE", "/api/layers?id=1", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json()["status"],
        "Layer with id 1 was successfully deleted"
    );
    assert_eq!(app.count("layers").await, 0);

    let missing = app.request("DELETE", "/api/layers?id=1", None).await;
    assert_eq!(missing.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_layers_by_folder() {
    let (_guard, app) = test_app!();

    app.request("POST", "/api/folders", Some(json!({"name": "maps"})))
        .await;
    let body = helpers::multipart_body(
        &[("server_link", "https://x.test/"), ("folder_id", "1")],
        None,
    );
    app.request_multipart("/api/layers?name=filed", body).await;
    let body = helpers::multipart_body(&[("server_link", "https://y.test/")], None);
    app.request_multipart("/api/layers?name=unfiled", body).await;

    let filed = app
        .request("GET", "/api/layers/by-folder?folder_id=1", None)
        .await;
    assert_eq!(filed.json().as_array().map(Vec::len), Some(1));
    assert_eq!(filed.json()[0]["name"], "filed");

    let unfiled = app.request("GET", "/api/layers/by-folder", None).await;
    assert_eq!(unfiled.json().as_array().map(Vec::len), Some(1));
    assert_eq!(unfiled.json()[0]["name"], "unfiled");

    let missing = app
        .request("GET", "/api/layers/by-folder?folder_id=9", None)
        .await;
    assert_eq!(missing.status, StatusCode::UNPROCESSABLE_ENTITY);
}
