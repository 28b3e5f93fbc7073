use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use medisearch::config::Config;
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let config = Config::default();

    let state = medisearch::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    medisearch::api::router(state).await
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_global_search() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/search?query=doe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let results = body["data"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["type"], "patient");
    assert_eq!(results[0]["title"], "John Doe");
    assert_eq!(results[0]["subtitle"], "Patient ID: 1 | Admitted");
    assert_eq!(results[0]["link"], "/patients/1");
    assert_eq!(results[0]["data"]["id"], 1);
    assert_eq!(results[0]["data"]["ward"], "Cardiology");
}

#[tokio::test]
async fn test_blank_global_search() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/search?query=%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));

    let (status, body) = send(&app, "GET", "/api/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));

    let (_, body) = send(&app, "GET", "/api/search/history").await;
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_category_search_with_filters() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/search/patients?status=Discharged").await;
    assert_eq!(status, StatusCode::OK);
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 2);
    assert_eq!(records[0]["name"], "Jane Smith");

    let (status, body) = send(
        &app,
        "GET",
        "/api/search/medications?query=tablets&status=In%20Stock",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Amoxicillin");

    let (_, body) = send(&app, "GET", "/api/search/staff?department=").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_category_and_field() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/search/bogus?query=x").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("bogus"));

    let (status, _) = send(&app, "GET", "/api/search/patients?blood_type=O").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/search/patients/filters/blood_type").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/search/bogus/filters").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_fields_and_values() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/search/patients/filters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        serde_json::json!(["status", "ward", "gender"])
    );

    let (status, body) = send(&app, "GET", "/api/search/resources/filters/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!(["Available", "In Use"]));
}

#[tokio::test]
async fn test_history_lifecycle() {
    let app = spawn_app().await;

    for query in ["a", "b", "a"] {
        let (status, _) = send(&app, "GET", &format!("/api/search?query={query}")).await;
        assert_eq!(status, StatusCode::OK);
    }

    // Category search does not feed history
    send(&app, "GET", "/api/search/staff?query=chen").await;

    let (_, body) = send(&app, "GET", "/api/search/history").await;
    assert_eq!(body["data"], serde_json::json!(["a", "b"]));

    let (status, _) = send(&app, "DELETE", "/api/search/history").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/api/search/history").await;
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_status_and_reload() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/system/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["provider"], "seed");
    assert_eq!(body["data"]["categories"][0]["category"], "patients");
    assert_eq!(body["data"]["categories"][0]["records"], 2);

    let (status, body) = send(&app, "POST", "/api/search/reload").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["provider"], "seed");
    assert_eq!(body["data"]["categories"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_oversized_query_is_rejected() {
    let app = spawn_app().await;
    let query = "x".repeat(300);

    let (status, body) = send(&app, "GET", &format!("/api/search?query={query}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_metrics_disabled_without_recorder() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("not enabled"));
}

#[tokio::test]
async fn test_dataset_file_provider() {
    let path = std::env::temp_dir().join(format!(
        "medisearch-api-dataset-{}.json",
        uuid::Uuid::new_v4()
    ));
    std::fs::write(
        &path,
        r#"{"staff": [{"id": "S-17", "name": "Dr. Amal Idris", "role": "Surgeon", "department": "Surgery", "status": "On Call"}]}"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.search.dataset_path = Some(path.clone());
    let state = medisearch::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    let app = medisearch::api::router(state).await;

    let (_, body) = send(&app, "GET", "/api/system/status").await;
    assert_eq!(body["data"]["provider"], "file");

    let (status, body) = send(&app, "GET", "/api/search?query=surg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["link"], "/staff/S-17");
    assert_eq!(body["data"][0]["subtitle"], "Surgeon | Surgery");

    let (_, body) = send(&app, "GET", "/api/search/patients").await;
    assert_eq!(body["data"], serde_json::json!([]));

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn test_failed_reload_returns_bad_gateway_and_keeps_data() {
    let path = std::env::temp_dir().join(format!(
        "medisearch-api-reload-{}.json",
        uuid::Uuid::new_v4()
    ));
    std::fs::write(
        &path,
        r#"{"patients": [{"id": 1, "name": "John Doe", "status": "Admitted"}]}"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.search.dataset_path = Some(path.clone());
    let state = medisearch::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    let app = medisearch::api::router(state).await;

    let (_, before) = send(&app, "GET", "/api/system/status").await;
    assert_eq!(before["data"]["categories"][0]["records"], 1);

    std::fs::write(&path, "{ not json").unwrap();
    let (status, body) = send(&app, "POST", "/api/search/reload").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Record provider is unavailable");

    std::fs::remove_file(&path).unwrap();
    let (status, _) = send(&app, "POST", "/api/search/reload").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, after) = send(&app, "GET", "/api/system/status").await;
    assert_eq!(after["data"]["categories"], before["data"]["categories"]);

    let (_, body) = send(&app, "GET", "/api/search/patients?query=john").await;
    assert_eq!(body["data"][0]["name"], "John Doe");
}
