//! Router-level tests for the HTTP surface

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use hsc_study::{
    api::create_app,
    core::{create_app_state, Config, StorageType},
};
use serde_json::Value;
use tower::ServiceExt;

fn app(storage_type: StorageType) -> Router {
    let mut config = Config::default();
    config.storage.storage_type = storage_type;
    create_app(create_app_state(config).unwrap())
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn seeded() -> (Router, Vec<Value>) {
    let app = app(StorageType::Memory);
    let (status, _) = call(&app, Method::POST, "/seed").await;
    assert_eq!(status, StatusCode::OK);
    let (_, subjects) = call(&app, Method::GET, "/subjects").await;
    (app, subjects.as_array().unwrap().clone())
}

#[tokio::test]
async fn root_is_alive() {
    let (status, body) = call(&app(StorageType::Memory), Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Maharashtra HSC Study API is running");
}

#[tokio::test]
async fn seeding_twice_creates_nothing_new() {
    let app = app(StorageType::Memory);

    let (status, first) = call(&app, Method::POST, "/seed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, serde_json::json!({ "subjects": 4, "chapters": 49 }));

    let (_, second) = call(&app, Method::POST, "/seed").await;
    assert_eq!(second, serde_json::json!({ "subjects": 0, "chapters": 0 }));
}

#[tokio::test]
async fn default_subject_listing() {
    let (_, subjects) = seeded().await;
    assert_eq!(subjects.len(), 4);

    let mut titles: Vec<&str> = subjects.iter().map(|s| s["title"].as_str().unwrap()).collect();
    titles.sort();
    assert_eq!(
        titles,
        vec![
            "Book-keeping & Accountancy",
            "Economics",
            "Organization of Commerce & Management",
            "Secretarial Practice",
        ]
    );

    for subject in &subjects {
        assert!(!subject["id"].as_str().unwrap().is_empty());
        assert!(subject.get("_id").is_none());
        assert_eq!(subject["std"], "12");
        assert_eq!(subject["board"], "Maharashtra State Board");
        assert_eq!(subject["medium"], "English");
    }
}

#[tokio::test]
async fn subject_filter_from_query() {
    let (app, _) = seeded().await;

    let (status, body) = call(&app, Method::GET, "/subjects?std=11").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));

    let (_, body) = call(&app, Method::GET, "/subjects?std=12&medium=English").await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn chapters_are_ordered_and_linked() {
    let (app, subjects) = seeded().await;
    let economics = subjects.iter().find(|s| s["title"] == "Economics").unwrap();
    let id = economics["id"].as_str().unwrap();

    let (status, body) = call(&app, Method::GET, &format!("/subjects/{}/chapters", id)).await;
    assert_eq!(status, StatusCode::OK);

    let chapters = body.as_array().unwrap();
    assert_eq!(chapters.len(), 13);
    let numbers: Vec<i64> = chapters.iter().map(|c| c["number"].as_i64().unwrap()).collect();
    assert_eq!(numbers, (1..=13).collect::<Vec<_>>());
    for chapter in chapters {
        assert_eq!(chapter["subject_id"], id);
        assert!(chapter.get("_id").is_none());
    }
}

#[tokio::test]
async fn unknown_subject_has_no_chapters() {
    let (app, _) = seeded().await;
    let (status, body) = call(&app, Method::GET, "/subjects/doesNotExist/chapters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn disabled_storage_reports_not_configured() {
    let app = app(StorageType::Disabled);

    for (method, uri) in [
        (Method::POST, "/seed"),
        (Method::GET, "/subjects"),
        (Method::GET, "/subjects/abc/chapters"),
    ] {
        let (status, body) = call(&app, method, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body["detail"], "Database not configured");
    }

    let (status, _) = call(&app, Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn diagnostics_follow_store_state() {
    let (status, body) = call(&app(StorageType::Disabled), Method::GET, "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "❌ Not Available");
    assert_eq!(body["connection_status"], "Not Connected");

    let (app, _) = seeded().await;
    let (_, body) = call(&app, Method::GET, "/test").await;
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["database_name"], "hsc_study");
    assert_eq!(body["collections"], serde_json::json!(["chapter", "subject"]));
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::ORIGIN, "https://study.example.org")
        .body(Body::empty())
        .unwrap();

    let response = app(StorageType::Memory).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let file_app = || {
        let mut config = Config::default();
        config.storage.storage_type = StorageType::File;
        config.storage.data_dir = dir.path().to_path_buf();
        create_app(create_app_state(config).unwrap())
    };

    let (_, first) = call(&file_app(), Method::POST, "/seed").await;
    assert_eq!(first["subjects"], 4);

    let reopened = file_app();
    let (_, second) = call(&reopened, Method::POST, "/seed").await;
    assert_eq!(second, serde_json::json!({ "subjects": 0, "chapters": 0 }));

    let (_, subjects) = call(&reopened, Method::GET, "/subjects").await;
    assert_eq!(subjects.as_array().unwrap().len(), 4);
}
