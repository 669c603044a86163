//! Router tests, driven in-process against the shared fixture archive

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use hotdaily_core::{create_router, AppState, ResolvedConfig};
use std::path::PathBuf;
use tower::ServiceExt;

fn fixture_archive() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join("archive")
}

fn app_with_base(base_path: &str) -> Router {
    let mut config = ResolvedConfig::defaults().unwrap();
    config.data_dir = fixture_archive();
    config.base_path = base_path.to_string();
    create_router(AppState::new(config))
}

fn app() -> Router {
    app_with_base("/")
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_home_renders_latest_report() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("📊 2026年2月13日 热点简报"));
}

#[tokio::test]
async fn test_routes_accept_both_slash_forms() {
    for uri in [
        "/today",
        "/today/",
        "/all",
        "/all/",
        "/all/page/2",
        "/all/page/2/",
        "/history",
        "/history/",
        "/history/calendar",
        "/history/calendar/",
        "/history/calendar/2026-01",
        "/history/calendar/2026-01/",
        "/history/2026-02-12",
        "/history/2026-02-12/",
    ] {
        let (status, _) = get(app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
    }
}

#[tokio::test]
async fn test_unknown_pages_are_404() {
    for uri in [
        "/all/page/0",
        "/all/page/3",
        "/all/page/two",
        "/history/2026-03-01",
        "/history/not-a-date",
        "/history/calendar/2025-07",
        "/history/calendar/2026-13",
        "/data/archive/2026-02-13/other.json",
        "/data/archive/2026-03-01/full.json",
        "/nope",
    ] {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(body.contains("页面不存在"), "{}", uri);
    }
}

#[tokio::test]
async fn test_malformed_report_detail_is_404() {
    for uri in ["/history/2026-01-30", "/history/2026-01-30/"] {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(body.contains("页面不存在"), "{}", uri);
    }

    // The raw file is still reachable for debugging
    let (status, _) = get(app(), "/data/archive/2026-01-30/full.json").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_report_json_is_served_raw() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/data/archive/2026-02-12/full.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json; charset=utf-8"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let expected = std::fs::read(fixture_archive().join("2026-02-12/full.json")).unwrap();
    assert_eq!(bytes.to_vec(), expected);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_base_path_mounts_pages() {
    for uri in ["/daily", "/daily/"] {
        let (status, body) = get(app_with_base("/daily/"), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(body.contains("📊 2026年2月13日 热点简报"), "{}", uri);
    }

    let (status, body) = get(app_with_base("/daily/"), "/daily/today/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="/daily/history/""#));

    let (status, _) = get(app_with_base("/daily/"), "/daily/data/archive/2026-02-12/full.json").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app_with_base("/daily/"), "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app_with_base("/daily/"), "/today/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app_with_base("/daily/"), "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_archive_still_serves_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ResolvedConfig::defaults().unwrap();
    config.data_dir = dir.path().join("missing");
    let app = create_router(AppState::new(config));

    let (status, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("暂无数据"));

    let (status, body) = get(app, "/history/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("暂无历史归档"));
}
