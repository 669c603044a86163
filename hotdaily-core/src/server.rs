//! HTTP mode: serves the same pages as the static build, rendered per request
//!
//! Handlers re-read the archive on every request, so new reports show up
//! without a restart.

use crate::archive::{build_index, latest_report, load_report, report_path, ReportStatus};
use crate::calendar::YearMonth;
use crate::config::ResolvedConfig;
use crate::html::html_escape;
use crate::pages::{
    render_all, render_calendar, render_detail, render_history, render_home, render_not_found,
    render_today, PageContext,
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, MethodRouter},
    Router,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ResolvedConfig>,
}

impl AppState {
    pub fn new(config: ResolvedConfig) -> Self {
        AppState {
            config: Arc::new(config),
        }
    }

    fn ctx(&self) -> PageContext<'_> {
        PageContext::new(&self.config)
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(render_not_found(&self.ctx()))
    }
}

/// Build the router for every page URL plus `/health`
///
/// Page routes answer both with and without a trailing slash and are
/// prefixed with the configured base path. Under a base path the root page
/// answers `/base` and `/base/`.
pub fn create_router(state: AppState) -> Router {
    let base = state.config.base_path.trim_end_matches('/').to_string();

    let mut router = if base.is_empty() {
        Router::new().route("/", get(home))
    } else {
        route_both(Router::new(), &base, get(home))
    };
    for (path, handler) in [
        ("/today", get(today)),
        ("/all", get(all_first)),
        ("/all/page/:page", get(all_page)),
        ("/history", get(history)),
        ("/history/calendar", get(calendar_latest)),
        ("/history/calendar/:month", get(calendar_month)),
        ("/history/:date", get(detail)),
    ] {
        router = route_both(router, &format!("{}{}", base, path), handler);
    }
    router = router.route(
        &format!("{}/data/archive/:date/:file", base),
        get(report_json),
    );

    router
        .route("/health", get(health_check))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn route_both(
    router: Router<AppState>,
    path: &str,
    handler: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, handler.clone())
        .route(&format!("{}/", path), handler)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

fn latest(config: &ResolvedConfig) -> ReportStatus {
    latest_report(&config.data_dir, &config.report_file)
}

async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render_home(&state.ctx(), &latest(&state.config)))
}

async fn today(State(state): State<AppState>) -> Html<String> {
    Html(render_today(&state.ctx(), &latest(&state.config)))
}

async fn all_first(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_all_page(&state, 1)
}

async fn all_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Html<String>, AppError> {
    let page: usize = page.parse().map_err(|_| state.not_found())?;
    render_all_page(&state, page)
}

fn render_all_page(state: &AppState, page: usize) -> Result<Html<String>, AppError> {
    render_all(&state.ctx(), &latest(&state.config), page)
        .map(Html)
        .ok_or_else(|| state.not_found())
}

async fn history(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let index = build_index(&state.config.data_dir, &state.config.report_file)?;
    Ok(Html(render_history(&state.ctx(), &index)))
}

async fn calendar_latest(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_calendar_page(&state, None)
}

async fn calendar_month(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Html<String>, AppError> {
    let month: YearMonth = month.parse().map_err(|_| state.not_found())?;
    render_calendar_page(&state, Some(month))
}

fn render_calendar_page(
    state: &AppState,
    month: Option<YearMonth>,
) -> Result<Html<String>, AppError> {
    let index = build_index(&state.config.data_dir, &state.config.report_file)?;
    render_calendar(&state.ctx(), &index, month)
        .map(Html)
        .ok_or_else(|| state.not_found())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

async fn detail(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Html<String>, AppError> {
    let date = parse_date(&date).ok_or_else(|| state.not_found())?;
    let status = load_report(&state.config.data_dir, date, &state.config.report_file);
    render_detail(&state.ctx(), date, &status)
        .map(Html)
        .ok_or_else(|| state.not_found())
}

async fn report_json(
    State(state): State<AppState>,
    Path((date, file)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let date = parse_date(&date).ok_or_else(|| state.not_found())?;
    if file != state.config.report_file {
        return Err(state.not_found());
    }

    let path = report_path(&state.config.data_dir, date, &state.config.report_file);
    if !path.is_file() {
        return Err(state.not_found());
    }
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| AppError::Internal(format!("failed to read {}: {}", path.display(), e)))?;

    Ok((
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        contents,
    )
        .into_response())
}

async fn fallback(State(state): State<AppState>) -> AppError {
    state.not_found()
}

#[derive(Debug)]
pub enum AppError {
    /// Carries the rendered 404 page
    NotFound(String),
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(format!("{:#}", e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(page) => (StatusCode::NOT_FOUND, Html(page)).into_response(),
            AppError::Internal(message) => {
                tracing::error!("request failed: {}", message);
                let body = format!(
                    r#"<!DOCTYPE html>
<html lang="zh-CN">
<head><meta charset="UTF-8"><title>加载失败</title></head>
<body><h1>加载失败，请刷新重试</h1><p>{}</p></body>
</html>"#,
                    html_escape(&message)
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
            }
        }
    }
}
