use super::index::Leaderboard;
use super::types::{ErrorResponse, HealthResponse, LeaderboardResponse};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const MAX_PAGE_SIZE: usize = 500;

#[derive(Deserialize)]
pub struct LeaderboardParams {
    // Raw strings: malformed values fall back to defaults instead of a 400.
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub username: Option<String>,
}

pub async fn handle_leaderboard(
    Query(params): Query<LeaderboardParams>,
    Extension(leaderboard): Extension<Arc<Leaderboard>>,
) -> Json<LeaderboardResponse> {
    let page = params
        .page
        .as_deref()
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(DEFAULT_PAGE);

    let page_size = params
        .size
        .as_deref()
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|&size| size >= 1)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);

    Json(leaderboard.page(page, page_size).await)
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(leaderboard): Extension<Arc<Leaderboard>>,
) -> Response {
    let term = match params.username {
        Some(term) if !term.is_empty() => term,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "username query parameter is required".to_string(),
                }),
            )
                .into_response();
        }
    };

    Json(leaderboard.search(&term).await).into_response()
}

pub async fn handle_health(
    Extension(leaderboard): Extension<Arc<Leaderboard>>,
) -> Json<HealthResponse> {
    let total_users = leaderboard.all_users().await.len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        total_users,
        timestamp: now_ms(),
    })
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
