use super::driver::simulate_score_updates;
use crate::leaderboard::index::Leaderboard;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateUpdateResponse {
    pub message: String,
    pub users_updated: usize,
}

pub async fn handle_simulate_update(
    Extension(leaderboard): Extension<Arc<Leaderboard>>,
) -> Json<SimulateUpdateResponse> {
    let users_updated = simulate_score_updates(&leaderboard).await;
    tracing::debug!("On-demand update touched {} users", users_updated);

    Json(SimulateUpdateResponse {
        message: "Scores updated successfully".to_string(),
        users_updated,
    })
}
