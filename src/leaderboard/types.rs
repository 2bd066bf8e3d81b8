//! Leaderboard Wire Types
//!
//! Data Transfer Objects (DTOs) shared between the index and the HTTP
//! layer. All response types serialize with camelCase field names to match
//! the client contract.

use serde::{Deserialize, Serialize};

/// A rated participant.
///
/// The id is externally assigned and immutable, the username is fixed at
/// creation, only the rating changes over the user's lifetime. Ratings are
/// kept within [100, 5000] by every mutation path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub rating: i32,
}

/// A user decorated with its dense global rank for query responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedUser {
    pub global_rank: usize,
    pub id: u32,
    pub username: String,
    pub rating: i32,
}

/// One page of the leaderboard, ranked within the requested window.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub users: Vec<RankedUser>,
    pub total_users: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Username search results with globally computed ranks.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub users: Vec<RankedUser>,
    pub count: usize,
}

/// Error payload for rejected requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub total_users: usize,
    pub timestamp: u64,
}
