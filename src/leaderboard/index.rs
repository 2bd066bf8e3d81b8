use super::rank::RankWalker;
use super::types::{LeaderboardResponse, RankedUser, SearchResponse, User};

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

pub const MIN_RATING: i32 = 100;
pub const MAX_RATING: i32 = 5000;

/// Ordering key for the ranked set: rating descending, id ascending.
///
/// The key embeds a mutable field. An indexed entry must be removed under
/// its old key before the stored rating changes and reinserted under the
/// new one afterwards; once the rating has been mutated the old entry can
/// no longer be found in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RankKey {
    rating: i32,
    id: u32,
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rating
            .cmp(&self.rating)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
struct LeaderboardState {
    users: HashMap<u32, User>,
    users_by_name: HashMap<String, Vec<u32>>,
    ranked: BTreeSet<RankKey>,
}

/// The in-memory ranked index.
///
/// One write-preferring reader-writer lock guards the user store, the name
/// index and the ranked set as a single unit, so every query sees a
/// consistent snapshot of all three. No await point sits between lock
/// acquisition and release inside any operation.
pub struct Leaderboard {
    state: RwLock<LeaderboardState>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LeaderboardState::default()),
        }
    }

    /// Inserts a user into all three structures.
    ///
    /// A repeated id overwrites the stored record; the name bucket only
    /// picks up the id if it is not already present.
    pub async fn add_user(&self, user: User) {
        let mut state = self.state.write().await;

        let key = RankKey {
            rating: user.rating,
            id: user.id,
        };

        let bucket = state
            .users_by_name
            .entry(user.username.to_lowercase())
            .or_default();
        if !bucket.contains(&user.id) {
            bucket.push(user.id);
        }

        state.ranked.insert(key);
        state.users.insert(user.id, user);
    }

    /// Re-rates a user, clamping to [`MIN_RATING`, `MAX_RATING`].
    ///
    /// Unknown ids are a silent no-op. Remove, mutate and reinsert happen
    /// under one write-lock acquisition.
    pub async fn update_rating(&self, id: u32, new_rating: i32) {
        let mut state = self.state.write().await;

        let old_rating = match state.users.get(&id) {
            Some(user) => user.rating,
            None => return,
        };

        // Remove under the old key before the rating changes.
        state.ranked.remove(&RankKey {
            rating: old_rating,
            id,
        });

        let rating = new_rating.clamp(MIN_RATING, MAX_RATING);
        if let Some(user) = state.users.get_mut(&id) {
            user.rating = rating;
        }

        state.ranked.insert(RankKey { rating, id });
    }

    /// One leaderboard page with windowed dense ranks.
    ///
    /// The rank walker is re-based at the page offset, so the first entry
    /// of a page gets rank offset+1 even when it ties with the last entry
    /// of the previous page.
    pub async fn page(&self, page: usize, page_size: usize) -> LeaderboardResponse {
        let state = self.state.read().await;

        let total_users = state.ranked.len();
        let start = page.saturating_sub(1) * page_size;

        if start >= total_users {
            return LeaderboardResponse {
                users: Vec::new(),
                total_users,
                page,
                page_size,
            };
        }

        let mut walker = RankWalker::starting_at(start);
        let mut users = Vec::with_capacity(page_size.min(total_users - start));
        for key in state.ranked.iter().skip(start).take(page_size) {
            let rank = walker.assign(key.rating);
            if let Some(user) = state.users.get(&key.id) {
                users.push(RankedUser {
                    global_rank: rank,
                    id: user.id,
                    username: user.username.clone(),
                    rating: user.rating,
                });
            }
        }

        LeaderboardResponse {
            users,
            total_users,
            page,
            page_size,
        }
    }

    /// Case-insensitive substring search over usernames.
    ///
    /// Matches are sorted by (rating desc, id asc). Ranks come from one
    /// pass over the entire ranked set, so tied matches agree with the
    /// leaderboard view everywhere.
    pub async fn search(&self, term: &str) -> SearchResponse {
        let state = self.state.read().await;

        let needle = term.to_lowercase();
        let mut matched: Vec<&User> = state
            .users
            .values()
            .filter(|user| user.username.to_lowercase().contains(&needle))
            .collect();
        matched.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.id.cmp(&b.id)));

        let mut walker = RankWalker::starting_at(0);
        let mut rank_by_id: HashMap<u32, usize> = HashMap::with_capacity(state.ranked.len());
        for key in state.ranked.iter() {
            rank_by_id.insert(key.id, walker.assign(key.rating));
        }

        let users: Vec<RankedUser> = matched
            .into_iter()
            .map(|user| RankedUser {
                global_rank: rank_by_id.get(&user.id).copied().unwrap_or(0),
                id: user.id,
                username: user.username.clone(),
                rating: user.rating,
            })
            .collect();

        SearchResponse {
            count: users.len(),
            users,
        }
    }

    /// Every user, unordered. Used by health reporting and the driver.
    pub async fn all_users(&self) -> Vec<User> {
        let state = self.state.read().await;
        state.users.values().cloned().collect()
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}
