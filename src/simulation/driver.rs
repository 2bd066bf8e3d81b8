use crate::leaderboard::index::Leaderboard;
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const UPDATE_INTERVAL: Duration = Duration::from_secs(30);

const BATCH_MIN: usize = 10;
const BATCH_MAX: usize = 50;
const DELTA_MIN: i32 = -50;
const DELTA_MAX: i32 = 50;

/// Applies one perturbation batch and returns how many users were touched.
///
/// Picks a random subset of 10 to 50 users (capped at the population size)
/// and shifts each rating by a delta in [-50, 50] through the index's
/// update path, which also clamps.
pub async fn simulate_score_updates(leaderboard: &Leaderboard) -> usize {
    let users = leaderboard.all_users().await;
    if users.is_empty() {
        return 0;
    }

    let updates: Vec<(u32, i32)> = {
        let mut rng = rand::thread_rng();
        let batch = rng.gen_range(BATCH_MIN..=BATCH_MAX).min(users.len());
        let chosen: Vec<_> = users.choose_multiple(&mut rng, batch).cloned().collect();
        chosen
            .into_iter()
            .map(|user| (user.id, user.rating + rng.gen_range(DELTA_MIN..=DELTA_MAX)))
            .collect()
    };

    let updated = updates.len();
    for (id, rating) in updates {
        leaderboard.update_rating(id, rating).await;
    }

    updated
}

/// Spawns the periodic perturbation task.
pub fn spawn_periodic_updates(leaderboard: Arc<Leaderboard>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(UPDATE_INTERVAL);
        // The first tick completes immediately; consume it so the first
        // batch lands one full interval after startup.
        interval.tick().await;

        loop {
            interval.tick().await;
            let updated = simulate_score_updates(&leaderboard).await;
            tracing::info!("Auto-updated {} user ratings", updated);
        }
    })
}
