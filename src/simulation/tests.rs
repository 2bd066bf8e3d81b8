//! Simulation Module Tests
//!
//! Validates population seeding and the rating perturbation driver.
//!
//! ## Test Scopes
//! - **Seed**: Population size, id assignment, and rating bounds.
//! - **Driver**: Batch sizing, population caps, and post-batch invariants.

#[cfg(test)]
mod tests {
    use crate::leaderboard::index::{Leaderboard, MAX_RATING, MIN_RATING};
    use crate::leaderboard::types::User;
    use crate::simulation::driver::simulate_score_updates;
    use crate::simulation::seed::seed_leaderboard;

    async fn board_of_size(count: u32) -> Leaderboard {
        let board = Leaderboard::new();
        for id in 1..=count {
            board
                .add_user(User {
                    id,
                    username: format!("player_{}", id),
                    rating: 1500,
                })
                .await;
        }
        board
    }

    // ============================================================
    // SEED TESTS
    // ============================================================

    #[tokio::test]
    async fn test_seed_generates_requested_population() {
        let board = Leaderboard::new();
        seed_leaderboard(&board, 500).await;

        let users = board.all_users().await;
        assert_eq!(users.len(), 500);

        let mut ids: Vec<u32> = users.iter().map(|u| u.id).collect();
        ids.sort_unstable();
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&500));
        ids.dedup();
        assert_eq!(ids.len(), 500, "ids should be unique");
    }

    #[tokio::test]
    async fn test_seeded_ratings_are_within_bounds() {
        let board = Leaderboard::new();
        seed_leaderboard(&board, 300).await;

        for user in board.all_users().await {
            assert!(
                user.rating >= MIN_RATING && user.rating <= MAX_RATING,
                "rating {} out of bounds for {}",
                user.rating,
                user.username
            );
        }
    }

    #[tokio::test]
    async fn test_seeded_usernames_are_nonempty() {
        let board = Leaderboard::new();
        seed_leaderboard(&board, 100).await;

        for user in board.all_users().await {
            assert!(!user.username.is_empty());
        }
    }

    // ============================================================
    // DRIVER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_simulate_on_empty_board_updates_nobody() {
        let board = Leaderboard::new();
        assert_eq!(simulate_score_updates(&board).await, 0);
    }

    #[tokio::test]
    async fn test_simulate_batch_is_capped_at_population() {
        let board = board_of_size(5).await;

        // Minimum batch is 10, so a 5-user board always caps at 5.
        assert_eq!(simulate_score_updates(&board).await, 5);
        assert_eq!(board.all_users().await.len(), 5);
    }

    #[tokio::test]
    async fn test_simulate_batch_stays_within_bounds() {
        let board = board_of_size(200).await;

        let updated = simulate_score_updates(&board).await;
        assert!(
            (10..=50).contains(&updated),
            "batch size {} outside [10, 50]",
            updated
        );
    }

    #[tokio::test]
    async fn test_simulate_keeps_ratings_in_bounds() {
        let board = board_of_size(40).await;

        // Push everyone to the ceiling, then perturb repeatedly: deltas may
        // go positive but the update path clamps.
        for id in 1..=40 {
            board.update_rating(id, MAX_RATING).await;
        }
        for _ in 0..5 {
            simulate_score_updates(&board).await;
        }

        let page = board.page(1, 100).await;
        assert_eq!(page.total_users, 40);
        for user in board.all_users().await {
            assert!(user.rating >= MIN_RATING && user.rating <= MAX_RATING);
        }
    }
}
