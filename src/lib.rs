//! Ranked Leaderboard Service Library
//!
//! This library crate defines the core modules of the leaderboard server.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of two subsystems:
//!
//! - **`leaderboard`**: The ranked index. Keeps every user ordered by
//!   (rating descending, id ascending), assigns dense ranks with tie gaps,
//!   and answers paginated leaderboard and search-with-rank queries while
//!   accepting concurrent rating updates behind one reader-writer lock.
//! - **`simulation`**: The synthetic load layer. Seeds the board with a
//!   generated population at startup and perturbs a random subset of
//!   ratings on a fixed interval (and on demand via HTTP).

pub mod leaderboard;
pub mod simulation;
