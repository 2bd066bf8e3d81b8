//! Ranked Leaderboard Module
//!
//! Maintains the in-memory collection of rated users and answers ranked
//! queries against it.
//!
//! ## Core Concepts
//! - **Entity Store**: owns every `User` record, keyed by id.
//! - **Name Index**: maps lowercased usernames to the ids sharing them;
//!   maintained on insert (currently not consulted by the search path).
//! - **Ranked Set**: a balanced ordered set keyed by (rating descending,
//!   id ascending) giving O(log n) insert/remove and in-order traversal.
//! - **Locking**: one write-preferring reader-writer lock guards all three
//!   structures as a single unit. Reads run concurrently with each other;
//!   writes are exclusive.
//!
//! ## Submodules
//! - **`index`**: The `Leaderboard` itself — state, mutations, queries.
//! - **`rank`**: Dense RANK()-style rank assignment shared by pagination
//!   and search.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod index;
pub mod rank;
pub mod types;
