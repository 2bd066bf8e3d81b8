use crate::leaderboard::index::{Leaderboard, MAX_RATING, MIN_RATING};
use crate::leaderboard::types::User;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "rahul", "priya", "amit", "neha", "vikram", "anjali", "rohan", "kavya", "arjun", "sneha",
    "aditya", "pooja", "karan", "divya", "rajesh", "simran", "sanjay", "meera", "varun", "isha",
    "nikhil", "tanvi", "manish", "riya", "akash", "nisha", "deepak", "swati", "gaurav", "preeti",
    "vishal", "aarti", "mohit", "shreya", "ankit", "sonal", "rahul_mathur", "rahul_burman",
    "rahul_kumar",
];

const LAST_NAMES: &[&str] = &[
    "", "_sharma", "_patel", "_kumar", "_singh", "_gupta", "_verma", "_iyer", "_reddy", "_nair",
    "_chopra", "_mehta", "_joshi", "_rao", "_das", "_pandey", "_mishra", "_deshpande", "_kulkarni",
    "_bhat", "_menon", "_pillai", "_mathur", "_burman", "_agarwal", "_malhotra", "_kapur", "_bose",
];

const SUFFIXES: &[&str] = &[
    "", "123", "007", "99", "2k", "pro", "king", "ace", "star", "legend", "master", "gamer",
    "alpha", "beta", "prime", "ultra", "mega", "super", "21", "22", "23", "24", "25", "x", "v2",
    "v3", "01", "02", "03",
];

const RATING_MEAN: f64 = 2500.0;
const RATING_SPREAD: f64 = 800.0;

/// Fills the board with `count` synthetic users, ids 1..=count.
pub async fn seed_leaderboard(leaderboard: &Leaderboard, count: u32) {
    tracing::info!("Generating {} users...", count);

    let generated: Vec<User> = {
        let mut rng = rand::thread_rng();
        (1..=count).map(|id| synthetic_user(&mut rng, id)).collect()
    };

    for user in generated {
        let id = user.id;
        leaderboard.add_user(user).await;
        if id % 1000 == 0 {
            tracing::info!("Generated {} users...", id);
        }
    }

    tracing::info!("Successfully generated {} users", count);
}

fn synthetic_user(rng: &mut impl Rng, id: u32) -> User {
    let mut username = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())].to_string();
    if rng.gen_bool(0.4) {
        username.push_str(LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]);
    }
    if rng.gen_bool(0.3) {
        username.push_str(SUFFIXES[rng.gen_range(0..SUFFIXES.len())]);
    }

    User {
        id,
        username,
        rating: realistic_rating(rng),
    }
}

/// Two opposed uniform draws give a rough bell around the mean.
fn realistic_rating(rng: &mut impl Rng) -> i32 {
    let u1: f64 = rng.gen_range(0.0..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);
    let spread = RATING_SPREAD * 2.0 * (u2 - u1);

    ((RATING_MEAN + spread) as i32).clamp(MIN_RATING, MAX_RATING)
}
