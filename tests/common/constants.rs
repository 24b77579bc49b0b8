//! Values shared by the fixtures and the assertions

#![allow(dead_code)]

pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

/// Genres present in the fixture tables after cleaning, sorted.
pub const FIXTURE_GENRES: [&str; 7] = [
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Drama",
    "Family",
];

pub const TOY_STORY_ID: i64 = 862;
pub const HEAT_ID: i64 = 949;
pub const TOP_KEYWORD: &str = "toy";
pub const TOP_KEYWORD_COUNT: u64 = 6;
pub const TOM_HANKS: &str = "Tom Hanks";
pub const MICHAEL_MANN: &str = "Michael Mann";
