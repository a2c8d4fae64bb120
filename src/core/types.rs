use serde::{Serialize, Deserialize};

/// Rating value. Stored ratings are always clamped into the configured
/// `[rating_min, rating_max]` range; raw update values may fall outside it.
pub type Rating = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl UserId {
    pub fn new(id: u32) -> Self {
        UserId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        UserId(id)
    }
}

/// Registered user. The username is fixed at registration; rating is the
/// only mutable attribute and lives in the writer's working set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

impl User {
    pub fn new(id: UserId, username: String) -> Self {
        User { id, username }
    }
}

/// Rating change submitted to the writer's intake channel.
#[derive(Debug, Clone, Copy)]
pub struct RatingUpdate {
    pub user_id: UserId,
    pub new_rating: Rating,
}

/// One row of a leaderboard or search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub rating: Rating,
}
