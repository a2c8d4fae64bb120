use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use crate::core::types::{Rating, UserId};

/// User row materialised inside a snapshot bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub rating: Rating,
}

/// Immutable, fully indexed view of the leaderboard at one instant.
///
/// Published by the writer via an atomic pointer swap; readers share it by
/// reference and never observe a partially built snapshot. All rank math
/// reduces to one array read:
///
///   prefix_higher[r] = number of distinct non-empty rating levels above r
///   rank(r)          = prefix_higher[r] + 1
///
/// Tied ratings share one rank and the next distinct rating takes the
/// immediately following rank (dense ranking).
pub struct LeaderboardSnapshot {
    pub user_ratings: HashMap<UserId, Rating>,

    pub rating_count: Vec<u32>,   // rating -> user count, length rating_max + 1

    pub prefix_higher: Vec<u32>,  // rating -> distinct rating levels above

    pub users_by_rating: Vec<Vec<UserSummary>>,  // rating -> users, ascending id

    pub generated_at: DateTime<Utc>,
}

impl LeaderboardSnapshot {
    /// Dense rank of a rating. Out-of-range ratings are clamped, so this
    /// never fails; an empty leaderboard yields rank 1 for any query.
    pub fn rank(&self, rating: Rating) -> u32 {
        let r = rating.clamp(0, self.rating_max()) as usize;
        self.prefix_higher[r] + 1
    }

    pub fn user_rating(&self, user_id: UserId) -> Option<Rating> {
        self.user_ratings.get(&user_id).copied()
    }

    pub fn total_users(&self) -> usize {
        self.user_ratings.len()
    }

    /// Users at exactly `rating`, ordered by ascending id. Empty slice for
    /// out-of-range or unpopulated ratings.
    pub fn users_at(&self, rating: Rating) -> &[UserSummary] {
        if rating < 0 {
            return &[];
        }
        match self.users_by_rating.get(rating as usize) {
            Some(bucket) => bucket,
            None => &[],
        }
    }

    /// Upper bound of the indexed rating range.
    pub fn rating_max(&self) -> Rating {
        (self.prefix_higher.len() - 1) as Rating
    }

    pub fn age_ms(&self) -> i64 {
        (Utc::now() - self.generated_at).num_milliseconds()
    }
}
