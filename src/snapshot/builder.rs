use std::collections::HashMap;
use chrono::Utc;
use crate::core::types::{Rating, UserId};
use crate::snapshot::snapshot::{LeaderboardSnapshot, UserSummary};

/// Accumulates a (user, rating) working set and turns it into an immutable
/// `LeaderboardSnapshot`. Single-threaded and deterministic: the same input
/// set always produces identical indexed arrays.
pub struct SnapshotBuilder {
    user_ratings: HashMap<UserId, Rating>,
    usernames: HashMap<UserId, String>,
    rating_min: Rating,
    rating_max: Rating,
}

impl SnapshotBuilder {
    pub fn new(rating_min: Rating, rating_max: Rating) -> Self {
        SnapshotBuilder {
            user_ratings: HashMap::new(),
            usernames: HashMap::new(),
            rating_min,
            rating_max,
        }
    }

    pub fn with_capacity(rating_min: Rating, rating_max: Rating, capacity: usize) -> Self {
        SnapshotBuilder {
            user_ratings: HashMap::with_capacity(capacity),
            usernames: HashMap::with_capacity(capacity),
            rating_min,
            rating_max,
        }
    }

    /// Register a user for the next snapshot. Ratings outside the configured
    /// range are clamped. Adding the same id twice keeps the last rating.
    pub fn add_user(&mut self, user_id: UserId, username: String, rating: Rating) {
        let rating = rating.clamp(self.rating_min, self.rating_max);
        self.user_ratings.insert(user_id, rating);
        self.usernames.insert(user_id, username);
    }

    pub fn len(&self) -> usize {
        self.user_ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.user_ratings.is_empty()
    }

    pub fn build(mut self) -> LeaderboardSnapshot {
        let levels = self.rating_max as usize + 1;

        // Count users per rating level
        let mut rating_count = vec![0u32; levels];
        for rating in self.user_ratings.values() {
            rating_count[*rating as usize] += 1;
        }

        // One high-to-low sweep encodes dense ranking:
        // prefix_higher[r] = distinct non-empty levels strictly above r
        let mut prefix_higher = vec![0u32; levels];
        let mut distinct = 0u32;
        for r in (0..levels).rev() {
            prefix_higher[r] = distinct;
            if rating_count[r] > 0 {
                distinct += 1;
            }
        }

        // Group users into per-rating buckets
        let mut users_by_rating: Vec<Vec<UserSummary>> = vec![Vec::new(); levels];
        for (user_id, rating) in &self.user_ratings {
            let username = self.usernames.remove(user_id).unwrap_or_default();
            users_by_rating[*rating as usize].push(UserSummary {
                id: *user_id,
                username,
                rating: *rating,
            });
        }

        // Deterministic tie-break within a rating level
        for bucket in &mut users_by_rating {
            if bucket.len() > 1 {
                bucket.sort_by_key(|summary| summary.id);
            }
        }

        LeaderboardSnapshot {
            user_ratings: self.user_ratings,
            rating_count,
            prefix_higher,
            users_by_rating,
            generated_at: Utc::now(),
        }
    }
}
