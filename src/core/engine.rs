use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use crossbeam::channel::{bounded, Sender, TrySendError};
use tracing::info;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::{EngineStats, WriterStats};
use crate::core::types::{LeaderboardEntry, Rating, RatingUpdate, User, UserId};
use crate::generator::random::UserGenerator;
use crate::generator::simulator::spawn_update_simulator;
use crate::index::search_index::SearchIndex;
use crate::snapshot::builder::SnapshotBuilder;
use crate::snapshot::cell::SnapshotCell;
use crate::snapshot::snapshot::LeaderboardSnapshot;
use crate::writer::snapshot_writer::{SnapshotWriter, WriterMetrics};

/// The leaderboard engine.
///
/// Readers call the query methods concurrently; each one binds to the
/// current snapshot with a single atomic load, so every answer is
/// internally consistent even while the writer publishes a replacement
/// mid-call. Rating changes flow through `submit_update` into the writer
/// thread, which owns the only mutable state.
pub struct LeaderboardEngine {
    config: Config,

    users: Arc<HashMap<UserId, User>>,

    search_index: Arc<SearchIndex>,

    cell: Arc<SnapshotCell>,

    intake: Sender<RatingUpdate>,
    metrics: Arc<WriterMetrics>,
    stop: Arc<AtomicBool>,
}

impl LeaderboardEngine {
    /// Start an engine pre-populated with `config.initial_users` randomly
    /// generated users.
    pub fn new(config: Config) -> Result<Self> {
        let mut generator = UserGenerator::new();
        let seed = generator.population(config.initial_users, config.rating_min, config.rating_max);
        Self::with_users(config, seed)
    }

    /// Start an engine with an explicit population. The first snapshot and
    /// the search index are built before this returns, so queries are valid
    /// immediately; the writer thread takes over from there.
    pub fn with_users(config: Config, seed: Vec<(User, Rating)>) -> Result<Self> {
        config.validate()?;

        let start = Instant::now();

        let mut users = HashMap::with_capacity(seed.len());
        let mut working = HashMap::with_capacity(seed.len());
        let mut builder =
            SnapshotBuilder::with_capacity(config.rating_min, config.rating_max, seed.len());

        for (user, rating) in seed {
            builder.add_user(user.id, user.username.clone(), rating);
            working.insert(user.id, config.clamp_rating(rating));
            users.insert(user.id, user);
        }

        let users = Arc::new(users);
        let search_index = Arc::new(SearchIndex::build(
            users.values(),
            config.min_gram,
            config.max_gram,
        ));
        let cell = Arc::new(SnapshotCell::new(builder.build()));

        let (intake, receiver) = bounded(config.update_buffer);
        let metrics = Arc::new(WriterMetrics::new());
        let stop = Arc::new(AtomicBool::new(false));

        SnapshotWriter::new(
            working,
            users.clone(),
            cell.clone(),
            receiver,
            metrics.clone(),
            config.rating_min,
            config.rating_max,
            config.snapshot_interval,
        )
        .spawn();

        if config.simulate_updates && !users.is_empty() {
            spawn_update_simulator(
                intake.clone(),
                metrics.clone(),
                users.len() as u32,
                config.rating_min,
                config.rating_max,
                stop.clone(),
            );
        }

        info!(
            users = users.len(),
            grams = search_index.gram_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "leaderboard engine initialized"
        );

        Ok(LeaderboardEngine {
            config,
            users,
            search_index,
            cell,
            intake,
            metrics,
            stop,
        })
    }

    /// The one atomic load readers build on. Everything reachable from the
    /// returned reference is immutable.
    pub fn snapshot(&self) -> Arc<LeaderboardSnapshot> {
        self.cell.load()
    }

    /// Offer a rating change to the writer. Non-blocking: returns `false`
    /// (and counts the drop) when the intake channel is full.
    pub fn submit_update(&self, user_id: UserId, new_rating: Rating) -> bool {
        let update = RatingUpdate { user_id, new_rating };
        match self.intake.try_send(update) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => {
                self.metrics.updates_dropped.fetch_add(1, Ordering::Relaxed);
                false
            }
        }
    }

    /// Top entries in rank order. Non-positive limits fall back to 100.
    /// Ties share a dense rank and are ordered by ascending user id.
    pub fn get_leaderboard(&self, limit: i64) -> Vec<LeaderboardEntry> {
        let limit = if limit <= 0 { 100 } else { limit as usize };

        let snap = self.snapshot();
        let mut result = Vec::with_capacity(limit.min(snap.total_users()));

        for rating in (self.config.rating_min..=self.config.rating_max).rev() {
            let bucket = snap.users_at(rating);
            if bucket.is_empty() {
                continue;
            }

            let rank = snap.rank(rating);

            for summary in bucket {
                result.push(LeaderboardEntry {
                    rank,
                    username: summary.username.clone(),
                    rating: summary.rating,
                });

                if result.len() >= limit {
                    return result;
                }
            }
        }

        result
    }

    /// Dense rank a rating would hold right now. O(1); out-of-range
    /// ratings clamp instead of failing.
    pub fn rank(&self, rating: Rating) -> u32 {
        self.snapshot().rank(rating)
    }

    /// Case-insensitive substring search over usernames, each hit annotated
    /// with its rating and rank under one consistent snapshot. Result order
    /// is unspecified.
    pub fn search(&self, query: &str) -> Vec<LeaderboardEntry> {
        if query.is_empty() {
            return Vec::new();
        }

        let query = query.to_lowercase();
        let snap = self.snapshot();

        let grams = self.search_index.query_grams(&query);
        if grams.is_empty() {
            // Query too short to gram: scan the whole population
            return self.linear_scan(&query, &snap);
        }

        let candidates = self.search_index.candidates(&grams);
        let mut results = Vec::with_capacity(candidates.len());

        for user_id in candidates {
            let user = match self.users.get(&user_id) {
                Some(user) => user,
                None => continue,
            };

            // Grams can co-occur without the contiguous substring; keep
            // only literal matches
            if !user.username.to_lowercase().contains(&query) {
                continue;
            }

            if let Some(entry) = Self::annotate(user, &snap) {
                results.push(entry);
            }
        }

        results
    }

    pub fn stats(&self) -> EngineStats {
        let snap = self.snapshot();
        EngineStats {
            total_users: snap.total_users(),
            snapshot_age_ms: snap.age_ms(),
            min_rating: self.config.rating_min,
            max_rating: self.config.rating_max,
        }
    }

    pub fn writer_stats(&self) -> WriterStats {
        self.metrics.sample()
    }

    pub fn total_users(&self) -> usize {
        self.users.len()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn linear_scan(&self, query: &str, snap: &LeaderboardSnapshot) -> Vec<LeaderboardEntry> {
        let mut results = Vec::new();

        for user in self.users.values() {
            if user.username.to_lowercase().contains(query) {
                if let Some(entry) = Self::annotate(user, snap) {
                    results.push(entry);
                }
            }
        }

        results
    }

    fn annotate(user: &User, snap: &LeaderboardSnapshot) -> Option<LeaderboardEntry> {
        let rating = snap.user_rating(user.id)?;
        Some(LeaderboardEntry {
            rank: snap.rank(rating),
            username: user.username.clone(),
            rating,
        })
    }
}

impl Drop for LeaderboardEngine {
    fn drop(&mut self) {
        // Stops the simulator (if any); the writer exits on its own once
        // the last intake sender is gone
        self.stop.store(true, Ordering::Relaxed);
    }
}
