use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use crossbeam::channel::{tick, Receiver};
use crossbeam::select;
use tracing::debug;
use crate::core::stats::WriterStats;
use crate::core::types::{Rating, RatingUpdate, User, UserId};
use crate::snapshot::builder::SnapshotBuilder;
use crate::snapshot::cell::SnapshotCell;

/// Counters shared between the writer thread and the producer side.
pub struct WriterMetrics {
    pub updates_applied: AtomicU64,
    pub updates_dropped: AtomicU64,
    pub snapshots_published: AtomicU64,
}

impl WriterMetrics {
    pub fn new() -> Self {
        WriterMetrics {
            updates_applied: AtomicU64::new(0),
            updates_dropped: AtomicU64::new(0),
            snapshots_published: AtomicU64::new(0),
        }
    }

    pub fn sample(&self) -> WriterStats {
        WriterStats {
            updates_applied: self.updates_applied.load(Ordering::Relaxed),
            updates_dropped: self.updates_dropped.load(Ordering::Relaxed),
            snapshots_published: self.snapshots_published.load(Ordering::Relaxed),
        }
    }
}

impl Default for WriterMetrics {
    fn default() -> Self {
        WriterMetrics::new()
    }
}

/// The single writer.
///
/// Owns the mutable working set exclusively; all fan-in goes through the
/// bounded intake channel. On every tick of the rebuild clock it turns
/// accumulated changes into a fresh snapshot and publishes it with one
/// atomic store. A burst drained from the intake queue triggers an
/// immediate rebuild instead of waiting for the next tick.
pub struct SnapshotWriter {
    working: HashMap<UserId, Rating>,   // user id -> current rating
    users: Arc<HashMap<UserId, User>>,  // stable id -> username registry
    cell: Arc<SnapshotCell>,
    intake: Receiver<RatingUpdate>,
    metrics: Arc<WriterMetrics>,
    rating_min: Rating,
    rating_max: Rating,
    interval: Duration,
}

impl SnapshotWriter {
    pub fn new(
        working: HashMap<UserId, Rating>,
        users: Arc<HashMap<UserId, User>>,
        cell: Arc<SnapshotCell>,
        intake: Receiver<RatingUpdate>,
        metrics: Arc<WriterMetrics>,
        rating_min: Rating,
        rating_max: Rating,
        interval: Duration,
    ) -> Self {
        SnapshotWriter {
            working,
            users,
            cell,
            intake,
            metrics,
            rating_min,
            rating_max,
            interval,
        }
    }

    /// Spawn the writer loop on a dedicated thread. The loop exits once
    /// every producer handle is gone, publishing any final pending changes.
    pub fn spawn(self) -> JoinHandle<()> {
        thread::spawn(move || self.run())
    }

    fn run(mut self) {
        let ticker = tick(self.interval);
        let intake = self.intake.clone();
        let mut pending = false;

        loop {
            select! {
                recv(intake) -> msg => match msg {
                    Ok(update) => {
                        self.apply(update);
                        pending = true;
                    }
                    Err(_) => {
                        // All senders dropped: flush and exit
                        if pending {
                            self.rebuild_and_publish();
                        }
                        debug!("intake channel closed, snapshot writer exiting");
                        return;
                    }
                },
                recv(ticker) -> _ => {
                    if pending {
                        self.rebuild_and_publish();
                        pending = false;
                    }
                }
            }

            // Opportunistic drain: a burst that queued behind the event we
            // just handled becomes one rebuild instead of one per tick
            let mut drained = false;
            while let Ok(update) = intake.try_recv() {
                self.apply(update);
                pending = true;
                drained = true;
            }
            if drained {
                self.rebuild_and_publish();
                pending = false;
            }
        }
    }

    /// Fold one update into the working set. Last writer wins between
    /// rebuilds; updates for unregistered ids are ignored.
    fn apply(&mut self, update: RatingUpdate) {
        if !self.users.contains_key(&update.user_id) {
            return;
        }
        let rating = update.new_rating.clamp(self.rating_min, self.rating_max);
        self.working.insert(update.user_id, rating);
        self.metrics.updates_applied.fetch_add(1, Ordering::Relaxed);
    }

    fn rebuild_and_publish(&mut self) {
        let start = Instant::now();

        let mut builder =
            SnapshotBuilder::with_capacity(self.rating_min, self.rating_max, self.working.len());
        for (user_id, rating) in &self.working {
            if let Some(user) = self.users.get(user_id) {
                builder.add_user(*user_id, user.username.clone(), *rating);
            }
        }

        // Readers see either the old snapshot or the new one, never a blend
        self.cell.store(builder.build());
        self.metrics.snapshots_published.fetch_add(1, Ordering::Relaxed);

        debug!(
            users = self.working.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "published snapshot"
        );
    }
}
