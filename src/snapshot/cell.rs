use std::sync::Arc;
use arc_swap::ArcSwap;
use crate::snapshot::snapshot::LeaderboardSnapshot;

/// The single publication point for snapshots.
///
/// Readers take one atomic load per query and then walk immutable memory;
/// the writer replaces the whole snapshot with one atomic store. A replaced
/// snapshot stays alive until its last reader drops the `Arc`.
pub struct SnapshotCell {
    current: ArcSwap<LeaderboardSnapshot>,
}

impl SnapshotCell {
    pub fn new(initial: LeaderboardSnapshot) -> Self {
        SnapshotCell {
            current: ArcSwap::from_pointee(initial),
        }
    }

    pub fn load(&self) -> Arc<LeaderboardSnapshot> {
        self.current.load_full()
    }

    pub fn store(&self, snapshot: LeaderboardSnapshot) {
        self.current.store(Arc::new(snapshot));
    }
}
