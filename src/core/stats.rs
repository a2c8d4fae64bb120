use serde::{Serialize, Deserialize};
use crate::core::types::Rating;

/// Engine statistics for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStats {
    pub total_users: usize,
    pub snapshot_age_ms: i64,
    pub min_rating: Rating,
    pub max_rating: Rating,
}

/// Writer-side counters, sampled from the live atomics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WriterStats {
    pub updates_applied: u64,
    pub updates_dropped: u64,
    pub snapshots_published: u64,
}
