use std::env;
use std::time::Duration;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::Rating;

#[derive(Debug, Clone)]
pub struct Config {
    pub initial_users: usize,            // Population seeded at startup
    pub rating_min: Rating,              // Inclusive lower rating bound
    pub rating_max: Rating,              // Inclusive upper rating bound
    pub snapshot_interval: Duration,     // Rebuild cadence (staleness bound)
    pub update_buffer: usize,            // Intake channel capacity
    pub min_gram: usize,                 // Shortest indexed n-gram
    pub max_gram: usize,                 // Longest indexed n-gram
    pub simulate_updates: bool,          // Spawn the random update simulator
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_users: 10_000,
            rating_min: 100,
            rating_max: 5000,
            snapshot_interval: Duration::from_millis(100),
            update_buffer: 10_000,
            min_gram: 2,
            max_gram: 5,
            simulate_updates: false,
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Some(n) = env_parse::<usize>("INITIAL_USERS") {
            config.initial_users = n;
        }
        if let Some(r) = env_parse::<Rating>("RATING_MIN") {
            config.rating_min = r;
        }
        if let Some(r) = env_parse::<Rating>("RATING_MAX") {
            config.rating_max = r;
        }
        if let Some(ms) = env_parse::<u64>("SNAPSHOT_INTERVAL_MS") {
            config.snapshot_interval = Duration::from_millis(ms);
        }
        if let Some(n) = env_parse::<usize>("UPDATE_BUFFER") {
            config.update_buffer = n;
        }
        if let Some(n) = env_parse::<usize>("MIN_GRAM") {
            config.min_gram = n;
        }
        if let Some(n) = env_parse::<usize>("MAX_GRAM") {
            config.max_gram = n;
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.rating_min < 0 || self.rating_min > self.rating_max {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("invalid rating bounds [{}, {}]", self.rating_min, self.rating_max),
            ));
        }
        if self.update_buffer == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "update_buffer must be at least 1".to_string(),
            ));
        }
        if self.min_gram == 0 || self.min_gram > self.max_gram {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("invalid gram bounds [{}, {}]", self.min_gram, self.max_gram),
            ));
        }
        Ok(())
    }

    /// Clamp a raw rating into the configured range.
    pub fn clamp_rating(&self, rating: Rating) -> Rating {
        rating.clamp(self.rating_min, self.rating_max)
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
