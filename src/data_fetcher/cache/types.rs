//! Cache bookkeeping types

use std::time::Instant;

use crate::data_fetcher::models::Team;

/// Team collection stored for one league
#[derive(Debug, Clone)]
pub struct CachedTeams {
    pub teams: Vec<Team>,
    pub cached_at: Instant,
}

impl CachedTeams {
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            teams,
            cached_at: Instant::now(),
        }
    }
}

/// Snapshot of a team cache's size and hit rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from cache, 0.0 before any lookup
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}
