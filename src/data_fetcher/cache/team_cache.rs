//! Per-controller cache of team collections keyed by league id

use lru::LruCache;
use tracing::{debug, info, instrument};

use crate::data_fetcher::models::Team;

use super::types::{CacheStats, CachedTeams};

/// League id -> team collection. Owned by one controller; entries are never
/// evicted for the lifetime of the owner.
#[derive(Debug)]
pub struct TeamCache {
    entries: LruCache<String, CachedTeams>,
    hits: u64,
    misses: u64,
}

impl TeamCache {
    pub fn new() -> Self {
        Self {
            entries: LruCache::unbounded(),
            hits: 0,
            misses: 0,
        }
    }

    /// Looks up a league, counting the hit or miss
    #[instrument(skip(self))]
    pub fn get(&mut self, league_id: &str) -> Option<Vec<Team>> {
        match self.entries.get(league_id) {
            Some(entry) => {
                self.hits += 1;
                debug!(
                    "Team cache hit: league={}, teams={}, age={:?}",
                    league_id,
                    entry.teams.len(),
                    entry.cached_at.elapsed()
                );
                Some(entry.teams.clone())
            }
            None => {
                self.misses += 1;
                debug!("Team cache miss: league={}", league_id);
                None
            }
        }
    }

    /// Stores (or replaces) the collection for a league
    pub fn insert(&mut self, league_id: impl Into<String>, teams: Vec<Team>) {
        let league_id = league_id.into();
        info!(
            "Team cache entry stored: league={}, teams={}",
            league_id,
            teams.len()
        );
        self.entries.put(league_id, CachedTeams::new(teams));
    }

    pub fn contains(&self, league_id: &str) -> bool {
        self.entries.contains(league_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

impl Default for TeamCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_insert_and_get() {
        let mut cache = TeamCache::new();
        assert!(cache.is_empty());

        cache.insert("4328", vec![TestDataBuilder::create_team("1", "Arsenal")]);

        let teams = cache.get("4328").unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Arsenal");
        assert!(cache.get("4335").is_none());
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 1,
                hits: 1,
                misses: 1
            }
        );
    }

    #[test]
    fn test_insert_replaces_entry() {
        let mut cache = TeamCache::new();
        cache.insert("4328", vec![TestDataBuilder::create_team("1", "Arsenal")]);
        cache.insert(
            "4328",
            vec![
                TestDataBuilder::create_team("1", "Arsenal"),
                TestDataBuilder::create_team("2", "Chelsea"),
            ],
        );

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("4328").unwrap().len(), 2);
    }

    #[test]
    fn test_entries_are_never_evicted() {
        let mut cache = TeamCache::new();
        for id in 0..500 {
            cache.insert(id.to_string(), Vec::new());
        }

        assert_eq!(cache.len(), 500);
        assert!(cache.contains("0"));
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = TeamCache::new();
        let second = TeamCache::new();
        first.insert("4328", Vec::new());

        assert!(first.contains("4328"));
        assert!(!second.contains("4328"));
    }
}
