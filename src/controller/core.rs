use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::data_fetcher::api::SportsDataSource;
use crate::data_fetcher::cache::{CacheStats, TeamCache};
use crate::data_fetcher::models::{League, Team};
use crate::data_fetcher::processors::{QueryState, SortDirection, SortKey, visible_teams};
use crate::error::AppError;

use super::state::{FetchState, FetchStatus};

/// Result of one spawned team fetch, tagged with the token it ran under.
#[derive(Debug)]
pub struct FetchCompletion {
    league_id: String,
    token: CancellationToken,
    result: Result<Vec<Team>, AppError>,
}

/// What the controller did with a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The completion belonged to the active fetch and updated state
    Applied,
    /// The fetch had been superseded; dropped without touching state
    Stale,
}

#[derive(Debug)]
struct ActiveFetch {
    league_id: String,
    token: CancellationToken,
}

/// Owns the league catalog, the current team collection and the request lifecycle.
pub struct TeamsController {
    source: Arc<dyn SportsDataSource>,
    leagues: Vec<League>,
    leagues_loaded: bool,
    selection: Option<String>,
    teams: Vec<Team>,
    state: FetchState,
    query: QueryState,
    cache: TeamCache,
    active: Option<ActiveFetch>,
    completions_tx: mpsc::UnboundedSender<FetchCompletion>,
    completions_rx: mpsc::UnboundedReceiver<FetchCompletion>,
}

impl TeamsController {
    pub fn new(source: Arc<dyn SportsDataSource>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            source,
            leagues: Vec::new(),
            leagues_loaded: false,
            selection: None,
            teams: Vec::new(),
            state: FetchState::idle(),
            query: QueryState::default(),
            cache: TeamCache::new(),
            active: None,
            completions_tx,
            completions_rx,
        }
    }

    /// Loads the league catalog once. Failures are logged and leave the
    /// catalog empty; a later call tries again.
    #[instrument(skip(self))]
    pub async fn load_leagues(&mut self) {
        if self.leagues_loaded {
            debug!("League catalog already loaded ({} leagues)", self.leagues.len());
            return;
        }

        match self.source.list_leagues().await {
            Ok(leagues) => {
                info!("Loaded {} leagues", leagues.len());
                self.leagues = leagues;
                self.leagues_loaded = true;
            }
            Err(e) => {
                error!("Failed to load league catalog: {e}");
            }
        }
    }

    /// Changes the league selection. A blank id clears it.
    ///
    /// Selecting the league that is already selected does nothing; use
    /// [`TeamsController::refetch`] to reload it.
    #[instrument(skip(self))]
    pub fn select_league(&mut self, league_id: &str) {
        let league_id = league_id.trim();
        if league_id.is_empty() {
            self.clear_selection();
            return;
        }

        if self.selection.as_deref() == Some(league_id) {
            debug!("League {league_id} already selected");
            return;
        }

        self.cancel_in_flight();
        self.selection = Some(league_id.to_string());

        if let Some(teams) = self.cache.get(league_id) {
            info!(
                "Serving {} cached teams for league {}",
                teams.len(),
                league_id
            );
            self.teams = teams;
            self.state = FetchState::success(true);
            return;
        }

        // Teams of the previous league never stay visible under a new selection
        self.teams.clear();
        self.start_fetch(league_id.to_string());
    }

    /// Resets to idle and cancels any in-flight fetch
    pub fn clear_selection(&mut self) {
        self.cancel_in_flight();
        if self.selection.take().is_some() {
            info!("League selection cleared");
        }
        self.teams.clear();
        self.state = FetchState::idle();
    }

    /// Fetches the selected league again, bypassing the cache.
    ///
    /// Any in-flight fetch is cancelled first. The current collection stays
    /// published while the new request is loading.
    #[instrument(skip(self))]
    pub fn refetch(&mut self) {
        let Some(league_id) = self.selection.clone() else {
            debug!("Refetch requested without a selected league");
            return;
        };

        self.cancel_in_flight();
        self.start_fetch(league_id);
    }

    /// Waits for the next fetch completion and applies it.
    ///
    /// Pending forever when nothing was spawned, so callers either know a
    /// fetch is outstanding or race this against other input.
    pub async fn next_event(&mut self) -> Option<EventDisposition> {
        let completion = self.completions_rx.recv().await?;
        Some(self.apply_completion(completion))
    }

    /// Applies completions until no fetch is in flight.
    pub async fn settle(&mut self) {
        while self.active.is_some() {
            if self.next_event().await.is_none() {
                break;
            }
        }
    }

    /// Applies a completion if its token was never cancelled.
    pub fn apply_completion(&mut self, completion: FetchCompletion) -> EventDisposition {
        let FetchCompletion {
            league_id,
            token,
            result,
        } = completion;

        if token.is_cancelled() {
            debug!("Discarding superseded fetch for league {league_id}");
            return EventDisposition::Stale;
        }

        self.active = None;

        match result {
            Ok(teams) => {
                info!("Fetched {} teams for league {}", teams.len(), league_id);
                self.cache.insert(league_id, teams.clone());
                self.teams = teams;
                self.state = FetchState::success(false);
                EventDisposition::Applied
            }
            Err(e) if e.is_cancelled() => {
                // The token was never fired, so the source gave up on its own
                warn!("Fetch for league {league_id} was cancelled by its source");
                self.teams.clear();
                self.state = FetchState::error(format!("Request was aborted: {e}"));
                EventDisposition::Applied
            }
            Err(e) => {
                warn!("Fetch for league {} failed: {}", league_id, e);
                self.teams.clear();
                self.state = FetchState::error(e.to_string());
                EventDisposition::Applied
            }
        }
    }

    fn start_fetch(&mut self, league_id: String) {
        let token = CancellationToken::new();
        self.active = Some(ActiveFetch {
            league_id: league_id.clone(),
            token: token.clone(),
        });
        self.state = FetchState::loading();

        info!("Fetching teams for league {league_id}");

        let source = Arc::clone(&self.source);
        let completions_tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = source.list_teams_by_league(&league_id, &token).await;
            // The receiver only goes away with the controller itself
            let _ = completions_tx.send(FetchCompletion {
                league_id,
                token,
                result,
            });
        });
    }

    fn cancel_in_flight(&mut self) {
        if let Some(active) = self.active.take() {
            debug!("Cancelling in-flight fetch for league {}", active.league_id);
            active.token.cancel();
        }
    }

    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }

    pub fn find_league(&self, league_id: &str) -> Option<&League> {
        self.leagues.iter().find(|league| league.id == league_id)
    }

    pub fn selected_league(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Raw team collection of the current selection, unfiltered and unsorted
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn status(&self) -> FetchStatus {
        self.state.status()
    }

    pub fn served_from_cache(&self) -> bool {
        self.state.served_from_cache()
    }

    /// Human-readable failure, empty unless the status is error
    pub fn error_message(&self) -> &str {
        self.state.error_message()
    }

    pub fn is_fetching(&self) -> bool {
        self.active.is_some()
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_sort(&mut self, sort_key: SortKey, direction: SortDirection) {
        self.query.sort_key = sort_key;
        self.query.direction = direction;
    }

    /// Current collection after search and sort
    pub fn visible_teams(&self) -> Vec<Team> {
        visible_teams(&self.teams, &self.query)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Drop for TeamsController {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
