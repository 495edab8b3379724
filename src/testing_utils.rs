//! Fixtures and a scripted data source for exercising the fetch lifecycle

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::data_fetcher::api::SportsDataSource;
use crate::data_fetcher::models::{League, Team};
use crate::error::AppError;

/// Test utilities for creating mock data
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a team with only id and name
    pub fn create_team(id: &str, name: &str) -> Team {
        Team {
            id: id.to_string(),
            name: name.to_string(),
            badge_url: None,
            stadium: None,
            country: None,
            formed_year: None,
            stadium_thumb_url: None,
        }
    }

    /// Creates a team with stadium and founding year
    pub fn create_full_team(
        id: &str,
        name: &str,
        stadium: Option<&str>,
        formed_year: Option<&str>,
    ) -> Team {
        Team {
            stadium: stadium.map(str::to_string),
            formed_year: formed_year.map(str::to_string),
            country: Some("England".to_string()),
            ..Self::create_team(id, name)
        }
    }

    /// Creates a soccer league
    pub fn create_league(id: &str, name: &str) -> League {
        League {
            id: id.to_string(),
            name: name.to_string(),
            sport: "Soccer".to_string(),
            alternate_name: None,
        }
    }
}

type TeamsResult = Result<Vec<Team>, AppError>;

enum ScriptedResponse {
    Ready(TeamsResult),
    Gated(oneshot::Receiver<TeamsResult>),
}

/// In-memory [`SportsDataSource`] whose responses are queued per league.
///
/// Each team lookup pops the next queued response for its league. A gated
/// response stays pending until the test sends a value through the returned
/// sender, which lets tests choose the order in which fetches resolve.
pub struct ScriptedSource {
    leagues: Option<Vec<League>>,
    responses: Mutex<HashMap<String, VecDeque<ScriptedResponse>>>,
    team_calls: Mutex<Vec<String>>,
    league_calls: AtomicUsize,
    honor_cancellation: bool,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            leagues: Some(Vec::new()),
            responses: Mutex::new(HashMap::new()),
            team_calls: Mutex::new(Vec::new()),
            league_calls: AtomicUsize::new(0),
            honor_cancellation: true,
        }
    }

    pub fn with_leagues(mut self, leagues: Vec<League>) -> Self {
        self.leagues = Some(leagues);
        self
    }

    /// Makes the league catalog call fail with a server error
    pub fn failing_leagues(mut self) -> Self {
        self.leagues = None;
        self
    }

    /// Resolves gated responses even after their token fired, like a
    /// transport that completes before it notices the abort.
    pub fn ignoring_cancellation(mut self) -> Self {
        self.honor_cancellation = false;
        self
    }

    pub fn respond(&self, league_id: &str, teams: Vec<Team>) {
        self.push(league_id, ScriptedResponse::Ready(Ok(teams)));
    }

    pub fn respond_error(&self, league_id: &str, error: AppError) {
        self.push(league_id, ScriptedResponse::Ready(Err(error)));
    }

    /// Queues a response that resolves when the returned sender is used
    pub fn gate(&self, league_id: &str) -> oneshot::Sender<TeamsResult> {
        let (tx, rx) = oneshot::channel();
        self.push(league_id, ScriptedResponse::Gated(rx));
        tx
    }

    /// League ids of every team lookup, in call order
    pub fn team_calls(&self) -> Vec<String> {
        self.team_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn team_call_count(&self) -> usize {
        self.team_calls().len()
    }

    pub fn league_call_count(&self) -> usize {
        self.league_calls.load(Ordering::SeqCst)
    }

    fn push(&self, league_id: &str, response: ScriptedResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(league_id.to_string())
            .or_default()
            .push_back(response);
    }

    fn next_response(&self, league_id: &str) -> Option<ScriptedResponse> {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(league_id)
            .and_then(VecDeque::pop_front)
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SportsDataSource for ScriptedSource {
    async fn list_leagues(&self) -> Result<Vec<League>, AppError> {
        self.league_calls.fetch_add(1, Ordering::SeqCst);
        self.leagues.clone().ok_or_else(|| {
            AppError::api_server_error(500, "Internal Server Error", "scripted://leagues")
        })
    }

    async fn list_teams_by_league(
        &self,
        league_id: &str,
        token: &CancellationToken,
    ) -> Result<Vec<Team>, AppError> {
        self.team_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(league_id.to_string());

        let url = format!("scripted://teams/{league_id}");
        let response = self
            .next_response(league_id)
            .ok_or_else(|| AppError::api_not_found(url.clone()))?;

        match response {
            ScriptedResponse::Ready(result) => result,
            ScriptedResponse::Gated(rx) if self.honor_cancellation => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(AppError::cancelled(url)),
                    result = rx => result.unwrap_or_else(|_| Err(AppError::cancelled(url))),
                }
            }
            ScriptedResponse::Gated(rx) => {
                rx.await.unwrap_or_else(|_| Err(AppError::cancelled(url)))
            }
        }
    }
}
