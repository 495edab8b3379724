use async_trait::async_trait;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::data_fetcher::models::{AllLeaguesResponse, League, Team, TeamsByLeagueResponse};
use crate::error::AppError;

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_leagues_url, build_teams_url};

/// Read operations the fetch lifecycle needs from a sports data provider.
#[async_trait]
pub trait SportsDataSource: Send + Sync {
    /// Returns the league catalog, filtered to the configured sport.
    async fn list_leagues(&self) -> Result<Vec<League>, AppError>;

    /// Returns the teams of a league. Resolves to [`AppError::Cancelled`] if
    /// `token` fires before the request completes. A `Cancelled` result
    /// without a fired token is treated as a failed request.
    async fn list_teams_by_league(
        &self,
        league_id: &str,
        token: &CancellationToken,
    ) -> Result<Vec<Team>, AppError>;
}

/// TheSportsDB REST client.
#[derive(Debug, Clone)]
pub struct SportsDbClient {
    client: Client,
    api_base_url: String,
    sport_filter: String,
}

impl SportsDbClient {
    /// Creates a client with its own connection pool using the configured timeout.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a client that reuses an existing reqwest pool.
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            sport_filter: config.sport_filter.clone(),
        }
    }
}

#[async_trait]
impl SportsDataSource for SportsDbClient {
    #[instrument(skip(self))]
    async fn list_leagues(&self) -> Result<Vec<League>, AppError> {
        let url = build_leagues_url(&self.api_base_url);
        let response: AllLeaguesResponse = fetch(&self.client, &url, &CancellationToken::new()).await?;

        let all_leagues = response.leagues.unwrap_or_default();
        let total = all_leagues.len();
        let leagues: Vec<League> = all_leagues
            .into_iter()
            .filter(|league| league.is_sport(&self.sport_filter))
            .collect();

        info!(
            "Fetched {} leagues, kept {} {} leagues",
            total,
            leagues.len(),
            self.sport_filter
        );
        Ok(leagues)
    }

    #[instrument(skip(self, token))]
    async fn list_teams_by_league(
        &self,
        league_id: &str,
        token: &CancellationToken,
    ) -> Result<Vec<Team>, AppError> {
        let url = build_teams_url(&self.api_base_url, league_id)?;
        let response: TeamsByLeagueResponse = fetch(&self.client, &url, token).await?;

        let teams = match response.teams {
            Some(teams) => teams,
            None => {
                debug!("No team list for league {league_id}, treating as empty");
                Vec::new()
            }
        };

        info!("Fetched {} teams for league {}", teams.len(), league_id);
        Ok(teams)
    }
}
