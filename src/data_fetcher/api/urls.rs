//! URL building utilities for API endpoints

use crate::error::AppError;
use reqwest::Url;

/// Builds the league catalog URL.
///
/// # Example
/// ```
/// use football_explorer::data_fetcher::api::build_leagues_url;
///
/// let url = build_leagues_url("https://www.thesportsdb.com/api/v1/json/3");
/// assert_eq!(url, "https://www.thesportsdb.com/api/v1/json/3/all_leagues.php");
/// ```
pub fn build_leagues_url(api_base_url: &str) -> String {
    format!("{}/all_leagues.php", api_base_url.trim_end_matches('/'))
}

/// Builds the team lookup URL for a league. The id is query-encoded.
///
/// # Example
/// ```
/// use football_explorer::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://www.thesportsdb.com/api/v1/json/3", "4328").unwrap();
/// assert_eq!(url, "https://www.thesportsdb.com/api/v1/json/3/lookup_all_teams.php?id=4328");
/// ```
pub fn build_teams_url(api_base_url: &str, league_id: &str) -> Result<String, AppError> {
    let endpoint = format!("{}/lookup_all_teams.php", api_base_url.trim_end_matches('/'));
    Url::parse_with_params(&endpoint, &[("id", league_id)])
        .map(String::from)
        .map_err(|e| AppError::config_error(format!("Invalid API base URL '{api_base_url}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(
            build_leagues_url("http://localhost:8080/"),
            "http://localhost:8080/all_leagues.php"
        );
        assert_eq!(
            build_teams_url("http://localhost:8080/", "1").unwrap(),
            "http://localhost:8080/lookup_all_teams.php?id=1"
        );
    }

    #[test]
    fn test_league_id_is_encoded() {
        let url = build_teams_url("http://localhost:8080", "43 28&x=1").unwrap();
        assert_eq!(url, "http://localhost:8080/lookup_all_teams.php?id=43+28%26x%3D1");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = build_teams_url("not a url", "4328");
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
