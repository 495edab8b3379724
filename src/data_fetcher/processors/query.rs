use crate::data_fetcher::models::Team;

use super::filtering::filter_by_query;
use super::sorting::{SortDirection, SortKey, sort_teams};

/// Search and ordering chosen by the user for the current session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl QueryState {
    pub fn new(search: impl Into<String>, sort_key: SortKey, direction: SortDirection) -> Self {
        Self {
            search: search.into(),
            sort_key,
            direction,
        }
    }
}

/// Derives the rendered view: filter by search text, then sort.
pub fn visible_teams(teams: &[Team], query: &QueryState) -> Vec<Team> {
    let filtered = filter_by_query(teams, &query.search);
    sort_teams(&filtered, query.sort_key, query.direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_default_query_sorts_by_name_ascending() {
        let teams = vec![
            TestDataBuilder::create_team("1", "Chelsea"),
            TestDataBuilder::create_team("2", "Arsenal"),
        ];

        let view = visible_teams(&teams, &QueryState::default());
        let names: Vec<&str> = view.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Arsenal", "Chelsea"]);
    }

    #[test]
    fn test_filter_then_sort() {
        let teams = vec![
            TestDataBuilder::create_full_team("1", "Manchester United", Some("Old Trafford"), Some("1878")),
            TestDataBuilder::create_full_team("2", "Arsenal", Some("Emirates Stadium"), Some("1886")),
            TestDataBuilder::create_full_team("3", "Manchester City", Some("Etihad Stadium"), Some("1880")),
        ];
        let query = QueryState::new("manchester", SortKey::FoundedYear, SortDirection::Descending);

        let view = visible_teams(&teams, &query);
        let names: Vec<&str> = view.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Manchester City", "Manchester United"]);
    }
}
