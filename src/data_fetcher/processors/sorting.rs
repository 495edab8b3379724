use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::data_fetcher::models::Team;

use super::text::CollationKey;

/// Attribute a team list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    FoundedYear,
    Stadium,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "founded" | "formedyear" | "founded-year" | "year" => Ok(SortKey::FoundedYear),
            "stadium" => Ok(SortKey::Stadium),
            other => Err(format!(
                "unknown sort key '{other}' (expected name, founded or stadium)"
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Name => "name",
            SortKey::FoundedYear => "founded",
            SortKey::Stadium => "stadium",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Applies the direction to a comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction '{other}' (expected asc or desc)")),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        })
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Number(i64),
    Text(CollationKey),
}

impl SortValue {
    fn for_team(team: &Team, key: SortKey) -> Self {
        match key {
            SortKey::Name => SortValue::Text(CollationKey::new(&team.name)),
            SortKey::Stadium => SortValue::Text(CollationKey::new(team.stadium_or_empty())),
            SortKey::FoundedYear => SortValue::Number(team.founded_year()),
        }
    }
}

/// Returns a new, stably sorted copy of `teams`.
///
/// Descending order flips each comparison, so teams with equal keys keep
/// their original relative order in both directions.
pub fn sort_teams(teams: &[Team], key: SortKey, direction: SortDirection) -> Vec<Team> {
    let mut keyed: Vec<(SortValue, &Team)> = teams
        .iter()
        .map(|team| (SortValue::for_team(team, key), team))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));

    keyed.into_iter().map(|(_, team)| team.clone()).collect()
}
