use serde::{Deserialize, Serialize};

/// League record as returned by `all_leagues.php`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    #[serde(rename = "idLeague")]
    pub id: String,
    #[serde(rename = "strLeague")]
    pub name: String,
    #[serde(rename = "strSport")]
    pub sport: String,
    #[serde(rename = "strLeagueAlternate", default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
}

impl League {
    /// Whether the league belongs to the given sport category (exact match)
    pub fn is_sport(&self, sport: &str) -> bool {
        self.sport == sport
    }
}

/// Envelope of the league catalog endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AllLeaguesResponse {
    #[serde(default)]
    pub leagues: Option<Vec<League>>,
}
