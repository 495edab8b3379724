use serde::{Deserialize, Deserializer, Serialize};

/// Team record as returned by `lookup_all_teams.php`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "idTeam")]
    pub id: String,
    #[serde(rename = "strTeam")]
    pub name: String,
    #[serde(rename = "strTeamBadge", default)]
    pub badge_url: Option<String>,
    #[serde(rename = "strStadium", default)]
    pub stadium: Option<String>,
    #[serde(rename = "strCountry", default)]
    pub country: Option<String>,
    /// Founding year exactly as received; the API sends it as text.
    #[serde(
        rename = "intFormedYear",
        default,
        deserialize_with = "deserialize_text_or_number"
    )]
    pub formed_year: Option<String>,
    #[serde(rename = "strStadiumThumb", default)]
    pub stadium_thumb_url: Option<String>,
}

impl Team {
    /// Founding year as a number, 0 when missing or unparseable.
    pub fn founded_year(&self) -> i64 {
        self.formed_year
            .as_deref()
            .and_then(|year| year.trim().parse::<i64>().ok())
            .unwrap_or(0)
    }

    /// Stadium name, empty when the API omits it.
    pub fn stadium_or_empty(&self) -> &str {
        self.stadium.as_deref().unwrap_or("")
    }
}

/// Envelope of the team lookup endpoint. `teams` is `null` for unknown leagues.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamsByLeagueResponse {
    #[serde(default)]
    pub teams: Option<Vec<Team>>,
}

fn deserialize_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}
