use std::borrow::Cow;

use crate::data_fetcher::models::Team;

use super::text::normalize;

/// Keeps teams whose normalized name contains the normalized query.
///
/// A blank query borrows the input untouched; otherwise the matching teams are
/// returned in their original order.
pub fn filter_by_query<'a>(teams: &'a [Team], query: &str) -> Cow<'a, [Team]> {
    let query = normalize(query);
    if query.is_empty() {
        return Cow::Borrowed(teams);
    }

    Cow::Owned(
        teams
            .iter()
            .filter(|team| normalize(&team.name).contains(&query))
            .cloned()
            .collect(),
    )
}
