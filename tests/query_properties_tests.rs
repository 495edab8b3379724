use football_explorer::{
    QueryState, SortDirection, SortKey, Team,
    data_fetcher::processors::{filter_by_query, normalize, sort_teams, visible_teams},
    testing_utils::TestDataBuilder,
};

fn bundesliga() -> Vec<Team> {
    vec![
        TestDataBuilder::create_full_team("133664", "Bayern München", Some("Allianz Arena"), Some("1900")),
        TestDataBuilder::create_full_team("133650", "Borussia Dortmund", Some("Signal Iduna Park"), Some("1909")),
        TestDataBuilder::create_full_team("134778", "RB Leipzig", Some("Red Bull Arena"), Some("2009")),
        TestDataBuilder::create_full_team("133666", "Bayer Leverkusen", Some("BayArena"), Some("1904")),
        TestDataBuilder::create_full_team("133671", "Borussia Mönchengladbach", Some("Borussia-Park"), Some("1900")),
        TestDataBuilder::create_full_team("133672", "1. FC Köln", Some("RheinEnergieStadion"), None),
        TestDataBuilder::create_full_team("133674", "Werder Bremen", Some("Weserstadion"), Some("1899")),
        TestDataBuilder::create_full_team("133682", "Union Berlin", None, Some("1966")),
    ]
}

fn names(teams: &[Team]) -> Vec<&str> {
    teams.iter().map(|t| t.name.as_str()).collect()
}

fn is_subsequence(sub: &[Team], full: &[Team]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|team| rest.any(|candidate| candidate == team))
}

#[test]
fn test_filter_is_order_preserving_subsequence() {
    let teams = bundesliga();
    for query in ["borussia", "  BAY ", "r", "ö", "berlin", "zzz"] {
        let filtered = filter_by_query(&teams, query);
        assert!(is_subsequence(&filtered, &teams), "query {query:?}");
        let needle = normalize(query);
        assert!(filtered
            .iter()
            .all(|team| normalize(&team.name).contains(&needle)));
        let expected = teams
            .iter()
            .filter(|team| normalize(&team.name).contains(&needle))
            .count();
        assert_eq!(filtered.len(), expected);
    }
}

#[test]
fn test_blank_query_is_identity() {
    let teams = bundesliga();
    for query in ["", "   ", "\t"] {
        assert_eq!(&*filter_by_query(&teams, query), teams.as_slice());
    }
}

#[test]
fn test_every_key_is_stable_in_both_directions() {
    let teams = bundesliga();
    for key in [SortKey::Name, SortKey::FoundedYear, SortKey::Stadium] {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let once = sort_teams(&teams, key, direction);
            let twice = sort_teams(&once, key, direction);
            assert_eq!(once, twice, "{key} {direction}");
        }
    }

    // Bayern and Gladbach share 1900 and keep input order either way
    let asc = sort_teams(&teams, SortKey::FoundedYear, SortDirection::Ascending);
    let desc = sort_teams(&teams, SortKey::FoundedYear, SortDirection::Descending);
    for sorted in [&asc, &desc] {
        let bayern = sorted.iter().position(|t| t.id == "133664");
        let gladbach = sorted.iter().position(|t| t.id == "133671");
        assert!(bayern < gladbach);
    }
}

#[test]
fn test_founded_year_order_with_missing_year_first() {
    let sorted = sort_teams(&bundesliga(), SortKey::FoundedYear, SortDirection::Ascending);
    assert_eq!(
        names(&sorted),
        vec![
            "1. FC Köln",
            "Werder Bremen",
            "Bayern München",
            "Borussia Mönchengladbach",
            "Bayer Leverkusen",
            "Borussia Dortmund",
            "Union Berlin",
            "RB Leipzig",
        ]
    );
}

#[test]
fn test_desc_name_order_reverses_asc() {
    let teams = bundesliga();
    let asc = sort_teams(&teams, SortKey::Name, SortDirection::Ascending);
    let mut desc = sort_teams(&teams, SortKey::Name, SortDirection::Descending);
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_zeta_alpha_example() {
    let teams = vec![
        TestDataBuilder::create_full_team("1", "Zeta", None, Some("1990")),
        TestDataBuilder::create_full_team("2", "Alpha", Some("X"), Some("2001")),
    ];

    let by_name = visible_teams(&teams, &QueryState::new("", SortKey::Name, SortDirection::Ascending));
    assert_eq!(names(&by_name), vec!["Alpha", "Zeta"]);

    let by_year = visible_teams(
        &teams,
        &QueryState::new("", SortKey::FoundedYear, SortDirection::Descending),
    );
    assert_eq!(names(&by_year), vec!["Alpha", "Zeta"]);

    let by_stadium = visible_teams(&teams, &QueryState::new("", SortKey::Stadium, SortDirection::Ascending));
    assert_eq!(names(&by_stadium), vec!["Zeta", "Alpha"]);
}

#[test]
fn test_search_and_sort_compose() {
    let query = QueryState::new("borussia", SortKey::Stadium, SortDirection::Ascending);
    let view = visible_teams(&bundesliga(), &query);
    assert_eq!(names(&view), vec!["Borussia Mönchengladbach", "Borussia Dortmund"]);
}
