pub mod league;
pub mod team;

pub use league::{AllLeaguesResponse, League};
pub use team::{Team, TeamsByLeagueResponse};
