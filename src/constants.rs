//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and default values so that the
//! config layer, the HTTP client and the renderer agree on them.

/// Default TheSportsDB API base (free v1 key)
pub const DEFAULT_API_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json/3";

/// Sport category kept from the league catalog
pub const DEFAULT_SPORT_FILTER: &str = "Soccer";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Name used for the config directory and the log file
pub const APP_NAME: &str = "football_explorer";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "football_explorer.log";

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_URL: &str = "FOOTBALL_EXPLORER_API_URL";
    pub const LOG_FILE: &str = "FOOTBALL_EXPLORER_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "FOOTBALL_EXPLORER_HTTP_TIMEOUT";
}

/// Terminal rendering constants
pub mod ui {
    /// Width reserved for the team name column
    pub const TEAM_NAME_COLUMN_WIDTH: usize = 28;

    /// Width reserved for the country column
    pub const COUNTRY_COLUMN_WIDTH: usize = 14;

    /// Placeholder printed for missing optional fields
    pub const MISSING_FIELD: &str = "—";
}
