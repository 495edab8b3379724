use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::data_fetcher::processors::{SortDirection, SortKey};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --leagues or --league is given (print once and exit)
/// - config operations are requested
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.list_leagues
        || args.league.is_some()
        || is_config_update(args)
        || args.list_config
}

/// True when any flag that persists a config change is present
pub fn is_config_update(args: &Args) -> bool {
    args.new_api_url.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Football league and team explorer backed by TheSportsDB
///
/// Browse soccer leagues and their teams, search by name and sort by
/// name, founding year or stadium.
///
/// In interactive mode (default) commands are read line by line:
/// - `leagues` lists the catalog, `league <id>` loads a league
/// - `search <text>` and `sort <key> [asc|desc]` shape the list
/// - `refetch` reloads the current league, `quit` exits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print the soccer league catalog and exit
    #[arg(short = 'L', long = "leagues")]
    pub list_leagues: bool,

    /// Load the teams of one league by id, print them and exit
    #[arg(short = 'g', long = "league", value_name = "ID")]
    pub league: Option<String>,

    /// Only show teams whose name contains this text (case-insensitive)
    #[arg(short = 's', long = "search", help_heading = "Display Options")]
    pub search: Option<String>,

    /// Sort key for the team list: name, founded or stadium
    #[arg(
        long = "sort",
        default_value_t = SortKey::Name,
        help_heading = "Display Options"
    )]
    pub sort: SortKey,

    /// Sort in descending order
    #[arg(long = "desc", help_heading = "Display Options")]
    pub desc: bool,

    /// Disable colors in the output
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Print badge image URLs under each team
    #[arg(long = "badges", help_heading = "Display Options")]
    pub badges: bool,

    /// Update the API base URL in config
    #[arg(long = "set-api-url", value_name = "URL", help_heading = "Configuration")]
    pub new_api_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal in one-shot modes
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", value_name = "PATH", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    pub fn sort_direction(&self) -> SortDirection {
        if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}
