use crate::cli::Args;
use crate::commands::render_options;
use crate::config::Config;
use crate::controller::{EventDisposition, TeamsController};
use crate::data_fetcher::api::SportsDbClient;
use crate::data_fetcher::processors::{SortDirection, SortKey};
use crate::error::AppError;
use crate::ui::{RenderOptions, render_league_list, render_status, render_view};
use std::io::{Write, stdout};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const HELP_TEXT: &str = "\
Commands:
  leagues                  list soccer leagues
  league <id>              load the teams of a league
  clear                    clear the league selection
  search <text>            filter teams by name (empty clears)
  sort <key> [asc|desc]    sort by name, founded or stadium
  refetch                  reload the current league from the network
  status                   show the fetch status
  help                     show this help
  quit                     exit
";

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Leagues,
    League(String),
    Clear,
    Search(String),
    Sort(SortKey, SortDirection),
    Refetch,
    Status,
    Help,
    Quit,
    Empty,
}

impl Command {
    /// Parses a command line. Unknown commands yield a message for the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(Command::Empty),
            "leagues" => Ok(Command::Leagues),
            "league" | "l" if rest.is_empty() => Err("usage: league <id>".to_string()),
            "league" | "l" => Ok(Command::League(rest.to_string())),
            "clear" => Ok(Command::Clear),
            "search" | "/" => Ok(Command::Search(rest.to_string())),
            "sort" => {
                let mut parts = rest.split_whitespace();
                let key = parts
                    .next()
                    .ok_or_else(|| "usage: sort <name|founded|stadium> [asc|desc]".to_string())?
                    .parse::<SortKey>()?;
                let direction = match parts.next() {
                    Some(direction) => direction.parse::<SortDirection>()?,
                    None => SortDirection::Ascending,
                };
                Ok(Command::Sort(key, direction))
            }
            "refetch" | "r" => Ok(Command::Refetch),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command '{other}', type 'help'")),
        }
    }
}

enum Input {
    Line(Option<String>),
    Fetch(Option<EventDisposition>),
}

/// Run the interactive application flow.
///
/// Reads commands from stdin while fetch completions are applied as they
/// arrive, so a new `league` command supersedes one still loading.
pub async fn run_interactive(args: &Args, config: &Config) -> Result<(), AppError> {
    let client = SportsDbClient::new(config)?;
    let mut controller = TeamsController::new(Arc::new(client));
    if let Some(search) = &args.search {
        controller.set_search(search.clone());
    }
    controller.set_sort(args.sort, args.sort_direction());

    let options = render_options(args);
    let mut out = stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    controller.load_leagues().await;
    writeln!(
        out,
        "{} leagues available. Type 'help' for commands.",
        controller.leagues().len()
    )?;
    prompt(&mut out)?;

    loop {
        let input = tokio::select! {
            line = lines.next_line() => Input::Line(line?),
            event = controller.next_event() => Input::Fetch(event),
        };

        match input {
            Input::Line(None) => {
                debug!("stdin closed");
                break;
            }
            Input::Line(Some(line)) => {
                let command = match Command::parse(&line) {
                    Ok(command) => command,
                    Err(message) => {
                        writeln!(out, "{message}")?;
                        prompt(&mut out)?;
                        continue;
                    }
                };
                if command == Command::Quit {
                    break;
                }
                handle_command(&mut controller, command, &options, &mut out).await?;
                prompt(&mut out)?;
            }
            Input::Fetch(Some(EventDisposition::Applied)) => {
                writeln!(out)?;
                render_view(&mut out, &controller, &options)?;
                prompt(&mut out)?;
            }
            Input::Fetch(Some(disposition)) => {
                debug!("Fetch completion ignored: {disposition:?}");
            }
            Input::Fetch(None) => break,
        }
    }

    info!("Interactive session finished");
    Ok(())
}

/// Applies one command to the controller and prints the result.
pub async fn handle_command<W: Write>(
    controller: &mut TeamsController,
    command: Command,
    options: &RenderOptions,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Command::Leagues => {
            controller.load_leagues().await;
            render_league_list(out, controller.leagues(), options)?;
        }
        Command::League(id) => {
            controller.select_league(&id);
            render_view(out, controller, options)?;
        }
        Command::Clear => {
            controller.clear_selection();
            render_status(out, controller, options)?;
        }
        Command::Search(text) => {
            controller.set_search(text);
            render_view(out, controller, options)?;
        }
        Command::Sort(key, direction) => {
            controller.set_sort(key, direction);
            render_view(out, controller, options)?;
        }
        Command::Refetch => {
            controller.refetch();
            render_status(out, controller, options)?;
        }
        Command::Status => {
            render_status(out, controller, options)?;
            let stats = controller.cache_stats();
            writeln!(
                out,
                "Cache: {} leagues, {} hits, {} misses ({:.0}% hit rate)",
                stats.entries,
                stats.hits,
                stats.misses,
                stats.hit_rate() * 100.0
            )?;
        }
        Command::Help => write!(out, "{HELP_TEXT}")?,
        Command::Quit | Command::Empty => {}
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<(), AppError> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{ScriptedSource, TestDataBuilder};

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("  leagues "), Ok(Command::Leagues));
        assert_eq!(Command::parse("league 4328"), Ok(Command::League("4328".to_string())));
        assert_eq!(Command::parse("search  man utd "), Ok(Command::Search("man utd".to_string())));
        assert_eq!(Command::parse("search"), Ok(Command::Search(String::new())));
        assert_eq!(
            Command::parse("sort founded desc"),
            Ok(Command::Sort(SortKey::FoundedYear, SortDirection::Descending))
        );
        assert_eq!(
            Command::parse("SORT stadium"),
            Ok(Command::Sort(SortKey::Stadium, SortDirection::Ascending))
        );
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse(""), Ok(Command::Empty));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Command::parse("league").is_err());
        assert!(Command::parse("sort").is_err());
        assert!(Command::parse("sort points").is_err());
        assert!(Command::parse("sort name sideways").is_err());
        assert!(Command::parse("standings").is_err());
    }

    #[tokio::test]
    async fn test_league_command_then_search() {
        let source = Arc::new(ScriptedSource::new());
        source.respond(
            "4328",
            vec![
                TestDataBuilder::create_team("1", "Arsenal"),
                TestDataBuilder::create_team("2", "Aston Villa"),
                TestDataBuilder::create_team("3", "Chelsea"),
            ],
        );
        let mut controller = TeamsController::new(source.clone());
        let options = RenderOptions::plain();

        let mut buffer = Vec::new();
        handle_command(&mut controller, Command::League("4328".into()), &options, &mut buffer)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&buffer).starts_with("Loading teams for 4328"));

        controller.settle().await;

        let mut buffer = Vec::new();
        handle_command(&mut controller, Command::Search("ast".into()), &options, &mut buffer)
            .await
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Aston Villa"));
        assert!(!output.contains("Arsenal"));
        assert!(!output.contains("Chelsea"));
    }

    #[tokio::test]
    async fn test_status_command_reports_cache() {
        let source = Arc::new(ScriptedSource::new());
        source.respond("4328", vec![TestDataBuilder::create_team("1", "Arsenal")]);
        let mut controller = TeamsController::new(source.clone());
        controller.select_league("4328");
        controller.settle().await;

        let mut buffer = Vec::new();
        handle_command(&mut controller, Command::Status, &RenderOptions::plain(), &mut buffer)
            .await
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("4328: 1 teams"));
        assert!(output.contains("Cache: 1 leagues, 0 hits, 1 misses (0% hit rate)"));

        controller.select_league("");
        controller.select_league("4328");
        let mut buffer = Vec::new();
        handle_command(&mut controller, Command::Status, &RenderOptions::plain(), &mut buffer)
            .await
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("4328: 1 teams (cached)"));
        assert!(output.contains("Cache: 1 leagues, 1 hits, 1 misses (50% hit rate)"));
    }
}
