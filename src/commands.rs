use crate::cli::Args;
use crate::config::Config;
use crate::controller::TeamsController;
use crate::data_fetcher::api::{SportsDataSource, SportsDbClient};
use crate::error::AppError;
use crate::ui::{RenderOptions, render_league_list, render_view};
use crossterm::{execute, terminal::SetTitle};
use std::io::{Write, stdout};
use std::sync::Arc;
use tracing::{error, info};

const TERMINAL_TITLE: &str = "Football Explorer";

/// Builds render options from the display flags.
pub fn render_options(args: &Args) -> RenderOptions {
    RenderOptions {
        color: !args.plain,
        show_badges: args.badges,
    }
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    Config::display().await?;
    Ok(())
}

/// Handles configuration update commands (--set-api-url, --set-log-file, --clear-log-file).
///
/// Starts from the stored config, or defaults when it can't be loaded, and
/// rejects the update if the result doesn't validate.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_url) = &args.new_api_url {
        config.api_base_url = new_url.trim().to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --leagues command: prints the league catalog once.
///
/// Catalog failures are printed instead of returned so scripts get a
/// readable message.
pub async fn handle_list_leagues_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let client = SportsDbClient::new(config)?;
    let mut out = stdout();
    execute!(out, SetTitle(TERMINAL_TITLE))?;

    match client.list_leagues().await {
        Ok(leagues) => {
            info!("Listing {} leagues", leagues.len());
            render_league_list(&mut out, &leagues, &render_options(args))?;
        }
        Err(e) => {
            error!("League catalog request failed: {e}");
            writeln!(out, "Couldn't load leagues: {e}")?;
        }
    }

    Ok(())
}

/// Handles the --league command: loads one league, prints its visible teams and exits.
pub async fn handle_league_command(
    args: &Args,
    config: &Config,
    league_id: &str,
) -> Result<(), AppError> {
    let client = SportsDbClient::new(config)?;
    let mut controller = TeamsController::new(Arc::new(client));
    let options = render_options(args);
    let mut out = stdout();
    execute!(out, SetTitle(TERMINAL_TITLE))?;

    print_league_view(&mut controller, args, league_id, &options, &mut out).await
}

/// Drives a controller through one league load and renders the outcome.
pub async fn print_league_view<W: Write>(
    controller: &mut TeamsController,
    args: &Args,
    league_id: &str,
    options: &RenderOptions,
    out: &mut W,
) -> Result<(), AppError> {
    controller.load_leagues().await;
    if let Some(search) = &args.search {
        controller.set_search(search.clone());
    }
    controller.set_sort(args.sort, args.sort_direction());

    controller.select_league(league_id);
    controller.settle().await;

    render_view(out, controller, options)
}
