// src/main.rs
use clap::Parser;
use football_explorer::app::run_interactive;
use football_explorer::cli::{Args, is_config_update};
use football_explorer::commands::{
    handle_config_update_command, handle_league_command, handle_list_config_command,
    handle_list_leagues_command,
};
use football_explorer::config::Config;
use football_explorer::error::AppError;
use football_explorer::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Try to load config to get log file path if specified
    let config = Config::load().await;
    let config_log_path = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_file_path.clone());

    // Keep the guard alive so buffered log lines are flushed on exit
    let (log_file_path, _guard) = setup_logging(&args, config_log_path.as_deref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Configuration operations work even when the stored config is invalid
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args).await;
    }

    let config = config?;

    if args.list_leagues {
        return handle_list_leagues_command(&args, &config).await;
    }

    if let Some(league_id) = &args.league {
        return handle_league_command(&args, &config, league_id).await;
    }

    run_interactive(&args, &config).await
}
