//! Football league and team explorer library
//!
//! This library loads soccer leagues and their teams from TheSportsDB and
//! keeps a searchable, sortable team list for the selected league. Team
//! requests are cancelled when the selection changes, so a slow response
//! for an old league never replaces the current one.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use football_explorer::config::Config;
//! use football_explorer::controller::TeamsController;
//! use football_explorer::data_fetcher::api::SportsDbClient;
//! use football_explorer::data_fetcher::processors::{SortDirection, SortKey};
//! use football_explorer::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let mut controller = TeamsController::new(Arc::new(SportsDbClient::new(&config)?));
//!
//!     controller.load_leagues().await;
//!     controller.select_league("4328");
//!     controller.settle().await;
//!
//!     controller.set_search("united");
//!     controller.set_sort(SortKey::FoundedYear, SortDirection::Descending);
//!     for team in controller.visible_teams() {
//!         println!("{} ({})", team.name, team.founded_year());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod controller;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use controller::{FetchStatus, TeamsController};
pub use data_fetcher::api::{SportsDataSource, SportsDbClient};
pub use data_fetcher::cache::CacheStats;
pub use data_fetcher::models::{League, Team};
pub use data_fetcher::processors::{QueryState, SortDirection, SortKey};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
