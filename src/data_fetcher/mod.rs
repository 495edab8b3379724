pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::{SportsDataSource, SportsDbClient};
pub use models::{League, Team};
