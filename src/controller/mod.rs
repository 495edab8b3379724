//! Fetch lifecycle for the team list of the selected league
//!
//! The controller owns the request state machine, the per-league cache and
//! the single active cancellation handle. Fetches run as spawned tasks that
//! report back over a channel; the owner applies those completions one at a
//! time, so every state mutation happens on the owning task.

mod core;
pub mod state;

pub use core::{EventDisposition, FetchCompletion, TeamsController};
pub use state::{FetchState, FetchStatus};
