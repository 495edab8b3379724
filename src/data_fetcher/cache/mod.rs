pub mod types;
pub mod team_cache;

// Re-export cache types
pub use types::*;
// Re-export the team cache
pub use team_cache::*;
