//! Terminal presentation of controller state

pub mod formatting;
pub mod league_list;
pub mod team_list;

pub use league_list::render_league_list;
pub use team_list::{render_status, render_team_list, render_view};

/// Output switches for the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
    pub show_badges: bool,
}

impl RenderOptions {
    pub fn plain() -> Self {
        Self {
            color: false,
            show_badges: false,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            show_badges: false,
        }
    }
}
