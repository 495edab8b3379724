pub mod filtering;
pub mod query;
pub mod sorting;
pub mod text;

pub use filtering::filter_by_query;
pub use query::{QueryState, visible_teams};
pub use sorting::{SortDirection, SortKey, sort_teams};
pub use text::{CollationKey, normalize};
