pub mod api;
pub mod models;

pub use api::{fetch_advanced_stats, fetch_general_stats, fetch_home_split_stats};
pub use models::{QueryResult, Season, SeasonType, TeamRecord};
