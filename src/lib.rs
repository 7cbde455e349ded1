//! NBA team statistics library
//!
//! Fetches team dashboards from the NBA stats service, joins the general,
//! advanced and home-split result sets per team and renders them as a
//! fixed-width console table.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nba_team_stats::aggregator::{PipelineOutcome, aggregate_team_stats};
//! use nba_team_stats::config::Config;
//! use nba_team_stats::data_fetcher::api::create_http_client_with_timeout;
//! use nba_team_stats::data_fetcher::models::{Season, SeasonType};
//! use nba_team_stats::display::render_table;
//! use nba_team_stats::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!     let season = Season::parse("2024-25")?;
//!
//!     match aggregate_team_stats(&client, &config, &season, SeasonType::RegularSeason).await {
//!         PipelineOutcome::Table { table, .. } => print!("{}", render_table(&table)),
//!         PipelineOutcome::NoDataYet => println!("No data yet"),
//!         PipelineOutcome::Failed { stage, error } => eprintln!("{stage} failed: {error}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod display;
pub mod error;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use aggregator::{PipelineOutcome, StatsTable, TeamRow, advanced_only_view, aggregate_team_stats};
pub use config::Config;
pub use data_fetcher::models::{Season, SeasonType};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
