//! Advanced-only view: defensive rating, net rating and pace from one query

use reqwest::Client;
use tracing::{error, info};

use super::outcome::{PipelineOutcome, Stage};
use super::table::{StatColumn, StatsTable, TeamRow};
use crate::config::Config;
use crate::constants::columns;
use crate::data_fetcher::api::fetch_advanced_stats;
use crate::data_fetcher::models::{QueryResult, Season, SeasonType};

/// Output schema of the advanced-only view, in display order.
pub const ADVANCED_VIEW_SCHEMA: [StatColumn; 4] = [
    StatColumn::Team,
    StatColumn::DefRating,
    StatColumn::NetRating,
    StatColumn::Pace,
];

/// Projects the advanced query onto the view schema, sorted by net rating.
pub fn build_advanced_table(advanced: &QueryResult) -> StatsTable {
    let columns = ADVANCED_VIEW_SCHEMA
        .iter()
        .copied()
        .filter(|column| match column {
            StatColumn::Team => true,
            StatColumn::DefRating => advanced.has_column(columns::DEF_RATING),
            StatColumn::NetRating => advanced.has_column(columns::NET_RATING),
            StatColumn::Pace => advanced.has_column(columns::PACE),
            _ => false,
        })
        .collect();

    let rows = advanced
        .records()
        .iter()
        .map(|record| TeamRow {
            def_rating: record.number(columns::DEF_RATING),
            net_rating: record.number(columns::NET_RATING),
            pace: record.number(columns::PACE),
            ..TeamRow::new(record.team_name.clone())
        })
        .collect();

    let mut table = StatsTable::new(columns, rows);
    table.sort_descending(StatColumn::NetRating);
    table.round_for_display();
    table
}

/// Runs the advanced-only view. Any upstream failure is reported as
/// `Failed`, an empty answer as `NoDataYet`; neither aborts the caller.
pub async fn advanced_only_view(
    client: &Client,
    config: &Config,
    season: &Season,
    season_type: SeasonType,
) -> PipelineOutcome {
    info!("Fetching advanced-only view for {season} ({season_type})");

    match fetch_advanced_stats(client, config, season, season_type).await {
        Ok(advanced) if advanced.is_empty() => {
            info!("No advanced stats available for {season} ({season_type})");
            PipelineOutcome::NoDataYet
        }
        Ok(advanced) => PipelineOutcome::Table {
            table: build_advanced_table(&advanced),
            warnings: Vec::new(),
        },
        Err(e) => {
            error!("Advanced-only view failed: {e}");
            PipelineOutcome::Failed {
                stage: Stage::Advanced,
                error: e,
            }
        }
    }
}
