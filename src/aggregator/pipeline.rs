//! Full team stats pipeline: general + advanced + home split

use reqwest::Client;
use tracing::{info, warn};

use super::merge::{TEAM_STATS_SCHEMA, merge, select_and_rename};
use super::outcome::{Degradation, FetchOutcome, PipelineOutcome, Stage};
use super::table::{StatColumn, StatsTable};
use crate::config::Config;
use crate::constants::{TEAM_STATS_ENDPOINT, columns};
use crate::data_fetcher::api::{fetch_advanced_stats, fetch_general_stats, fetch_home_split_stats};
use crate::data_fetcher::models::{QueryResult, Season, SeasonType};
use crate::error::AppError;

/// Applies a stage's fault policy to a fetch result: the general query is
/// required, the others degrade.
pub fn classify(stage: Stage, result: Result<QueryResult, AppError>) -> FetchOutcome<QueryResult> {
    match result {
        Ok(result) => FetchOutcome::Ready(result),
        Err(error) if stage == Stage::General => FetchOutcome::Fatal { stage, error },
        Err(error) => {
            warn!("Continuing without {stage}: {error}");
            FetchOutcome::Degraded { stage, error }
        }
    }
}

/// Rejects a home split that lacks the games or wins column. Without them
/// every team would show zero home games, so the split counts as failed.
pub fn check_home_split(result: Result<QueryResult, AppError>) -> Result<QueryResult, AppError> {
    let home = result?;
    let missing: Vec<&str> = [columns::GAMES_PLAYED, columns::WINS]
        .into_iter()
        .filter(|column| !home.has_column(column))
        .collect();

    if missing.is_empty() {
        Ok(home)
    } else {
        Err(AppError::api_unexpected_structure(
            format!("home split is missing column(s) {}", missing.join(", ")),
            TEAM_STATS_ENDPOINT,
        ))
    }
}

/// Merges the fetched results into the sorted, rounded presentation table.
pub fn build_team_table(
    general: &QueryResult,
    advanced: Option<&QueryResult>,
    home_split: Option<&QueryResult>,
) -> StatsTable {
    let merged = merge(general, advanced, home_split);
    let mut table = select_and_rename(merged, &TEAM_STATS_SCHEMA);

    if !table.sort_descending(StatColumn::OffRating) {
        info!("No offensive ratings available, keeping upstream order");
    }
    table.round_for_display();
    table
}

/// Runs the full pipeline for one season and season type.
///
/// Queries run one after another. A failed or empty general query ends
/// the run; failed advanced or home split queries only drop their columns
/// and are reported as warnings.
pub async fn aggregate_team_stats(
    client: &Client,
    config: &Config,
    season: &Season,
    season_type: SeasonType,
) -> PipelineOutcome {
    info!("Aggregating team stats for {season} ({season_type})");

    info!("1/3 Fetching general stats");
    let general = match classify(
        Stage::General,
        fetch_general_stats(client, config, season, season_type).await,
    ) {
        FetchOutcome::Ready(general) if general.is_empty() => {
            info!("No general stats returned for {season} ({season_type})");
            return PipelineOutcome::NoDataYet;
        }
        FetchOutcome::Ready(general) => general,
        FetchOutcome::Fatal { stage, error } | FetchOutcome::Degraded { stage, error } => {
            return PipelineOutcome::Failed { stage, error };
        }
    };

    let mut warnings = Vec::new();

    info!("2/3 Fetching advanced stats");
    let advanced = match classify(
        Stage::Advanced,
        fetch_advanced_stats(client, config, season, season_type).await,
    ) {
        FetchOutcome::Ready(advanced) => Some(advanced),
        FetchOutcome::Degraded { stage, error } => {
            warnings.push(Degradation::new(stage, &error));
            None
        }
        FetchOutcome::Fatal { stage, error } => return PipelineOutcome::Failed { stage, error },
    };

    info!("3/3 Fetching home/away stats");
    let home_split = match classify(
        Stage::HomeSplit,
        check_home_split(fetch_home_split_stats(client, config, season, season_type).await),
    ) {
        FetchOutcome::Ready(home) => Some(home),
        FetchOutcome::Degraded { stage, error } => {
            warnings.push(Degradation::new(stage, &error));
            None
        }
        FetchOutcome::Fatal { stage, error } => return PipelineOutcome::Failed { stage, error },
    };

    let table = build_team_table(&general, advanced.as_ref(), home_split.as_ref());
    info!("Built table with {} teams", table.len());

    PipelineOutcome::Table { table, warnings }
}
