//! Queries against the team dashboard endpoint

use reqwest::Client;
use tracing::{debug, info};

use super::fetch_utils::fetch;
use super::urls::build_team_stats_url;
use crate::config::Config;
use crate::data_fetcher::models::{QueryResult, Season, SeasonType, StatsResponse, TeamStatsQuery};
use crate::error::AppError;

/// Runs one dashboard query and returns its first result set as team records.
///
/// # Errors
/// * transport and HTTP status errors from the fetch
/// * `ApiNoData` when the response carries no result set at all
/// * `ApiUnexpectedStructure` when the result set has no team name column
pub async fn fetch_team_stats(
    client: &Client,
    config: &Config,
    query: &TeamStatsQuery,
) -> Result<QueryResult, AppError> {
    let url = build_team_stats_url(&config.api_base_url, query, &config.league_id)?;
    let response: StatsResponse = fetch(client, &url).await?;

    let set = response
        .result_sets
        .into_iter()
        .next()
        .ok_or_else(|| AppError::api_no_data("Response contains no result sets", &url))?;

    debug!("Result set '{}' has {} rows", set.name, set.row_set.len());

    let result = QueryResult::from_result_set(set)
        .map_err(|message| AppError::api_unexpected_structure(message, &url))?;

    info!(
        "Fetched {} teams ({} / {} / {})",
        result.len(),
        query.measure_type.as_param(),
        query.season,
        query.season_type
    );
    Ok(result)
}

/// Per-game base stats (points, wins, games played, plus/minus).
pub async fn fetch_general_stats(
    client: &Client,
    config: &Config,
    season: &Season,
    season_type: SeasonType,
) -> Result<QueryResult, AppError> {
    fetch_team_stats(client, config, &TeamStatsQuery::general(season, season_type)).await
}

/// Ratings and pace per 100 possessions.
pub async fn fetch_advanced_stats(
    client: &Client,
    config: &Config,
    season: &Season,
    season_type: SeasonType,
) -> Result<QueryResult, AppError> {
    fetch_team_stats(client, config, &TeamStatsQuery::advanced(season, season_type)).await
}

/// Base stats restricted to home games.
pub async fn fetch_home_split_stats(
    client: &Client,
    config: &Config,
    season: &Season,
    season_type: SeasonType,
) -> Result<QueryResult, AppError> {
    fetch_team_stats(client, config, &TeamStatsQuery::home_split(season, season_type)).await
}
