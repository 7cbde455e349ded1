//! URL building utilities for API endpoints

use reqwest::Url;

use crate::constants::TEAM_STATS_ENDPOINT;
use crate::data_fetcher::models::TeamStatsQuery;
use crate::error::AppError;

/// Query parameters for the team dashboard endpoint.
///
/// The service rejects requests that omit any of its filters, so the
/// filters this tool does not use are sent with their neutral values.
pub fn team_stats_params(query: &TeamStatsQuery, league_id: &str) -> Vec<(&'static str, String)> {
    let location = query.location.map(|l| l.as_param()).unwrap_or_default();

    vec![
        ("Conference", String::new()),
        ("DateFrom", String::new()),
        ("DateTo", String::new()),
        ("Division", String::new()),
        ("GameScope", String::new()),
        ("GameSegment", String::new()),
        ("LastNGames", "0".to_string()),
        ("LeagueID", league_id.to_string()),
        ("Location", location.to_string()),
        ("MeasureType", query.measure_type.as_param().to_string()),
        ("Month", "0".to_string()),
        ("OpponentTeamID", "0".to_string()),
        ("Outcome", String::new()),
        ("PORound", "0".to_string()),
        ("PaceAdjust", "N".to_string()),
        ("PerMode", query.per_mode.as_param().to_string()),
        ("Period", "0".to_string()),
        ("PlayerExperience", String::new()),
        ("PlayerPosition", String::new()),
        ("PlusMinus", "N".to_string()),
        ("Rank", "N".to_string()),
        ("Season", query.season.to_string()),
        ("SeasonSegment", String::new()),
        ("SeasonType", query.season_type.as_param().to_string()),
        ("ShotClockRange", String::new()),
        ("StarterBench", String::new()),
        ("TeamID", "0".to_string()),
        ("TwoWay", "0".to_string()),
        ("VsConference", String::new()),
        ("VsDivision", String::new()),
    ]
}

/// Builds the full team dashboard URL for one query.
///
/// # Example
/// ```
/// use nba_team_stats::data_fetcher::api::build_team_stats_url;
/// use nba_team_stats::data_fetcher::models::{Season, SeasonType, TeamStatsQuery};
///
/// let season = Season::parse("2024-25").unwrap();
/// let query = TeamStatsQuery::advanced(&season, SeasonType::RegularSeason);
/// let url = build_team_stats_url("https://stats.example.com/stats", &query, "00").unwrap();
/// assert!(url.starts_with("https://stats.example.com/stats/leaguedashteamstats?"));
/// assert!(url.contains("MeasureType=Advanced"));
/// assert!(url.contains("SeasonType=Regular+Season"));
/// ```
pub fn build_team_stats_url(
    api_base: &str,
    query: &TeamStatsQuery,
    league_id: &str,
) -> Result<String, AppError> {
    let endpoint = format!("{}/{TEAM_STATS_ENDPOINT}", api_base.trim_end_matches('/'));
    let url = Url::parse_with_params(&endpoint, team_stats_params(query, league_id))
        .map_err(|e| AppError::config_error(format!("Invalid API base URL '{api_base}': {e}")))?;
    Ok(url.to_string())
}
