//! Left joins of the per-query results and the derived columns

use std::collections::HashSet;

use super::table::{StatColumn, StatsTable, TeamRow};
use crate::constants::columns;
use crate::data_fetcher::models::{QueryResult, TeamRecord};

/// Output schema of the full pipeline, in display order.
pub const TEAM_STATS_SCHEMA: [StatColumn; 10] = [
    StatColumn::Team,
    StatColumn::OffRating,
    StatColumn::DefRating,
    StatColumn::Pace,
    StatColumn::PointsPerGame,
    StatColumn::PointsAllowed,
    StatColumn::HomeGames,
    StatColumn::HomeWins,
    StatColumn::AwayGames,
    StatColumn::AwayWins,
];

/// Rows of the general query, in upstream order, with whatever the other
/// queries contributed and the set of columns that exist after the joins.
#[derive(Debug, Clone, Default)]
pub struct MergedTable {
    pub rows: Vec<TeamRow>,
    pub present: HashSet<StatColumn>,
}

/// Converts a non-negative count reported as a float into an integer.
fn to_count(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

/// Joins advanced ratings and the home split onto the general rows.
///
/// Teams missing from `advanced` keep unset ratings. Advanced columns exist
/// only if the advanced query returned rows. When `home_split` is given the
/// four home/away columns exist for every team; a team missing from the
/// split counts as zero home games and wins.
pub fn merge(
    general: &QueryResult,
    advanced: Option<&QueryResult>,
    home_split: Option<&QueryResult>,
) -> MergedTable {
    let mut present = HashSet::from([StatColumn::Team]);
    if general.has_column(columns::POINTS) {
        present.insert(StatColumn::PointsPerGame);
    }

    let mut rows: Vec<TeamRow> = general
        .records()
        .iter()
        .map(|record| TeamRow {
            points_per_game: record.number(columns::POINTS),
            points_allowed: record.number(columns::OPPONENT_POINTS),
            ..TeamRow::new(record.team_name.clone())
        })
        .collect();

    if let Some(advanced) = advanced.filter(|a| !a.is_empty()) {
        join_advanced(&mut rows, advanced);
        for (column, source) in [
            (StatColumn::OffRating, columns::OFF_RATING),
            (StatColumn::DefRating, columns::DEF_RATING),
            (StatColumn::Pace, columns::PACE),
        ] {
            if advanced.has_column(source) {
                present.insert(column);
            }
        }
    }

    if let Some(home_split) = home_split {
        join_home_split(&mut rows, general.records(), home_split);
        present.extend([
            StatColumn::HomeGames,
            StatColumn::HomeWins,
            StatColumn::AwayGames,
            StatColumn::AwayWins,
        ]);
    }

    if derive_points_allowed(general, &mut rows) {
        present.insert(StatColumn::PointsAllowed);
    }

    MergedTable { rows, present }
}

fn join_advanced(rows: &mut [TeamRow], advanced: &QueryResult) {
    let by_team = advanced.by_team();
    for row in rows.iter_mut() {
        if let Some(record) = by_team.get(row.team.as_str()) {
            row.off_rating = record.number(columns::OFF_RATING);
            row.def_rating = record.number(columns::DEF_RATING);
            row.net_rating = record.number(columns::NET_RATING);
            row.pace = record.number(columns::PACE);
        }
    }
}

fn join_home_split(rows: &mut [TeamRow], general: &[TeamRecord], home_split: &QueryResult) {
    let by_team = home_split.by_team();
    for (row, totals) in rows.iter_mut().zip(general) {
        let home = by_team.get(row.team.as_str());
        let home_games = home.and_then(|r| r.number(columns::GAMES_PLAYED)).unwrap_or(0.0);
        let home_wins = home.and_then(|r| r.number(columns::WINS)).unwrap_or(0.0);

        row.home_games = Some(to_count(home_games));
        row.home_wins = Some(to_count(home_wins));
        row.away_games = Some(away_count(totals.number(columns::GAMES_PLAYED), home_games));
        row.away_wins = Some(away_count(totals.number(columns::WINS), home_wins));
    }
}

/// `max(0, total - home)` as an integer; an unknown total yields zero.
pub fn away_count(total: Option<f64>, home: f64) -> u32 {
    total.map_or(0, |total| to_count(total - home))
}

/// Fills points allowed as `PTS - PLUS_MINUS` when the general query did
/// not report opponent points for any team. This is a heuristic: per-game
/// plus/minus equals the scoring margin. `rows` must be in the order of
/// `general`. Returns whether the column exists afterwards.
pub fn derive_points_allowed(general: &QueryResult, rows: &mut [TeamRow]) -> bool {
    if rows.iter().any(|r| r.points_allowed.is_some()) {
        return true;
    }

    if !general.has_column(columns::POINTS) || !general.has_column(columns::PLUS_MINUS) {
        return false;
    }

    for (row, record) in rows.iter_mut().zip(general.records()) {
        row.points_allowed = match (
            record.number(columns::POINTS),
            record.number(columns::PLUS_MINUS),
        ) {
            (Some(points), Some(plus_minus)) => Some(points - plus_minus),
            _ => None,
        };
    }
    true
}

/// Projects onto `schema`, keeping only columns present after the merge.
pub fn select_and_rename(merged: MergedTable, schema: &[StatColumn]) -> StatsTable {
    let columns = schema
        .iter()
        .copied()
        .filter(|c| merged.present.contains(c))
        .collect();
    StatsTable::new(columns, merged.rows)
}
