//! Test utilities for building upstream result sets

use serde_json::{Value, json};
use std::collections::HashMap;

use crate::data_fetcher::models::{QueryResult, TeamRecord};

/// Builds a query result from headers and rows. The first cell of every
/// row is the team name.
pub fn query_result(headers: &[&str], rows: Vec<Vec<Value>>) -> QueryResult {
    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let records = rows
        .into_iter()
        .map(|row| {
            let team = row
                .first()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let values: HashMap<String, Value> = headers.iter().cloned().zip(row).collect();
            TeamRecord::new(team, values)
        })
        .collect();
    QueryResult::new(headers, records)
}

/// Builds a `leaguedashteamstats` response body as the service sends it.
pub fn stats_response_body(headers: &[&str], rows: Vec<Vec<Value>>) -> Value {
    json!({
        "resource": "leaguedashteamstats",
        "parameters": {},
        "resultSets": [{
            "name": "LeagueDashTeamStats",
            "headers": headers,
            "rowSet": rows,
        }]
    })
}

/// Mock data for the three queries of the full pipeline
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Per-game base stats for three teams. Team A has 40 games and 25 wins.
    pub fn general_body() -> Value {
        stats_response_body(
            &["TEAM_ID", "TEAM_NAME", "GP", "W", "L", "PTS", "PLUS_MINUS"],
            vec![
                vec![json!(1), json!("Team A"), json!(40), json!(25), json!(15), json!(110.0), json!(3.5)],
                vec![json!(2), json!("Team B"), json!(41), json!(30), json!(11), json!(117.46), json!(8.2)],
                vec![json!(3), json!("Team C"), json!(40), json!(12), json!(28), json!(104.9), json!(-7.1)],
            ],
        )
    }

    /// Ratings and pace for the same three teams.
    pub fn advanced_body() -> Value {
        stats_response_body(
            &["TEAM_ID", "TEAM_NAME", "OFF_RATING", "DEF_RATING", "NET_RATING", "PACE"],
            vec![
                vec![json!(1), json!("Team A"), json!(113.2), json!(110.1), json!(3.1), json!(98.64)],
                vec![json!(2), json!("Team B"), json!(118.73), json!(110.4), json!(8.3), json!(99.9)],
                vec![json!(3), json!("Team C"), json!(108.0), json!(115.2), json!(-7.2), json!(97.31)],
            ],
        )
    }

    /// Home games and wins. Team A played 20 home games and won 15.
    pub fn home_split_body() -> Value {
        stats_response_body(
            &["TEAM_ID", "TEAM_NAME", "GP", "W"],
            vec![
                vec![json!(1), json!("Team A"), json!(20), json!(15)],
                vec![json!(2), json!("Team B"), json!(21), json!(17)],
                vec![json!(3), json!("Team C"), json!(20), json!(8)],
            ],
        )
    }

    /// Structurally valid response without any team rows.
    pub fn empty_body() -> Value {
        stats_response_body(&["TEAM_ID", "TEAM_NAME", "GP", "W"], vec![])
    }
}
