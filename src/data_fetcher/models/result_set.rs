//! Tabular result sets returned by the stats service

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::constants::columns;

/// Top-level response of the dashboard endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub result_sets: Vec<ResultSet>,
}

/// One named table: column headers plus rows of loosely typed cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    pub row_set: Vec<Vec<Value>>,
}

/// One team's partial record from a single query, keyed by upstream column name.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub team_name: String,
    values: HashMap<String, Value>,
}

impl TeamRecord {
    pub fn new(team_name: impl Into<String>, values: HashMap<String, Value>) -> Self {
        TeamRecord {
            team_name: team_name.into(),
            values,
        }
    }

    /// Numeric cell value. Null, missing and non-numeric cells are `None`.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.values
            .get(column)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
    }
}

/// Ordered team records of one query. Team names are unique; the first
/// occurrence wins when the service repeats a team.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    headers: Vec<String>,
    records: Vec<TeamRecord>,
}

impl QueryResult {
    pub fn new(headers: Vec<String>, records: Vec<TeamRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|record| {
                let first = seen.insert(record.team_name.clone());
                if !first {
                    warn!("Dropping duplicate row for team '{}'", record.team_name);
                }
                first
            })
            .collect();

        QueryResult { headers, records }
    }

    /// Converts a raw result set. Fails only when the set has no team
    /// name column; rows without a team name are skipped.
    pub fn from_result_set(set: ResultSet) -> Result<Self, String> {
        let team_index = set
            .headers
            .iter()
            .position(|h| h == columns::TEAM_NAME)
            .ok_or_else(|| {
                format!(
                    "result set '{}' has no {} column",
                    set.name,
                    columns::TEAM_NAME
                )
            })?;

        let mut records = Vec::with_capacity(set.row_set.len());
        for row in set.row_set {
            let Some(team_name) = row.get(team_index).and_then(Value::as_str) else {
                warn!("Skipping row without a team name in '{}'", set.name);
                continue;
            };
            let team_name = team_name.to_string();
            let values = set
                .headers
                .iter()
                .cloned()
                .zip(row)
                .collect::<HashMap<_, _>>();
            records.push(TeamRecord::new(team_name, values));
        }

        Ok(QueryResult::new(set.headers, records))
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    pub fn records(&self) -> &[TeamRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Lookup table for left joins on the team name.
    pub fn by_team(&self) -> HashMap<&str, &TeamRecord> {
        self.records
            .iter()
            .map(|r| (r.team_name.as_str(), r))
            .collect()
    }
}
