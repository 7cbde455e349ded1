//! Explicit results of the fetch stages and of whole pipeline runs

use std::fmt;

use super::table::StatsTable;
use crate::error::AppError;

/// Upstream query a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    General,
    Advanced,
    HomeSplit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::General => "general stats",
            Stage::Advanced => "advanced stats",
            Stage::HomeSplit => "home/away stats",
        })
    }
}

/// Result of one fetch stage after its fault policy has been applied.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Ready(T),
    /// Optional source failed; the pipeline continues without it.
    Degraded { stage: Stage, error: AppError },
    /// Required source failed; the pipeline stops.
    Fatal { stage: Stage, error: AppError },
}

/// Warning attached to a table built without one of the optional sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    pub stage: Stage,
    pub reason: String,
}

impl Degradation {
    pub fn new(stage: Stage, error: &AppError) -> Self {
        Degradation {
            stage,
            reason: error.to_string(),
        }
    }
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not fetch {}: {}", self.stage, self.reason)
    }
}

/// Result of a pipeline run. `NoDataYet` is a valid but empty answer from
/// the service, e.g. playoffs that have not started; `Failed` is an error.
#[derive(Debug)]
pub enum PipelineOutcome {
    Table {
        table: StatsTable,
        warnings: Vec<Degradation>,
    },
    NoDataYet,
    Failed {
        stage: Stage,
        error: AppError,
    },
}

impl PipelineOutcome {
    /// The table, or an empty one when the run produced no data.
    pub fn into_table(self) -> StatsTable {
        match self {
            PipelineOutcome::Table { table, .. } => table,
            PipelineOutcome::NoDataYet | PipelineOutcome::Failed { .. } => StatsTable::empty(),
        }
    }

    pub fn warnings(&self) -> &[Degradation] {
        match self {
            PipelineOutcome::Table { warnings, .. } => warnings,
            PipelineOutcome::NoDataYet | PipelineOutcome::Failed { .. } => &[],
        }
    }
}
