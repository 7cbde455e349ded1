//! Joins the per-query team results into one presentation table.
//!
//! The full pipeline pulls three result sets (general, advanced, home split),
//! left-joins them on the team name, derives away games/wins and points
//! allowed, projects onto the output columns that are actually populated,
//! sorts by offensive rating and rounds for display. The advanced-only view
//! is a reduced variant built from the advanced query alone.

pub mod advanced_view;
pub mod merge;
pub mod outcome;
pub mod pipeline;
pub mod table;

pub use advanced_view::{ADVANCED_VIEW_SCHEMA, advanced_only_view, build_advanced_table};
pub use merge::{MergedTable, TEAM_STATS_SCHEMA, derive_points_allowed, merge, select_and_rename};
pub use outcome::{Degradation, FetchOutcome, PipelineOutcome, Stage};
pub use pipeline::{aggregate_team_stats, build_team_table, check_home_split, classify};
pub use table::{Cell, ColumnKind, StatColumn, StatsTable, TeamRow};
