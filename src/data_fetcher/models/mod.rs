pub mod query;
pub mod result_set;

pub use query::{Location, MeasureType, PerMode, Season, SeasonType, TeamStatsQuery};
pub use result_set::{QueryResult, ResultSet, StatsResponse, TeamRecord};
