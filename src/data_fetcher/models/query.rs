//! Query parameters for the team dashboard endpoint

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::constants::SEASON_START_MONTH;
use crate::error::AppError;

/// Which games contribute to the aggregated stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonType {
    RegularSeason,
    Playoffs,
}

impl SeasonType {
    /// Value of the `SeasonType` query parameter
    pub fn as_param(self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureType {
    Base,
    Advanced,
}

impl MeasureType {
    pub fn as_param(self) -> &'static str {
        match self {
            MeasureType::Base => "Base",
            MeasureType::Advanced => "Advanced",
        }
    }
}

/// Per-mode normalization of the returned numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerMode {
    PerGame,
    Per100Possessions,
}

impl PerMode {
    pub fn as_param(self) -> &'static str {
        match self {
            PerMode::PerGame => "PerGame",
            PerMode::Per100Possessions => "Per100Possessions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Home,
}

impl Location {
    pub fn as_param(self) -> &'static str {
        match self {
            Location::Home => "Home",
        }
    }
}

/// Season identifier in the `YYYY-YY` form the stats service expects,
/// e.g. `2024-25`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season(String);

impl Season {
    /// Parses and validates a season string. The two-digit suffix must be
    /// the year following the start year.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let value = value.trim();
        let (start, end) = value
            .split_once('-')
            .ok_or_else(|| AppError::invalid_season(value))?;

        if start.len() != 4 || end.len() != 2 {
            return Err(AppError::invalid_season(value));
        }

        let start_year: u32 = start.parse().map_err(|_| AppError::invalid_season(value))?;
        let end_year: u32 = end.parse().map_err(|_| AppError::invalid_season(value))?;

        if (start_year + 1) % 100 != end_year {
            return Err(AppError::invalid_season(value));
        }

        Ok(Season(value.to_string()))
    }

    /// Builds the season a given start year opens, e.g. 2024 -> `2024-25`.
    pub fn starting_in(year: i32) -> Self {
        Season(format!("{year}-{:02}", (year + 1).rem_euclid(100)))
    }

    /// Season in progress (or most recently finished) on the given date.
    /// A new season starts in October; the off-season still belongs to the
    /// season that just ended.
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= SEASON_START_MONTH {
            Self::starting_in(date.year())
        } else {
            Self::starting_in(date.year() - 1)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::parse(s)
    }
}

/// One request against the team dashboard endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStatsQuery {
    pub measure_type: MeasureType,
    pub per_mode: PerMode,
    pub season: Season,
    pub season_type: SeasonType,
    pub location: Option<Location>,
}

impl TeamStatsQuery {
    /// Per-game base stats: points, wins, games played, plus/minus.
    pub fn general(season: &Season, season_type: SeasonType) -> Self {
        TeamStatsQuery {
            measure_type: MeasureType::Base,
            per_mode: PerMode::PerGame,
            season: season.clone(),
            season_type,
            location: None,
        }
    }

    /// Possession-normalized ratings and pace.
    pub fn advanced(season: &Season, season_type: SeasonType) -> Self {
        TeamStatsQuery {
            measure_type: MeasureType::Advanced,
            per_mode: PerMode::Per100Possessions,
            season: season.clone(),
            season_type,
            location: None,
        }
    }

    /// Base stats restricted to home games.
    pub fn home_split(season: &Season, season_type: SeasonType) -> Self {
        TeamStatsQuery {
            location: Some(Location::Home),
            ..Self::general(season, season_type)
        }
    }
}
