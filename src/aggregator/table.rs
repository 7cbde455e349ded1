//! Presentation table: team rows, the optional output columns, sorting and rounding

use std::cmp::Ordering;

/// Output columns in presentation vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatColumn {
    Team,
    OffRating,
    DefRating,
    NetRating,
    Pace,
    PointsPerGame,
    PointsAllowed,
    HomeGames,
    HomeWins,
    AwayGames,
    AwayWins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Float,
    Integer,
}

impl StatColumn {
    /// Header shown above the column
    pub fn label(self) -> &'static str {
        match self {
            StatColumn::Team => "team",
            StatColumn::OffRating => "offRating",
            StatColumn::DefRating => "defRating",
            StatColumn::NetRating => "netRating",
            StatColumn::Pace => "pace",
            StatColumn::PointsPerGame => "pointsPerGame",
            StatColumn::PointsAllowed => "pointsAllowed",
            StatColumn::HomeGames => "homeGames",
            StatColumn::HomeWins => "homeWins",
            StatColumn::AwayGames => "awayGames",
            StatColumn::AwayWins => "awayWins",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            StatColumn::Team => ColumnKind::Text,
            StatColumn::OffRating
            | StatColumn::DefRating
            | StatColumn::NetRating
            | StatColumn::Pace
            | StatColumn::PointsPerGame
            | StatColumn::PointsAllowed => ColumnKind::Float,
            StatColumn::HomeGames
            | StatColumn::HomeWins
            | StatColumn::AwayGames
            | StatColumn::AwayWins => ColumnKind::Integer,
        }
    }
}

/// One cell as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Float(f64),
    Integer(u32),
    Empty,
}

/// One team after merging. Unset fields are stats the sources did not provide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamRow {
    pub team: String,
    pub off_rating: Option<f64>,
    pub def_rating: Option<f64>,
    pub net_rating: Option<f64>,
    pub pace: Option<f64>,
    pub points_per_game: Option<f64>,
    pub points_allowed: Option<f64>,
    pub home_games: Option<u32>,
    pub home_wins: Option<u32>,
    pub away_games: Option<u32>,
    pub away_wins: Option<u32>,
}

impl TeamRow {
    pub fn new(team: impl Into<String>) -> Self {
        TeamRow {
            team: team.into(),
            ..TeamRow::default()
        }
    }

    pub fn cell(&self, column: StatColumn) -> Cell<'_> {
        let float = |v: Option<f64>| v.map_or(Cell::Empty, Cell::Float);
        let integer = |v: Option<u32>| v.map_or(Cell::Empty, Cell::Integer);

        match column {
            StatColumn::Team => Cell::Text(&self.team),
            StatColumn::OffRating => float(self.off_rating),
            StatColumn::DefRating => float(self.def_rating),
            StatColumn::NetRating => float(self.net_rating),
            StatColumn::Pace => float(self.pace),
            StatColumn::PointsPerGame => float(self.points_per_game),
            StatColumn::PointsAllowed => float(self.points_allowed),
            StatColumn::HomeGames => integer(self.home_games),
            StatColumn::HomeWins => integer(self.home_wins),
            StatColumn::AwayGames => integer(self.away_games),
            StatColumn::AwayWins => integer(self.away_wins),
        }
    }

    /// Numeric value of a column for sorting. Text columns have none.
    pub fn metric(&self, column: StatColumn) -> Option<f64> {
        match self.cell(column) {
            Cell::Float(v) => Some(v),
            Cell::Integer(v) => Some(f64::from(v)),
            Cell::Text(_) | Cell::Empty => None,
        }
    }

    fn float_fields_mut(&mut self) -> [&mut Option<f64>; 6] {
        [
            &mut self.off_rating,
            &mut self.def_rating,
            &mut self.net_rating,
            &mut self.pace,
            &mut self.points_per_game,
            &mut self.points_allowed,
        ]
    }
}

/// Rounds to one decimal place. Ties go to the even digit, so 116.25 becomes
/// 116.2 and 2.75 becomes 2.8.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Ordered rows plus the columns that are actually populated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsTable {
    columns: Vec<StatColumn>,
    rows: Vec<TeamRow>,
}

impl StatsTable {
    pub fn new(columns: Vec<StatColumn>, rows: Vec<TeamRow>) -> Self {
        StatsTable { columns, rows }
    }

    pub fn empty() -> Self {
        StatsTable::default()
    }

    pub fn columns(&self) -> &[StatColumn] {
        &self.columns
    }

    pub fn rows(&self) -> &[TeamRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, column: StatColumn) -> bool {
        self.columns.contains(&column)
    }

    /// Stable sort, highest first. Rows without a value go last and ties
    /// keep their upstream order. Returns `false` without touching the rows
    /// when the key column is not part of the table.
    pub fn sort_descending(&mut self, key: StatColumn) -> bool {
        if !self.has_column(key) {
            return false;
        }

        self.rows
            .sort_by(|a, b| match (a.metric(key), b.metric(key)) {
                (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        true
    }

    /// Rounds every float column to one decimal; integer columns stay exact.
    pub fn round_for_display(&mut self) {
        for row in &mut self.rows {
            for field in row.float_fields_mut() {
                if let Some(v) = field.as_mut() {
                    *v = round_one_decimal(*v);
                }
            }
        }
    }
}
