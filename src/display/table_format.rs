//! Fixed-width text rendering of a stats table

use unicode_width::UnicodeWidthStr;

use crate::aggregator::{Cell, ColumnKind, StatsTable};
use crate::constants::display::COLUMN_GAP;

/// Text of one cell. Floats show one decimal, unset cells are blank.
pub fn format_cell(cell: Cell<'_>) -> String {
    match cell {
        Cell::Text(text) => text.to_string(),
        Cell::Float(value) => format!("{value:.1}"),
        Cell::Integer(value) => value.to_string(),
        Cell::Empty => String::new(),
    }
}

fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(fill))
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn center(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    let left = fill / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
}

/// Renders the header line and one line per row, without a row index.
/// Headers are centered, team names left-aligned and numbers right-aligned.
/// Returns the header line separately so callers can style it.
pub fn render_lines(table: &StatsTable) -> (String, Vec<String>) {
    let columns = table.columns();
    let cells: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| columns.iter().map(|c| format_cell(row.cell(*c))).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(column.label().width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let gap = " ".repeat(COLUMN_GAP);

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| center(column.label(), *width))
        .collect::<Vec<_>>()
        .join(&gap);

    let lines = cells
        .iter()
        .map(|row| {
            row.iter()
                .zip(columns.iter().zip(&widths))
                .map(|(text, (column, width))| match column.kind() {
                    ColumnKind::Text => pad_right(text, *width),
                    ColumnKind::Float | ColumnKind::Integer => pad_left(text, *width),
                })
                .collect::<Vec<_>>()
                .join(&gap)
                .trim_end()
                .to_string()
        })
        .collect();

    (header.trim_end().to_string(), lines)
}

/// Renders the whole table as plain text, one line per team.
pub fn render_table(table: &StatsTable) -> String {
    let (header, lines) = render_lines(table);
    let mut out = String::with_capacity((lines.len() + 1) * (header.len() + 1));
    out.push_str(&header);
    out.push('\n');
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{StatColumn, TeamRow};

    fn sample_table() -> StatsTable {
        StatsTable::new(
            vec![StatColumn::Team, StatColumn::OffRating, StatColumn::HomeGames],
            vec![
                TeamRow {
                    off_rating: Some(119.9),
                    home_games: Some(41),
                    ..TeamRow::new("Oklahoma City Thunder")
                },
                TeamRow {
                    off_rating: None,
                    home_games: Some(7),
                    ..TeamRow::new("Utah Jazz")
                },
            ],
        )
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(Cell::Float(110.0)), "110.0");
        assert_eq!(format_cell(Cell::Float(-3.5)), "-3.5");
        assert_eq!(format_cell(Cell::Integer(20)), "20");
        assert_eq!(format_cell(Cell::Text("Team A")), "Team A");
        assert_eq!(format_cell(Cell::Empty), "");
    }

    #[test]
    fn test_render_table_contains_every_row_and_column() {
        let text = render_table(&sample_table());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("team"));
        assert!(lines[0].contains("offRating"));
        assert!(lines[0].contains("homeGames"));
        assert!(lines[1].starts_with("Oklahoma City Thunder"));
        assert!(lines[1].contains("119.9"));
        assert!(lines[1].ends_with("41"));
        assert!(lines[2].starts_with("Utah Jazz"));
        assert!(lines[2].ends_with(" 7"));
    }

    #[test]
    fn test_columns_are_aligned() {
        let (header, lines) = render_lines(&sample_table());
        let width = "Oklahoma City Thunder".len();

        // header cell for the team column is centered within the widest name
        assert!(header.starts_with(&center("team", width)));
        // both rows place the home games column at the same right edge
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_center_splits_padding() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("abcdef", 3), "abcdef");
    }
}
