//! Console output: banners around each table and the table itself

pub mod table_format;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Write};

use crate::aggregator::StatsTable;
pub use table_format::{format_cell, render_lines, render_table};

const BANNER_COLOR: Color = Color::Cyan;

/// Output settings shared by every section of one run.
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    /// Emit ANSI colors. Off for `--plain`.
    pub color: bool,
}

fn write_styled<W: Write>(
    out: &mut W,
    text: &str,
    color: Color,
    options: DisplayOptions,
) -> io::Result<()> {
    if options.color {
        queue!(
            out,
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold),
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\n")
        )
    } else {
        queue!(out, Print(text), Print("\n"))
    }
}

/// A line made of `ch` repeated `width` times.
pub fn banner(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Writes a titled table framed by `=` banners. An empty table prints a
/// "no data" line instead.
pub fn write_report<W: Write>(
    out: &mut W,
    title: &str,
    table: &StatsTable,
    width: usize,
    options: DisplayOptions,
) -> io::Result<()> {
    if table.is_empty() {
        queue!(out, Print("No data found.\n"))?;
        return out.flush();
    }

    let rule = banner('=', width);
    queue!(out, Print("\n"))?;
    write_styled(out, &rule, BANNER_COLOR, options)?;
    write_styled(out, &title.to_uppercase(), BANNER_COLOR, options)?;
    write_styled(out, &rule, BANNER_COLOR, options)?;

    let (header, lines) = render_lines(table);
    write_styled(out, &header, BANNER_COLOR, options)?;
    for line in lines {
        queue!(out, Print(line), Print("\n"))?;
    }

    write_styled(out, &rule, BANNER_COLOR, options)?;
    queue!(out, Print("\n"))?;
    out.flush()
}

/// Writes a `#` banner that separates the playoffs section from the rest.
pub fn write_section_banner<W: Write>(
    out: &mut W,
    title: &str,
    width: usize,
    options: DisplayOptions,
) -> io::Result<()> {
    let rule = banner('#', width);
    queue!(out, Print("\n"))?;
    write_styled(out, &rule, BANNER_COLOR, options)?;
    write_styled(out, title, BANNER_COLOR, options)?;
    write_styled(out, &rule, BANNER_COLOR, options)?;
    out.flush()
}
