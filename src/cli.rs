use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use nba_team_stats::data_fetcher::models::Season;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NBA team statistics
///
/// Fetches per-game team statistics from the NBA stats service and prints
/// one table per season type: offensive and defensive rating, pace, points
/// scored and allowed, and home/away games and wins.
///
/// Without arguments the current season's regular season is shown first,
/// followed by the playoffs when they have started.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Season to show in YYYY-YY format, e.g. 2024-25.
    /// Defaults to the season in progress (a new season starts in October).
    #[arg(long = "season", short = 's', value_name = "YYYY-YY")]
    pub season: Option<Season>,

    /// Show only defensive rating, net rating and pace, sorted by net rating.
    #[arg(long = "advanced-only", short = 'a', help_heading = "Display Options")]
    pub advanced_only: bool,

    /// Skip the playoffs section.
    #[arg(long = "regular-only", help_heading = "Display Options")]
    pub regular_only: bool,

    /// Disable colors in the output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror log output to stderr in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
