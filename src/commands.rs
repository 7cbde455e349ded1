use crate::cli::Args;
use chrono::{Local, NaiveDate};
use nba_team_stats::config::Config;
use nba_team_stats::data_fetcher::models::Season;

/// Handles the --list-config command.
///
/// Prints the effective configuration, after environment overrides.
pub fn handle_list_config(config: &Config) {
    config.display();
}

/// Season to query: the `--season` argument, or the season in progress on
/// `today`.
pub fn resolve_season(args: &Args, today: NaiveDate) -> Season {
    args.season
        .clone()
        .unwrap_or_else(|| Season::containing(today))
}

/// Season to query, using the local date as "today".
pub fn current_season(args: &Args) -> Season {
    resolve_season(args, Local::now().date_naive())
}
