use crate::cli::Args;
use nba_team_stats::aggregator::{
    PipelineOutcome, StatsTable, advanced_only_view, aggregate_team_stats,
};
use nba_team_stats::config::Config;
use nba_team_stats::constants::display::{ADVANCED_BANNER_WIDTH, FULL_BANNER_WIDTH};
use nba_team_stats::data_fetcher::models::{Season, SeasonType};
use nba_team_stats::display::{DisplayOptions, write_report, write_section_banner};
use nba_team_stats::error::AppError;
use reqwest::Client;
use std::io::Write;
use tracing::info;

const PLAYOFFS_BANNER: &str = "PLAYOFF STATS (when available)";

/// Which of the two views a run prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Full,
    AdvancedOnly,
}

impl View {
    fn title(self, season: &Season, season_type: SeasonType) -> String {
        match self {
            View::Full => format!("NBA team stats {season} - {season_type}"),
            View::AdvancedOnly => format!("NBA advanced stats {season} - {season_type}"),
        }
    }

    fn banner_width(self) -> usize {
        match self {
            View::Full => FULL_BANNER_WIDTH,
            View::AdvancedOnly => ADVANCED_BANNER_WIDTH,
        }
    }
}

/// Runs the view selected by `args` for the regular season and, unless
/// `--regular-only` is given, the playoffs.
///
/// Upstream failures are reported in the output and never returned as
/// errors; only writing to `out` can fail.
pub async fn run<W: Write>(
    out: &mut W,
    args: &Args,
    config: &Config,
    client: &Client,
    season: &Season,
) -> Result<(), AppError> {
    let view = if args.advanced_only {
        View::AdvancedOnly
    } else {
        View::Full
    };
    let options = DisplayOptions { color: !args.plain };

    let regular = fetch_view(out, view, client, config, season, SeasonType::RegularSeason).await?;
    print_outcome(out, view, season, SeasonType::RegularSeason, regular, options)?;

    if args.regular_only {
        info!("Skipping playoffs");
        return Ok(());
    }

    write_section_banner(out, PLAYOFFS_BANNER, ADVANCED_BANNER_WIDTH, options)?;
    let playoffs = fetch_view(out, view, client, config, season, SeasonType::Playoffs).await?;
    print_outcome(out, view, season, SeasonType::Playoffs, playoffs, options)?;

    Ok(())
}

async fn fetch_view<W: Write>(
    out: &mut W,
    view: View,
    client: &Client,
    config: &Config,
    season: &Season,
    season_type: SeasonType,
) -> Result<PipelineOutcome, AppError> {
    writeln!(out, "Fetching statistics for season {season} ({season_type})...")?;
    out.flush()?;

    Ok(match view {
        View::Full => aggregate_team_stats(client, config, season, season_type).await,
        View::AdvancedOnly => advanced_only_view(client, config, season, season_type).await,
    })
}

/// Prints one section. A missing regular season is an error condition for
/// the user; missing playoffs are expected until they start.
fn print_outcome<W: Write>(
    out: &mut W,
    view: View,
    season: &Season,
    season_type: SeasonType,
    outcome: PipelineOutcome,
    options: DisplayOptions,
) -> Result<(), AppError> {
    let title = view.title(season, season_type);

    match (outcome, season_type) {
        (PipelineOutcome::Table { table, warnings }, _) => {
            for warning in &warnings {
                writeln!(out, "⚠️  {warning}")?;
            }
            write_report(out, &title, &table, view.banner_width(), options)?;
        }
        (PipelineOutcome::NoDataYet, SeasonType::Playoffs) => {
            writeln!(out, "\nℹ️  No playoff data available for season {season} yet.")?;
        }
        (PipelineOutcome::Failed { stage, error }, SeasonType::Playoffs) => {
            writeln!(out, "\n⚠️  Could not fetch playoff {stage}: {error}")?;
        }
        (PipelineOutcome::NoDataYet, SeasonType::RegularSeason) => {
            write_report(out, &title, &StatsTable::empty(), view.banner_width(), options)?;
        }
        (PipelineOutcome::Failed { stage, error }, SeasonType::RegularSeason) => {
            writeln!(out, "❌ Error fetching {stage}: {error}")?;
            write_report(out, &title, &StatsTable::empty(), view.banner_width(), options)?;
        }
    }

    out.flush()?;
    Ok(())
}
