mod app;
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use nba_team_stats::config::Config;
use nba_team_stats::data_fetcher::api::create_http_client_with_timeout;
use nba_team_stats::error::AppError;
use std::io::stdout;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting: {e}");
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), AppError> {
    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let (log_file_path, _guard) = logging::setup_logging(args, &config).await?;
    info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        commands::handle_list_config(&config);
        return Ok(());
    }

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let season = commands::current_season(args);
    info!("Selected season {season}");

    let mut out = stdout().lock();
    app::run(&mut out, args, &config, &client, &season).await
}
