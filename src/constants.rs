//! Application-wide constants and configuration values
//!
//! This module centralizes the upstream parameters, defaults and display
//! widths used across the crate.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Base URL of the public NBA stats service
pub const DEFAULT_API_BASE_URL: &str = "https://stats.nba.com/stats";

/// League identifier for the NBA
pub const NBA_LEAGUE_ID: &str = "00";

/// Endpoint serving per-team dashboard statistics
pub const TEAM_STATS_ENDPOINT: &str = "leaguedashteamstats";

/// Environment variables that override config file values
pub mod env_vars {
    pub const API_URL: &str = "NBA_STATS_API_URL";
    pub const LOG_FILE: &str = "NBA_STATS_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "NBA_STATS_HTTP_TIMEOUT";
}

/// Browser-like request headers. The stats service drops requests that
/// look like bare HTTP clients.
pub mod request_headers {
    pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
    pub const ACCEPT: &str = "application/json, text/plain, */*";
    pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
    pub const ORIGIN: &str = "https://www.nba.com";
    pub const REFERER: &str = "https://www.nba.com/";
}

/// Upstream column names of the `leaguedashteamstats` result set
pub mod columns {
    pub const TEAM_NAME: &str = "TEAM_NAME";
    pub const GAMES_PLAYED: &str = "GP";
    pub const WINS: &str = "W";
    pub const POINTS: &str = "PTS";
    pub const OPPONENT_POINTS: &str = "OPP_PTS";
    pub const PLUS_MINUS: &str = "PLUS_MINUS";
    pub const OFF_RATING: &str = "OFF_RATING";
    pub const DEF_RATING: &str = "DEF_RATING";
    pub const NET_RATING: &str = "NET_RATING";
    pub const PACE: &str = "PACE";
}

/// Console layout constants
pub mod display {
    /// Width of the banner around the full team table
    pub const FULL_BANNER_WIDTH: usize = 120;

    /// Width of the banner around the advanced-only table
    pub const ADVANCED_BANNER_WIDTH: usize = 60;

    /// Spaces between two table columns
    pub const COLUMN_GAP: usize = 2;
}

/// Month (1-12) in which a new NBA season starts for default season detection
pub const SEASON_START_MONTH: u32 = 10;
