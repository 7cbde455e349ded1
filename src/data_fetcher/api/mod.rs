mod fetch_utils;
pub mod http_client;
mod team_stats_api;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export query functions
pub use team_stats_api::*;
