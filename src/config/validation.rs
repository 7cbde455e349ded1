use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must use http:// or https://
/// - League id cannot be empty
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(
    api_base_url: &str,
    league_id: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_base_url.trim().is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "API base URL must start with http:// or https:// (got '{api_base_url}')"
        )));
    }

    if league_id.trim().is_empty() {
        return Err(AppError::config_error("League id cannot be empty"));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_defaults() {
        assert!(validate_config("https://stats.nba.com/stats", "00", 30, &None).is_ok());
        assert!(validate_config("http://localhost:8080", "00", 1, &None).is_ok());
    }

    #[test]
    fn test_rejects_empty_or_schemeless_url() {
        assert!(matches!(
            validate_config("", "00", 30, &None),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            validate_config("stats.nba.com", "00", 30, &None),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_zero_timeout_and_blank_league() {
        assert!(validate_config("https://x.test", "00", 0, &None).is_err());
        assert!(validate_config("https://x.test", " ", 30, &None).is_err());
    }

    #[test]
    fn test_log_path_rules() {
        assert!(validate_config("https://x.test", "00", 30, &Some(String::new())).is_err());

        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("stats.log");
        let nested = nested.to_string_lossy().to_string();
        assert!(validate_config("https://x.test", "00", 30, &Some(nested)).is_ok());
        assert!(temp_dir.path().join("a").join("b").exists());
    }
}
