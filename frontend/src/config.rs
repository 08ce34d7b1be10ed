//! Build-time configuration for the budgeting client.

use tracing::Level;

const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
const TOKEN_KEY: &str = "access_token";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token_key: TOKEN_KEY.to_string(),
        }
    }

    /// Reads `BUDGET_API_BASE` at compile time, falling back to the local backend.
    pub fn from_env() -> Self {
        Self::new(option_env!("BUDGET_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Max console log level, taken from `BUDGET_LOG` at compile time.
pub fn log_level() -> Level {
    parse_level(option_env!("BUDGET_LOG").unwrap_or("info"))
}

fn parse_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slashes() {
        let config = ApiConfig::new("http://example.test/api/");
        assert_eq!(config.base_url, "http://example.test/api");
        assert_eq!(config.url("/home"), "http://example.test/api/home");
        assert_eq!(config.url("jwt/refresh"), "http://example.test/api/jwt/refresh");
    }

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.url("home"), "http://localhost:8080/api/home");
        assert_eq!(config.token_key, "access_token");
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }
}
