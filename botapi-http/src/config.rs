//! Transport config: bot token, API URL, request timeout and log file.
//! Loaded from env vars BOT_TOKEN, TELEGRAM_API_URL, BOT_API_TIMEOUT_SECS, LOG_FILE.

use std::env;
use std::time::Duration;

use botapi_core::{BotApiError, Result};

use crate::mask::mask_token;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct HttpConfig {
    pub bot_token: String,
    /// Custom API server (e.g. a local Bot API server); `None` uses [`DEFAULT_API_URL`].
    pub api_url: Option<String>,
    /// Whole-request timeout. Must exceed any long-polling `timeout` sent to getUpdates.
    pub timeout_secs: u64,
    pub log_file: Option<String>,
}

impl HttpConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .map_err(|_| BotApiError::Config("BOT_TOKEN not set".to_string()))?,
        };
        let api_url = env::var("TELEGRAM_API_URL").ok();
        let timeout_secs = env::var("BOT_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let log_file = env::var("LOG_FILE").ok();

        let config = Self {
            bot_token,
            api_url,
            timeout_secs,
            log_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Same as [`HttpConfig::load`] without a token override.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Uses the given token; everything else at defaults.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            api_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_file: None,
        }
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Token must be non-empty; api_url must parse as a URL if set.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            return Err(BotApiError::Config("bot token is empty".to_string()));
        }
        if let Some(ref url_str) = self.api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(BotApiError::Config(format!(
                    "TELEGRAM_API_URL is set but not a valid URL: {}",
                    url_str
                )));
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConfig")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_file", &self.log_file)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["BOT_TOKEN", "TELEGRAM_API_URL", "BOT_API_TIMEOUT_SECS", "LOG_FILE"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_with_token() {
        let config = HttpConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.api_url.is_none());
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.log_file.is_none());
    }

    #[test]
    #[serial]
    fn test_load_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");

        let config = HttpConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "env_token");
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_with_custom_values_and_override() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("TELEGRAM_API_URL", "http://localhost:8081");
        env::set_var("BOT_API_TIMEOUT_SECS", "75");
        env::set_var("LOG_FILE", "logs/botapi.log");

        let config = HttpConfig::load(Some("cli_token".to_string())).unwrap();
        assert_eq!(config.bot_token, "cli_token");
        assert_eq!(config.api_url(), "http://localhost:8081");
        assert_eq!(config.timeout_secs, 75);
        assert_eq!(config.log_file.as_deref(), Some("logs/botapi.log"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_without_token_fails() {
        clear_env();
        let err = HttpConfig::from_env().unwrap_err();
        assert!(matches!(err, BotApiError::Config(_)));
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_url() {
        clear_env();
        env::set_var("BOT_TOKEN", "t");
        env::set_var("TELEGRAM_API_URL", "not a url");
        assert!(HttpConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_debug_masks_token() {
        let token = "123456789:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw";
        let debug = format!("{:?}", HttpConfig::with_token(token.to_string()));
        assert!(debug.contains("1234567***Dsaw"));
        assert!(!debug.contains(token));
        assert!(debug.contains("timeout_secs: 30"));
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        assert!(HttpConfig::with_token("  ".to_string()).validate().is_err());
    }
}
