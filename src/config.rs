use std::env;
use std::time::Duration;

use crate::errors::AppError;

pub const DEFAULT_API_URL: &str = "https://api.httpsms.com/v1/messages/send";
pub const DEFAULT_FROM: &str = "+254703222614";
pub const DEFAULT_TO: &str = "+254718497275";
pub const DEFAULT_CONTENT: &str = "This is a sample text message";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub api_url: String,
    pub from_number: String,
    pub to_number: String,
    pub content: String,
    /// Raw `HTTPSMS_TIMEOUT_SECS`; parsed by [`AppConfig::timeout`].
    pub timeout_secs: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("HTTPSMS_API_KEY").unwrap_or_default(),
            api_url: env::var("HTTPSMS_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            from_number: env::var("HTTPSMS_FROM").unwrap_or_else(|_| DEFAULT_FROM.to_string()),
            to_number: env::var("HTTPSMS_TO").unwrap_or_else(|_| DEFAULT_TO.to_string()),
            content: env::var("HTTPSMS_CONTENT").unwrap_or_else(|_| DEFAULT_CONTENT.to_string()),
            timeout_secs: env::var("HTTPSMS_TIMEOUT_SECS")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    /// `None` means no timeout. Zero or non-numeric values are rejected.
    pub fn timeout(&self) -> Result<Option<Duration>, AppError> {
        let Some(raw) = self.timeout_secs.as_deref() else {
            return Ok(None);
        };

        let secs: u64 = raw.trim().parse().map_err(|_| {
            AppError::Config(format!(
                "HTTPSMS_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"
            ))
        })?;
        if secs == 0 {
            return Err(AppError::Config(
                "HTTPSMS_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(Some(Duration::from_secs(secs)))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::Config("HTTPSMS_API_KEY must be set".to_string()));
        }
        if self.api_url.trim().is_empty() {
            return Err(AppError::Config("HTTPSMS_URL must not be empty".to_string()));
        }
        self.timeout()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    const VARS: [&str; 6] = [
        "HTTPSMS_API_KEY",
        "HTTPSMS_URL",
        "HTTPSMS_FROM",
        "HTTPSMS_TO",
        "HTTPSMS_CONTENT",
        "HTTPSMS_TIMEOUT_SECS",
    ];

    // Process environment is shared across test threads
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn config_with_key(key: &str) -> AppConfig {
        AppConfig {
            api_key: key.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            from_number: DEFAULT_FROM.to_string(),
            to_number: DEFAULT_TO.to_string(),
            content: DEFAULT_CONTENT.to_string(),
            timeout_secs: None,
        }
    }

    #[test]
    fn test_validate_accepts_key() {
        assert!(config_with_key("uk_test").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        let err = config_with_key("  ").validate().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_from_env_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config = AppConfig::from_env();
        assert_eq!(config.api_key, "");
        assert_eq!(config.api_url, "https://api.httpsms.com/v1/messages/send");
        assert_eq!(config.from_number, "+254703222614");
        assert_eq!(config.to_number, "+254718497275");
        assert_eq!(config.content, "This is a sample text message");
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.timeout().unwrap(), None);
    }

    #[test]
    fn test_from_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("HTTPSMS_API_KEY", "uk_from_env");
        env::set_var("HTTPSMS_URL", "http://127.0.0.1:9999/v1/messages/send");
        env::set_var("HTTPSMS_FROM", "+15551234567");
        env::set_var("HTTPSMS_TO", "+15559999999");
        env::set_var("HTTPSMS_CONTENT", "Your order has shipped");
        env::set_var("HTTPSMS_TIMEOUT_SECS", "30");

        let config = AppConfig::from_env();
        clear_env();

        assert_eq!(config.api_key, "uk_from_env");
        assert_eq!(config.api_url, "http://127.0.0.1:9999/v1/messages/send");
        assert_eq!(config.from_number, "+15551234567");
        assert_eq!(config.to_number, "+15559999999");
        assert_eq!(config.content, "Your order has shipped");
        assert_eq!(config.timeout().unwrap(), Some(Duration::from_secs(30)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_env_rejects_bad_timeout() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        for raw in ["abc", "0", "-5", "1.5"] {
            clear_env();
            env::set_var("HTTPSMS_API_KEY", "uk_from_env");
            env::set_var("HTTPSMS_TIMEOUT_SECS", raw);

            let config = AppConfig::from_env();
            assert!(
                matches!(config.timeout(), Err(AppError::Config(_))),
                "timeout {raw:?} should be rejected"
            );
            assert!(
                matches!(config.validate(), Err(AppError::Config(_))),
                "validate should reject timeout {raw:?}"
            );
        }
        clear_env();
    }

    #[test]
    fn test_from_env_blank_timeout_means_none() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("HTTPSMS_TIMEOUT_SECS", "   ");

        let config = AppConfig::from_env();
        clear_env();

        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.timeout().unwrap(), None);
    }
}
