use anyhow::{Context, Error, Result};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::models::retry::RetryConfig;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_max_retry_attempts")]
    pub max_retry_attempts: u32,
    #[serde(default = "default_initial_retry_delay_ms")]
    pub initial_retry_delay_ms: u64,

    pub mailgun_api_key: Option<String>,
    pub twilio_api_key: Option<String>,
    pub push_api_key: Option<String>,

    #[serde(default)]
    pub log_json: bool,
}

fn default_max_retry_attempts() -> u32 {
    3
}

fn default_initial_retry_delay_ms() -> u64 {
    1000
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>().context("Invalid environmental variable")?;
        Ok(config)
    }

    pub fn retry_config(&self) -> Result<RetryConfig, Error> {
        RetryConfig::from_millis(self.max_retry_attempts, self.initial_retry_delay_ms)
            .context("MAX_RETRY_ATTEMPTS must be at least 1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        envy::from_iter(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string()))).unwrap()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = from_pairs(&[]);

        assert_eq!(config.max_retry_attempts, 3);
        assert_eq!(config.initial_retry_delay_ms, 1000);
        assert!(config.mailgun_api_key.is_none());
        assert!(!config.log_json);
    }

    #[test]
    fn reads_uppercase_keys() {
        let config = from_pairs(&[
            ("MAX_RETRY_ATTEMPTS", "5"),
            ("INITIAL_RETRY_DELAY_MS", "250"),
            ("TWILIO_API_KEY", "tw-key"),
            ("LOG_JSON", "true"),
        ]);

        let retry = config.retry_config().unwrap();
        assert_eq!(retry.max_attempts(), 5);
        assert_eq!(retry.base_delay().as_millis(), 250);
        assert_eq!(config.twilio_api_key.as_deref(), Some("tw-key"));
        assert!(config.log_json);
    }

    #[test]
    fn zero_attempts_is_a_config_error() {
        let config = from_pairs(&[("MAX_RETRY_ATTEMPTS", "0")]);
        assert!(config.retry_config().is_err());
    }
}
