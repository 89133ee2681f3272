//! Seeder config: endpoint, count, bio mode, password, timeouts. Loaded from env, CLI overrides on top.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, SeedError};
use crate::generate::BioMode;
use crate::names::{DEFAULT_PASSWORD, NAMES};

pub const DEFAULT_ENDPOINT: &str = "https://pickme-back.ga:8083/api/accounts";
pub const DEFAULT_COUNT: usize = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Values given on the command line; `None` falls back to env.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub count: Option<usize>,
    pub password: Option<String>,
    pub bio_mode: Option<BioMode>,
    /// `Some(false)` switches fail-fast off even when SEED_FAIL_FAST=1.
    pub fail_fast: Option<bool>,
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// SEED_ACCOUNTS_URL
    pub endpoint: String,
    /// SEED_ACCOUNTS_COUNT
    pub count: usize,
    /// SEED_ACCOUNTS_PASSWORD
    pub password: String,
    /// SEED_BIO_MODE
    pub bio_mode: BioMode,
    /// SEED_REQUEST_TIMEOUT_SECS
    pub request_timeout_secs: u64,
    /// SEED_FAIL_FAST; stop at the first rejected or failed registration
    pub fail_fast: bool,
    /// Print payloads instead of sending them (CLI only)
    pub dry_run: bool,
    /// LOG_FILE; logs are teed here when set
    pub log_file: Option<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            count: DEFAULT_COUNT,
            password: DEFAULT_PASSWORD.to_string(),
            bio_mode: BioMode::default(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            fail_fast: false,
            dry_run: false,
            log_file: None,
        }
    }
}

impl SeedConfig {
    /// Load from environment variables, then apply `overrides`. Load `.env` before calling.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let endpoint = overrides
            .url
            .or_else(|| env::var("SEED_ACCOUNTS_URL").ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let count = match overrides.count {
            Some(n) => n,
            None => env_parse("SEED_ACCOUNTS_COUNT")?.unwrap_or(DEFAULT_COUNT),
        };
        let password = overrides
            .password
            .or_else(|| env::var("SEED_ACCOUNTS_PASSWORD").ok())
            .unwrap_or_else(|| DEFAULT_PASSWORD.to_string());
        let bio_mode = match overrides.bio_mode {
            Some(mode) => mode,
            None => env_parse("SEED_BIO_MODE")?.unwrap_or_default(),
        };
        let request_timeout_secs =
            env_parse("SEED_REQUEST_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let fail_fast = overrides
            .fail_fast
            .unwrap_or_else(|| env_flag("SEED_FAIL_FAST"));
        let log_file = env::var("LOG_FILE").ok().filter(|s| !s.trim().is_empty());

        Ok(Self {
            endpoint,
            count,
            password,
            bio_mode,
            request_timeout_secs,
            fail_fast,
            dry_run: overrides.dry_run,
            log_file,
        })
    }

    /// Validate config: endpoint must be a URL, count must fit the name list,
    /// password must satisfy the server's 8..=20 length rule.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.endpoint).is_err() {
            return Err(SeedError::Config(format!(
                "SEED_ACCOUNTS_URL is not a valid URL: {}",
                self.endpoint
            )));
        }
        if self.count > NAMES.len() {
            return Err(SeedError::Config(format!(
                "count {} exceeds the {} available names",
                self.count,
                NAMES.len()
            )));
        }
        let password_len = self.password.chars().count();
        if !(8..=20).contains(&password_len) {
            return Err(SeedError::Config(format!(
                "SEED_ACCOUNTS_PASSWORD must be 8 to 20 characters, got {}",
                password_len
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(SeedError::Config(
                "SEED_REQUEST_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Parses `key` if set; a set-but-unparsable value is a config error.
fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SeedError::Config(format!("{} has an invalid value: {}", key, raw))),
        Err(_) => Ok(None),
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[cfg(test)]
mod config_test;
