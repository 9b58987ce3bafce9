//! Application settings loaded from environment variables.

use std::env;

use crate::errors::{AppError, AppResult};

use super::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_EMAIL, DEFAULT_BATCH_SIZE, DEFAULT_PAGE_SIZE,
    DEFAULT_SYNC_SCHEDULE, DEFAULT_SYNC_TABLE, ENV_API_TOKEN, ENV_SUPABASE_KEY, ENV_SUPABASE_URL,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    api_token: String,
    pub api_email: String,
    pub api_base_url: String,
    supabase_url: String,
    supabase_key: String,
    pub table: String,
    pub schedule: String,
    pub records_per_page: u64,
    pub batch_size: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"[REDACTED]")
            .field("api_email", &self.api_email)
            .field("api_base_url", &self.api_base_url)
            .field("supabase_url", &"[REDACTED]")
            .field("supabase_key", &"[REDACTED]")
            .field("table", &self.table)
            .field("schedule", &self.schedule)
            .field("records_per_page", &self.records_per_page)
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails with a configuration error naming every required variable that
    /// is missing or empty, before any network activity happens.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let mut missing = Vec::new();
        let mut require = |key: &'static str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let api_token = require(ENV_API_TOKEN);
        let supabase_url = require(ENV_SUPABASE_URL);
        let supabase_key = require(ENV_SUPABASE_KEY);

        if !missing.is_empty() {
            return Err(AppError::config(format!(
                "required environment variables missing or empty: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            api_token,
            api_email: lookup("API_EMAIL").unwrap_or_else(|| DEFAULT_API_EMAIL.to_string()),
            api_base_url: lookup("API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_key,
            table: lookup("SYNC_TABLE").unwrap_or_else(|| DEFAULT_SYNC_TABLE.to_string()),
            schedule: lookup("SYNC_SCHEDULE").unwrap_or_else(|| DEFAULT_SYNC_SCHEDULE.to_string()),
            records_per_page: lookup("SYNC_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            batch_size: lookup("SYNC_BATCH_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_BATCH_SIZE),
        })
    }

    /// CVDW API token for the `token` request header.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Supabase project endpoint, without trailing slash.
    pub fn supabase_url(&self) -> &str {
        &self.supabase_url
    }

    /// Supabase service key for `apikey`/`Authorization` headers.
    pub fn supabase_key(&self) -> &str {
        &self.supabase_key
    }
}
