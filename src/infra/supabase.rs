//! Supabase (PostgREST) client - the broker record destination.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::config::Config;
use crate::domain::Broker;
use crate::errors::{AppError, AppResult};

use super::http;

/// Destination store for broker records.
///
/// Injected into the sync service as a trait object so tests can substitute
/// the remote database with a mock.
#[async_trait]
pub trait BrokerStore: Send + Sync {
    /// Upsert one batch of records into `table`.
    async fn upsert_batch(&self, table: &str, records: &[Broker]) -> AppResult<()>;
}

/// PostgREST client for a Supabase project.
///
/// Writes go through `POST /rest/v1/{table}` with merge-duplicates upsert
/// semantics. Batches are written once, with no automatic retry; a rejected
/// batch surfaces as a store error.
pub struct SupabaseClient {
    http: Client,
    base_url: String,
}

impl SupabaseClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let key = HeaderValue::from_str(config.supabase_key())
            .map_err(|_| AppError::config("SUPABASE_KEY contains invalid header characters"))?;
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.supabase_key()))
            .map_err(|_| AppError::config("SUPABASE_KEY contains invalid header characters"))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(
            "Prefer",
            HeaderValue::from_static("resolution=merge-duplicates,return=minimal"),
        );

        Ok(Self {
            http: http::build_client(headers)?,
            base_url: config.supabase_url().to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[async_trait]
impl BrokerStore for SupabaseClient {
    async fn upsert_batch(&self, table: &str, records: &[Broker]) -> AppResult<()> {
        let response = self
            .http
            .post(self.table_url(table))
            .json(records)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::store(format!(
                "HTTP {status} upserting {count} row(s) into {table}: {detail}",
                count = records.len()
            )));
        }

        Ok(())
    }
}
