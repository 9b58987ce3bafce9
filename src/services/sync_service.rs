//! Sync service - fetches broker records page by page and writes them to the
//! destination store in batches.
//!
//! The service depends only on the [`BrokerSource`] and [`BrokerStore`]
//! traits, never on concrete clients, so the whole pipeline runs against
//! mocks in tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{Config, PAGE_FETCH_PAUSE_MS};
use crate::errors::{AppError, AppResult};
use crate::infra::{BrokerSource, BrokerStore};

/// Tuning knobs for one sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Destination table name
    pub table: String,
    /// Rows per upsert batch
    pub batch_size: usize,
    /// Pause between consecutive page fetches
    pub page_pause: Duration,
    /// Optional cap on pages fetched (smoke runs)
    pub max_pages: Option<u64>,
}

impl SyncOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            table: config.table.clone(),
            batch_size: config.batch_size,
            page_pause: Duration::from_millis(PAGE_FETCH_PAUSE_MS),
            max_pages: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: Option<u64>) -> Self {
        self.max_pages = max_pages;
        self
    }
}

/// Outcome of one completed sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Pages fetched from the source
    pub pages: u64,
    /// Records fetched across all pages
    pub fetched: usize,
    /// Records successfully written
    pub written: usize,
    /// Batches rejected by the store
    pub failed_batches: usize,
}

/// Sync service trait for dependency injection.
#[async_trait]
pub trait SyncService: Send + Sync {
    /// Run one full sync: fetch every page, then upsert in batches.
    async fn run(&self) -> AppResult<SyncReport>;
}

/// Concrete sync pipeline over injected source and store clients.
pub struct Synchronizer {
    source: Arc<dyn BrokerSource>,
    store: Arc<dyn BrokerStore>,
    options: SyncOptions,
}

impl Synchronizer {
    pub fn new(
        source: Arc<dyn BrokerSource>,
        store: Arc<dyn BrokerStore>,
        options: SyncOptions,
    ) -> Self {
        Self {
            source,
            store,
            options,
        }
    }
}

#[async_trait]
impl SyncService for Synchronizer {
    async fn run(&self) -> AppResult<SyncReport> {
        tracing::info!(table = %self.options.table, "Starting broker sync");

        let first = self.source.fetch_page(1).await?;
        let mut total_pages = first.total_pages.max(1);
        if let Some(max) = self.options.max_pages {
            total_pages = total_pages.min(max.max(1));
        }
        tracing::info!(total_pages, "Fetched first page");

        let mut records = first.records;
        for page in 2..=total_pages {
            tokio::time::sleep(self.options.page_pause).await;
            tracing::debug!(page, total_pages, "Fetching page");
            let next = self.source.fetch_page(page).await?;
            records.extend(next.records);
        }

        let fetched = records.len();
        let batch_size = self.options.batch_size.max(1);
        let mut written = 0usize;
        let mut failed_batches = 0usize;

        for (index, batch) in records.chunks(batch_size).enumerate() {
            match self.store.upsert_batch(&self.options.table, batch).await {
                Ok(()) => {
                    written += batch.len();
                    tracing::debug!(batch = index + 1, rows = batch.len(), "Batch upserted");
                }
                Err(e) => {
                    failed_batches += 1;
                    tracing::error!(batch = index + 1, error = %e, "Batch upsert failed");
                }
            }
        }

        let report = SyncReport {
            pages: total_pages,
            fetched,
            written,
            failed_batches,
        };

        if report.failed_batches > 0 {
            tracing::warn!(
                fetched = report.fetched,
                written = report.written,
                failed_batches = report.failed_batches,
                "Sync finished with rejected batches"
            );
            return Err(AppError::store(format!(
                "{} batch(es) rejected while writing {} of {} record(s)",
                report.failed_batches, report.written, report.fetched
            )));
        }

        tracing::info!(
            pages = report.pages,
            fetched = report.fetched,
            written = report.written,
            "Sync complete"
        );
        Ok(report)
    }
}
