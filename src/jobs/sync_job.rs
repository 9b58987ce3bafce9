//! Scheduled sync job.
//!
//! A cron tick hands control to [`SyncContext::trigger`], which holds a
//! per-process lock for the duration of the run. A tick (or manual trigger)
//! arriving while a run is in flight is skipped, never queued, so two runs
//! can never write to the destination concurrently.

use std::sync::Arc;

use apalis::prelude::Data;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::errors::{AppError, AppResult};
use crate::services::{SyncReport, SyncService};

/// One firing of the cron schedule.
#[derive(Debug, Clone)]
pub struct SyncTick(DateTime<Utc>);

impl SyncTick {
    pub fn fired_at(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for SyncTick {
    fn from(fired_at: DateTime<Utc>) -> Self {
        SyncTick(fired_at)
    }
}

/// Shared state for the scheduled worker: the sync service plus the
/// overlap lock.
pub struct SyncContext {
    service: Arc<dyn SyncService>,
    lock: Mutex<()>,
}

impl SyncContext {
    pub fn new(service: Arc<dyn SyncService>) -> Self {
        Self {
            service,
            lock: Mutex::new(()),
        }
    }

    /// Run one sync unless another run already holds the lock.
    ///
    /// Returns `Ok(None)` when the trigger was skipped due to overlap.
    pub async fn trigger(&self) -> AppResult<Option<SyncReport>> {
        let Ok(_guard) = self.lock.try_lock() else {
            tracing::warn!("Sync already in progress, skipping trigger");
            return Ok(None);
        };

        self.service.run().await.map(Some)
    }
}

/// Handler invoked by the cron worker on every schedule tick.
pub async fn sync_job_handler(
    tick: SyncTick,
    ctx: Data<Arc<SyncContext>>,
) -> Result<(), AppError> {
    tracing::info!(fired_at = %tick.fired_at(), "Scheduled sync fired");

    match ctx.trigger().await? {
        Some(report) => {
            tracing::info!(
                pages = report.pages,
                written = report.written,
                "Scheduled sync finished"
            );
        }
        None => tracing::warn!("Previous run still active, tick skipped"),
    }

    Ok(())
}
