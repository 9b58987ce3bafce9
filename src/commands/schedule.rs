//! Schedule command - cron worker for the daily sync.
//!
//! Builds an apalis worker backed by a cron stream and runs it under a
//! monitor until Ctrl+C.

use std::str::FromStr;
use std::sync::Arc;

use apalis::prelude::*;
use apalis_cron::{CronStream, Schedule};

use crate::cli::ScheduleArgs;
use crate::config::{Config, SYNC_WORKER_NAME};
use crate::errors::{AppError, AppResult};
use crate::jobs::{sync_job_handler, SyncContext};

/// Execute the schedule command
pub async fn execute(args: ScheduleArgs, config: Config) -> AppResult<()> {
    let cron_expr = args.cron.unwrap_or_else(|| config.schedule.clone());
    let schedule = Schedule::from_str(&cron_expr)
        .map_err(|e| AppError::config(format!("Invalid cron expression '{cron_expr}': {e}")))?;

    let service = super::build_synchronizer(&config, None)?;
    let ctx = Arc::new(SyncContext::new(Arc::new(service)));

    tracing::info!(schedule = %cron_expr, "Sync scheduler started. Press Ctrl+C to stop.");

    let worker = WorkerBuilder::new(SYNC_WORKER_NAME)
        .data(ctx)
        .backend(CronStream::new(schedule))
        .build_fn(sync_job_handler);

    // Run with graceful shutdown on Ctrl+C
    let monitor = Monitor::new().register(worker);

    tokio::select! {
        result = monitor.run() => {
            if let Err(e) = result {
                tracing::error!("Scheduler error: {}", e);
                return Err(AppError::job(format!("Scheduler failed: {}", e)));
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping scheduler...");
        }
    }

    tracing::info!("Sync scheduler stopped.");
    Ok(())
}
