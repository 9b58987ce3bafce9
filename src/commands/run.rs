//! Run command - manual sync trigger.
//!
//! Performs exactly one sync invocation; the outcome surfaces only through
//! the process exit status. No automatic retry of a failed run.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::services::SyncService;

/// Execute the run command
pub async fn execute(args: RunArgs, config: Config) -> AppResult<()> {
    let service = super::build_synchronizer(&config, args.max_pages)?;

    let report = service.run().await?;
    tracing::info!(
        pages = report.pages,
        fetched = report.fetched,
        written = report.written,
        "Manual sync finished"
    );

    Ok(())
}
