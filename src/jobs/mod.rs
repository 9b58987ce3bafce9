//! Background jobs: the scheduled sync trigger.

mod sync_job;

pub use sync_job::{sync_job_handler, SyncContext, SyncTick};
