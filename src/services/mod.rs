//! Application services - the sync pipeline.

mod sync_service;

pub use sync_service::{SyncOptions, SyncReport, SyncService, Synchronizer};
