//! cvdw-sync - Scheduled sync of CVDW broker records into Supabase
//!
//! Pulls paginated broker ("corretor") records from the CVDW REST API and
//! upserts them into a Supabase table, either once on demand or on a daily
//! cron schedule.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Broker records and pagination envelopes
//! - **services**: The sync pipeline (fetch, coerce, batch, upsert)
//! - **infra**: HTTP transport and the API/store clients
//! - **jobs**: The scheduled sync trigger and its overlap lock
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run one sync now
//! cargo run -- run
//!
//! # Start the daily cron worker
//! cargo run -- schedule
//!
//! # Validate configuration
//! cargo run -- check
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod jobs;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Broker, BrokerPage};
pub use errors::{AppError, AppResult};
pub use services::{SyncOptions, SyncReport, SyncService, Synchronizer};
