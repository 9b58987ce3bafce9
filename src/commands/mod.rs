//! CLI command implementations.

pub mod check;
pub mod run;
pub mod schedule;

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{CvdwClient, SupabaseClient};
use crate::services::{SyncOptions, Synchronizer};

/// Wire the concrete API and store clients into a sync service.
pub(crate) fn build_synchronizer(
    config: &Config,
    max_pages: Option<u64>,
) -> AppResult<Synchronizer> {
    let source = Arc::new(CvdwClient::new(config)?);
    let store = Arc::new(SupabaseClient::new(config)?);
    let options = SyncOptions::from_config(config).with_max_pages(max_pages);
    Ok(Synchronizer::new(source, store, options))
}
