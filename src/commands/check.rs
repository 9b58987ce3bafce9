//! Check command - validate configuration without touching the network.

use std::str::FromStr;

use apalis_cron::Schedule;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Execute the check command
pub async fn execute(config: Config) -> AppResult<()> {
    Schedule::from_str(&config.schedule).map_err(|e| {
        AppError::config(format!(
            "Invalid cron expression '{}': {e}",
            config.schedule
        ))
    })?;

    println!("{config:#?}");
    println!("Configuration OK");
    Ok(())
}
