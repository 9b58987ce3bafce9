//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// cvdw-sync - Daily sync of CVDW broker records into Supabase
#[derive(Parser, Debug)]
#[command(name = "cvdw-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one sync immediately (manual trigger)
    Run(RunArgs),

    /// Start the cron worker that fires the sync on schedule
    Schedule(ScheduleArgs),

    /// Validate configuration and the cron expression, then exit
    Check,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Cap the number of pages fetched (useful for smoke runs)
    #[arg(long)]
    pub max_pages: Option<u64>,
}

/// Arguments for the schedule command
#[derive(Parser, Debug)]
pub struct ScheduleArgs {
    /// Cron expression override (sec min hour dom mon dow)
    #[arg(long)]
    pub cron: Option<String>,
}
