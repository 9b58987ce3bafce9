//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Source API (CVDW)
// =============================================================================

/// Default base URL of the CVDW API
pub const DEFAULT_API_BASE_URL: &str = "https://coelho.cvcrm.com.br/api/v1/cvdw";

/// Default account email sent alongside the API token
pub const DEFAULT_API_EMAIL: &str = "thiago.almeida@citz.co";

/// Records requested per API page
pub const DEFAULT_PAGE_SIZE: u64 = 500;

/// Pause between consecutive page fetches in milliseconds
pub const PAGE_FETCH_PAUSE_MS: u64 = 1000;

// =============================================================================
// Destination (Supabase / PostgREST)
// =============================================================================

/// Default destination table for broker records
pub const DEFAULT_SYNC_TABLE: &str = "d_Corretores";

/// Rows written per upsert batch
pub const DEFAULT_BATCH_SIZE: usize = 100;

// =============================================================================
// HTTP transport
// =============================================================================

/// TCP connect timeout in seconds
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Full request timeout in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Total fetch attempts per page request (first try plus retries)
pub const MAX_FETCH_ATTEMPTS: usize = 3;

/// Multiplier applied to the exponential backoff base delay, in milliseconds.
/// Produces roughly 1s, 2s, 4s between attempts.
pub const RETRY_DELAY_FACTOR_MS: u64 = 500;

/// Status codes worth retrying (throttling and transient server failures)
pub const RETRYABLE_STATUS_CODES: &[u16] = &[408, 429, 500, 502, 503, 504];

// =============================================================================
// Scheduling
// =============================================================================

/// Default cron schedule: daily at 06:00 UTC (sec min hour dom mon dow)
pub const DEFAULT_SYNC_SCHEDULE: &str = "0 0 6 * * *";

/// Worker name registered with the job monitor
pub const SYNC_WORKER_NAME: &str = "daily-broker-sync";

// =============================================================================
// Environment variable names
// =============================================================================

/// CVDW API access token (required)
pub const ENV_API_TOKEN: &str = "API_TOKEN";

/// Supabase project endpoint URL (required)
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";

/// Supabase service key (required)
pub const ENV_SUPABASE_KEY: &str = "SUPABASE_KEY";
