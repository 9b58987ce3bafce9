//! Shared HTTP transport: client construction and retry policy.
//!
//! Every outbound client gets the same timeouts; page fetches additionally
//! go through exponential backoff with jitter for transient failures.

use std::future::Future;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Client;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::RetryIf;

use crate::config::{
    HTTP_CONNECT_TIMEOUT_SECS, HTTP_REQUEST_TIMEOUT_SECS, MAX_FETCH_ATTEMPTS,
    RETRY_DELAY_FACTOR_MS,
};
use crate::errors::{AppError, AppResult};

/// Build a reqwest client with the service-wide timeouts and a fixed set of
/// default headers.
pub(crate) fn build_client(headers: HeaderMap) -> AppResult<Client> {
    Client::builder()
        .default_headers(headers)
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(AppError::from)
}

/// Run `operation` with exponential backoff, retrying only transient errors.
///
/// Delays are roughly 1s, 2s with jitter; at most [`MAX_FETCH_ATTEMPTS`]
/// attempts total. The last error propagates unchanged.
pub(crate) async fn with_retry<F, Fut, T>(operation: F) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let strategy = ExponentialBackoff::from_millis(2)
        .factor(RETRY_DELAY_FACTOR_MS)
        .map(jitter)
        .take(MAX_FETCH_ATTEMPTS - 1);

    RetryIf::spawn(strategy, operation, AppError::is_transient).await
}
