//! CVDW API client - the broker record source.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;

use crate::config::Config;
use crate::domain::{BrokerPage, PageRequest};
use crate::errors::{AppError, AppResult};

use super::http;

/// Source of paginated broker records.
///
/// The sync service only ever talks to this trait, so the remote API can be
/// substituted in tests.
#[async_trait]
pub trait BrokerSource: Send + Sync {
    /// Fetch one page of broker records (1-indexed).
    async fn fetch_page(&self, page: u64) -> AppResult<BrokerPage>;
}

/// CVDW REST client.
///
/// Authentication rides on the `email` and `token` headers; the API expects
/// the page selector as a JSON body on a GET request.
pub struct CvdwClient {
    http: Client,
    endpoint: String,
    records_per_page: u64,
}

impl CvdwClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "email",
            HeaderValue::from_str(&config.api_email)
                .map_err(|_| AppError::config("API_EMAIL contains invalid header characters"))?,
        );
        let mut token = HeaderValue::from_str(config.api_token())
            .map_err(|_| AppError::config("API_TOKEN contains invalid header characters"))?;
        token.set_sensitive(true);
        headers.insert("token", token);

        Ok(Self {
            http: http::build_client(headers)?,
            endpoint: format!("{}/corretores", config.api_base_url.trim_end_matches('/')),
            records_per_page: config.records_per_page,
        })
    }
}

#[async_trait]
impl BrokerSource for CvdwClient {
    async fn fetch_page(&self, page: u64) -> AppResult<BrokerPage> {
        let body = PageRequest {
            page,
            records_per_page: self.records_per_page,
        };

        http::with_retry(|| {
            let request = self.http.get(&self.endpoint).json(&body);
            let url = self.endpoint.clone();
            async move {
                let response = request.send().await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(AppError::HttpStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                response.json::<BrokerPage>().await.map_err(AppError::from)
            }
        })
        .await
    }
}
