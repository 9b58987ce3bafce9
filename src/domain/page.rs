//! Pagination envelope for the CVDW API.

use serde::{Deserialize, Serialize};

use super::Broker;

/// Request body sent with every page fetch.
#[derive(Debug, Clone, Serialize)]
pub struct PageRequest {
    #[serde(rename = "pagina")]
    pub page: u64,
    #[serde(rename = "registros_por_pagina")]
    pub records_per_page: u64,
}

/// One page of broker records as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerPage {
    /// Total page count reported by the API; absent means a single page.
    #[serde(rename = "total_de_paginas", default = "single_page")]
    pub total_pages: u64,
    #[serde(rename = "dados")]
    pub records: Vec<Broker>,
}

fn single_page() -> u64 {
    1
}
