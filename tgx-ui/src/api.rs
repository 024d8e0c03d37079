//! Recommendation client backed by the browser's `fetch`.

use crate::js_bridge;
use tgx_core::destination::RawDestination;
use tgx_core::error::Result;
use tgx_core::query::TripQuery;
use tgx_core::results::parse_recommendations;
use tgx_core::submission::RecommendClient;

/// Posts queries to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }
}

impl RecommendClient for FetchClient {
    async fn recommend(&self, query: &TripQuery) -> Result<Vec<RawDestination>> {
        let body = query.to_json()?;
        let text = js_bridge::post_json(&self.endpoint, &body).await?;
        parse_recommendations(&text)
    }
}
