//! Search request client

use super::model::{decode_results, ImageRecord};
use super::transport::{describe_target, Transport};
use crate::config::ApiConfig;
use crate::error::{SnapError, SnapResult};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Results requested per search. Only the first page is ever fetched.
pub const PER_PAGE: u32 = 30;

/// Issues keyword searches against one endpoint with one credential
#[derive(Clone)]
pub struct SearchClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    client_id: String,
}

impl SearchClient {
    /// Create a client for the configured endpoint and credential
    pub fn new(transport: Arc<dyn Transport>, api: &ApiConfig) -> Self {
        Self {
            transport,
            base_url: api.base_url.clone(),
            client_id: api.client_id.clone(),
        }
    }

    /// The transport this client issues requests through
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    /// Build the request URL for a query
    pub fn request_url(&self, query: &str) -> SnapResult<Url> {
        if query.trim().is_empty() {
            return Err(SnapError::InvalidRequest("query is empty".to_string()));
        }

        let per_page = PER_PAGE.to_string();
        Url::parse_with_params(
            &self.base_url,
            [
                ("client_id", self.client_id.as_str()),
                ("query", query),
                ("per_page", per_page.as_str()),
            ],
        )
        .map_err(|e| SnapError::InvalidRequest(format!("{}: {}", self.base_url, e)))
    }

    /// Fetch the first page of results for a query, in server order
    pub async fn fetch(&self, query: &str) -> SnapResult<Vec<ImageRecord>> {
        let url = self.request_url(query)?;
        let target = describe_target(&url);

        let body = self.transport.get(&url).await?;
        if body.is_empty() {
            return Err(SnapError::EmptyResponse(target));
        }

        let records = decode_results(&body)?;
        debug!("Search '{}' returned {} result(s)", query, records.len());
        Ok(records)
    }
}
