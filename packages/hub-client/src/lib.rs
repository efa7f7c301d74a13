//! REST API client for the OpenSource Hub backend.
//!
//! A small read-only client for the hub's resource listing API. It builds
//! the request URL for a category plus optional search and tag filters,
//! performs the GET, and parses the JSON array of resources. The write API
//! (`POST /api/{category}`) is exercised by contributors directly and is
//! not wrapped here.
//!
//! # Example
//!
//! ```rust,ignore
//! use hub_client::{BackendConfig, Category, HubClient, ResourceQuery};
//!
//! let client = HubClient::new(BackendConfig::from_env());
//!
//! let query = ResourceQuery::new(Category::Datasets);
//! let datasets = client.resources(&query).await?;
//! for dataset in &datasets {
//!     println!("{}", dataset.display_name());
//! }
//! ```

pub mod config;
pub mod error;
pub mod types;

pub use config::BackendConfig;
pub use error::{ApiError, Result};
pub use types::{Category, Resource, ResourceQuery};

use url::Url;

/// Client for the hub's resource listing API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HubClient {
    client: reqwest::Client,
    base_url: String,
}

impl HubClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.into_base_url(),
        }
    }

    /// Base address requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request URL for a query: `{base}/api/{category}`, with
    /// `q` and `tag` parameters appended only when non-empty.
    pub fn resources_url(&self, query: &ResourceQuery) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/api/{}",
            self.base_url,
            query.category.api_segment()
        ))?;
        if query.has_filters() {
            let mut params = url.query_pairs_mut();
            if !query.query.is_empty() {
                params.append_pair("q", &query.query);
            }
            if !query.tag.is_empty() {
                params.append_pair("tag", &query.tag);
            }
        }
        Ok(url)
    }

    /// Fetch the resources matching a query.
    ///
    /// Non-success responses become [`ApiError::Status`]; a body that is
    /// not a JSON array of resources becomes [`ApiError::Decode`].
    pub async fn resources(&self, query: &ResourceQuery) -> Result<Vec<Resource>> {
        let url = self.resources_url(query)?;
        tracing::debug!(%url, "Fetching resources");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let items: Vec<Resource> = serde_json::from_str(&body)?;
        tracing::debug!(
            count = items.len(),
            category = %query.category,
            "Fetched resources"
        );
        Ok(items)
    }
}
