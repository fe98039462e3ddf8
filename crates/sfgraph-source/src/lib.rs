//! # sfgraph-source
//!
//! Open-data HTTP client and record normalization for sfgraph.
//!
//! Fetches permit rows from a Socrata-style resource endpoint with a status
//! filter and row limit, then maps them to [`Restaurant`] records.
//!
//! [`Restaurant`]: sfgraph_core::entities::Restaurant

pub mod normalize;
pub mod record;

mod error;

pub use error::SourceError;
pub use normalize::{normalize, normalize_all};
pub use record::{RawLocation, RawRecord, parse_records};

use sfgraph_config::SourceConfig;
use sfgraph_http::check_response;

/// HTTP client for the open-data resource endpoint.
pub struct SourceClient {
    http: reqwest::Client,
    endpoint: String,
    limit: u32,
    where_clause: String,
}

impl SourceClient {
    /// Create a client for the configured endpoint, limit and status filter.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("sfgraph/0.1")
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("reqwest client should build"),
            endpoint: config.endpoint.clone(),
            limit: config.limit,
            where_clause: config.where_clause(),
        }
    }

    /// Full request URL including the `$limit` and `$where` parameters.
    #[must_use]
    pub fn request_url(&self) -> String {
        format!(
            "{}?$limit={}&$where={}",
            self.endpoint,
            self.limit,
            urlencoding::encode(&self.where_clause)
        )
    }

    /// Fetch raw rows, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the HTTP request fails, the API returns a
    /// non-success status, or the body is not a JSON array.
    pub async fn fetch_records(&self) -> Result<Vec<RawRecord>, SourceError> {
        let url = self.request_url();
        tracing::debug!(%url, "fetching source rows");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        let mut records = parse_records(&body)?;
        records.truncate(self.limit as usize);
        Ok(records)
    }

    /// Fetch raw rows, degrading to an empty list on any failure.
    ///
    /// This is the policy the scrape stage runs with: an unreachable or
    /// misbehaving upstream yields zero records, which downstream stages
    /// accept as a valid (if degenerate) batch.
    pub async fn fetch_or_empty(&self) -> Vec<RawRecord> {
        self.fetch_records().await.unwrap_or_else(|error| {
            tracing::warn!(endpoint = %self.endpoint, %error, "source fetch failed; continuing with no records");
            Vec::new()
        })
    }
}
