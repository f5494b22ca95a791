//! Pagination wire types and query descriptors

use crate::error::{Error, Result};
use crate::http::RequestConfig;
use serde::Deserialize;
use serde_json::Value;

/// Provider-reported page counts
///
/// Display hints only. The provider reports these inconsistently, so they are
/// never used to validate page integrity or detect truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Number of results the provider claims to return per page
    pub results_per_page: Option<u32>,
    /// Total result count the provider claims for the whole query
    pub total_results: Option<u32>,
}

/// One raw page as returned by the provider's list endpoints
///
/// `items` is `Option` on purpose: the provider is known to omit the field
/// entirely on otherwise successful responses, and that case must stay
/// distinguishable from a genuine empty page (`items: []`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPage {
    /// Resource kind, e.g. `youtube#playlistListResponse`
    pub kind: Option<String>,
    /// Response etag
    pub etag: Option<String>,
    /// Raw records of this page, absent on contract-violating responses
    pub items: Option<Vec<Value>>,
    /// Token for the previous page, absent on the first page
    pub prev_page_token: Option<String>,
    /// Token for the next page, absent on the last page
    pub next_page_token: Option<String>,
    /// Advisory counts
    pub page_info: Option<PageInfo>,
}

impl RawPage {
    /// Return the page's records, or a likely-bug error if `items` is absent
    ///
    /// A 200 response with no `items` field violates the documented list
    /// contract. It is surfaced as [`Error::LikelyBug`] rather than being
    /// silently treated as an empty page.
    pub fn items_or_likely_bug(&self, endpoint: &str) -> Result<&[Value]> {
        match &self.items {
            Some(items) => Ok(items),
            None => Err(Error::likely_bug(format!(
                "successful '{endpoint}' list response carries no 'items' field"
            ))),
        }
    }

    /// Advisory results-per-page count, if reported
    pub fn results_per_page(&self) -> Option<u32> {
        self.page_info.and_then(|info| info.results_per_page)
    }

    /// Advisory total result count, if reported
    pub fn total_results(&self) -> Option<u32> {
        self.page_info.and_then(|info| info.total_results)
    }
}

/// Immutable descriptor of a list query
///
/// Captures the endpoint path and the original filter parameters with the
/// page token excluded. Re-fetching any page re-supplies exactly these
/// parameters, so pagination always stays within the original query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Endpoint path relative to the API base, e.g. `playlists`
    pub path: String,
    /// Original query parameters (filters, IDs, parts), token excluded
    pub params: Vec<(String, String)>,
}

impl PageRequest {
    /// Create a descriptor for the given endpoint path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Add a query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Build the transport request for one page of this query
    ///
    /// The original parameters are re-supplied verbatim; only `pageToken`
    /// varies between pages.
    pub(crate) fn to_request_config(&self, token: Option<&str>) -> RequestConfig {
        let mut config = RequestConfig::new();
        for (key, value) in &self.params {
            config = config.query(key.clone(), value.clone());
        }
        if let Some(token) = token {
            config = config.query("pageToken", token);
        }
        config
    }
}
