//! Page container and fetch protocol
//!
//! [`Paginated`] is an immutable snapshot of one page. Its page-fetch
//! capability is a [`PageSource`] behind an `Arc`: an object holding the
//! original query descriptor and re-dispatching it with a new token. Nothing
//! here retries or spawns work; a fetch is one awaited transport round trip.

use super::types::{PageRequest, RawPage};
use crate::entities::FromRaw;
use crate::error::Result;
use crate::http::HttpClient;
use crate::logging::Logger;
use async_trait::async_trait;
use futures::Stream;
use std::marker::PhantomData;
use std::sync::Arc;

/// Capability to fetch an arbitrary page of one specific query
///
/// `token: None` fetches the query's first page. Implementations must run the
/// full validate → convert → wrap sequence on every fetch; a successful
/// transport call is never trusted to imply a well-formed page.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Fetch the page identified by `token`, or the first page for `None`
    async fn fetch_page(self: Arc<Self>, token: Option<String>) -> Result<Paginated<T>>;
}

/// An immutable snapshot of one page of a paginated query
///
/// Traversal never mutates a snapshot; [`Paginated::go_to_page`] and friends
/// return fresh instances. Safe to share across tasks: all state is immutable
/// and the fetch capability is behind an `Arc`.
pub struct Paginated<T> {
    data: T,
    prev_token: Option<String>,
    next_token: Option<String>,
    results_per_page: Option<u32>,
    total_results: Option<u32>,
    source: Arc<dyn PageSource<T>>,
}

impl<T> Paginated<T> {
    /// Construct a snapshot from its parts
    pub fn new(
        data: T,
        prev_token: Option<String>,
        next_token: Option<String>,
        results_per_page: Option<u32>,
        total_results: Option<u32>,
        source: Arc<dyn PageSource<T>>,
    ) -> Self {
        Self {
            data,
            prev_token,
            next_token,
            results_per_page,
            total_results,
            source,
        }
    }

    /// The current page's payload
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consume the snapshot, yielding the payload
    pub fn into_data(self) -> T {
        self.data
    }

    /// Token for the previous page; `None` means there is no prior page
    pub fn prev_token(&self) -> Option<&str> {
        self.prev_token.as_deref()
    }

    /// Token for the next page; `None` means this is the last page
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Whether a next page exists
    pub fn has_next(&self) -> bool {
        self.next_token.is_some()
    }

    /// Whether a previous page exists
    pub fn has_prev(&self) -> bool {
        self.prev_token.is_some()
    }

    /// Provider-reported results per page (advisory, may be absent or wrong)
    pub fn results_per_page(&self) -> Option<u32> {
        self.results_per_page
    }

    /// Provider-reported total results (advisory, may be absent or wrong)
    pub fn total_results(&self) -> Option<u32> {
        self.total_results
    }

    /// Fetch the page identified by an explicit token
    ///
    /// Re-runs the original query with the given token and the same filters,
    /// returning a fresh snapshot. This snapshot is left untouched.
    pub async fn go_to_page(&self, token: &str) -> Result<Paginated<T>> {
        Arc::clone(&self.source)
            .fetch_page(Some(token.to_string()))
            .await
    }

    /// Fetch the next page, or `Ok(None)` if this is the last page
    ///
    /// The provider signals "no more pages" by omitting the token, not with
    /// an error; the absent-token case issues no request.
    pub async fn next_page(&self) -> Result<Option<Paginated<T>>> {
        match &self.next_token {
            Some(token) => Ok(Some(self.go_to_page(token).await?)),
            None => Ok(None),
        }
    }

    /// Fetch the previous page, or `Ok(None)` if there is no prior page
    pub async fn prev_page(&self) -> Result<Option<Paginated<T>>> {
        match &self.prev_token {
            Some(token) => Ok(Some(self.go_to_page(token).await?)),
            None => Ok(None),
        }
    }

    /// Stream this page and every following page, in order
    ///
    /// Pages are fetched lazily as the stream is polled; an `Err` ends the
    /// stream. Dropping the stream cancels any in-flight fetch.
    pub fn into_stream(self) -> impl Stream<Item = Result<Paginated<T>>> {
        futures::stream::try_unfold(Some(self), |state| async move {
            match state {
                None => Ok(None),
                Some(page) => {
                    let next = page.next_page().await?;
                    Ok(Some((page, next)))
                }
            }
        })
    }
}

impl<T: Clone> Clone for Paginated<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            prev_token: self.prev_token.clone(),
            next_token: self.next_token.clone(),
            results_per_page: self.results_per_page,
            total_results: self.total_results,
            source: Arc::clone(&self.source),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Paginated<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginated")
            .field("data", &self.data)
            .field("prev_token", &self.prev_token)
            .field("next_token", &self.next_token)
            .field("results_per_page", &self.results_per_page)
            .field("total_results", &self.total_results)
            .finish_non_exhaustive()
    }
}

/// A list query bound to an entity type
///
/// The concrete [`PageSource`] used by every endpoint manager: holds the
/// transport, the immutable [`PageRequest`] descriptor, and a scoped logger.
/// Each fetch GETs one raw page, checks `items` presence, converts the
/// records fail-fast, and wraps the result in a fresh [`Paginated`] that
/// points back at this query.
pub struct ListQuery<E> {
    client: Arc<HttpClient>,
    request: PageRequest,
    logger: Logger,
    _entity: PhantomData<fn() -> E>,
}

impl<E> ListQuery<E>
where
    E: FromRaw + Send + Sync + 'static,
{
    /// Create a query over the given transport and descriptor
    pub fn new(client: Arc<HttpClient>, request: PageRequest, logger: Logger) -> Arc<Self> {
        Arc::new(Self {
            client,
            request,
            logger,
            _entity: PhantomData,
        })
    }

    /// Fetch the query's first page
    pub async fn first_page(self: Arc<Self>) -> Result<Paginated<Vec<E>>> {
        self.fetch_page(None).await
    }
}

#[async_trait]
impl<E> PageSource<Vec<E>> for ListQuery<E>
where
    E: FromRaw + Send + Sync + 'static,
{
    async fn fetch_page(self: Arc<Self>, token: Option<String>) -> Result<Paginated<Vec<E>>> {
        let config = self.request.to_request_config(token.as_deref());
        let raw: RawPage = self.client.get_json(&self.request.path, config).await?;

        let items = raw.items_or_likely_bug(&self.request.path)?;
        let entities = E::from_raw_many(items, &self.logger)?;

        self.logger.debug(&format!(
            "fetched page of {} from '{}' (next: {}, prev: {})",
            entities.len(),
            self.request.path,
            raw.next_page_token.is_some(),
            raw.prev_page_token.is_some(),
        ));

        let results_per_page = raw.results_per_page();
        let total_results = raw.total_results();
        Ok(Paginated::new(
            entities,
            raw.prev_page_token,
            raw.next_page_token,
            results_per_page,
            total_results,
            self,
        ))
    }
}

impl<E> std::fmt::Debug for ListQuery<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListQuery")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}
