//! Incremental, scroll-driven city list state.
//!
//! The list grows monotonically: every successful page fetch appends the
//! returned records in API order, with no dedup and no reorder. A failed
//! fetch leaves the list untouched and is retried at the same offset per the
//! configured [`RetryPolicy`].

use crate::catalog::CitySource;
use crate::error::{Error, Result};
use crate::model::CityRecord;
use crate::retry::RetryPolicy;

pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Fetch lifecycle of a view. A second fetch cannot start while one is in
/// flight; the `Idle -> Fetching -> Idle` transition happens on the same
/// state machine that issues the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Fetching,
}

/// What a fetch trigger actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was fetched and its records appended (possibly zero of them).
    Appended(usize),
    /// Another fetch was already in flight; the request was dropped.
    InFlight,
    /// The trigger didn't fire (viewport not at the bottom).
    Ignored,
}

pub struct CityList {
    source: Box<dyn CitySource>,
    cities: Vec<CityRecord>,
    page_size: u64,
    offset: u64,
    state: FetchState,
    retry: RetryPolicy,
}

impl CityList {
    pub fn new(source: Box<dyn CitySource>) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(source: Box<dyn CitySource>, page_size: u64) -> Self {
        Self {
            source,
            cities: Vec::new(),
            page_size,
            offset: 0,
            state: FetchState::Idle,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn is_fetching(&self) -> bool {
        self.state == FetchState::Fetching
    }

    /// Issues the initial fetch for offset 0. Called once when the view mounts.
    pub async fn mount(&mut self) -> Result<FetchOutcome> {
        self.fetch_page(0).await
    }

    /// Scroll trigger: when the viewport has reached the document bottom,
    /// advance the offset by one page and fetch it. Any other scroll position
    /// is ignored.
    pub async fn on_scroll(&mut self, at_bottom: bool) -> Result<FetchOutcome> {
        if !at_bottom {
            return Ok(FetchOutcome::Ignored);
        }

        let next = self.offset + self.page_size;
        self.fetch_page(next).await
    }

    /// Fetches one page and appends it.
    ///
    /// When a fetch is already in flight the call is dropped. On failure the
    /// same offset is retried after the policy delay; the list only changes
    /// once a fetch succeeds, and the cursor only advances for pages that
    /// were actually requested.
    pub async fn fetch_page(&mut self, offset: u64) -> Result<FetchOutcome> {
        if self.state == FetchState::Fetching {
            tracing::debug!(offset, "fetch already in flight, dropping request");
            return Ok(FetchOutcome::InFlight);
        }

        self.state = FetchState::Fetching;
        let result = self.fetch_with_retry(offset).await;
        self.state = FetchState::Idle;

        let page = result?;
        self.offset = offset;

        let appended = page.results.len();
        self.cities.extend(page.results);

        tracing::debug!(offset, appended, total = self.cities.len(), "appended city page");
        Ok(FetchOutcome::Appended(appended))
    }

    async fn fetch_with_retry(&self, offset: u64) -> Result<crate::model::CityPage> {
        let mut attempts: u32 = 0;

        loop {
            match self.source.fetch_page(self.page_size, offset).await {
                Ok(page) => return Ok(page),
                Err(err) => {
                    attempts += 1;
                    if !self.retry.allows_another(attempts) {
                        return Err(Error::RetriesExhausted {
                            attempts,
                            source: Box::new(err),
                        });
                    }

                    tracing::warn!(
                        offset,
                        attempts,
                        error = %err,
                        "page fetch failed, retrying after delay"
                    );
                    tokio::time::sleep(self.retry.delay()).await;
                }
            }
        }
    }
}

impl std::fmt::Debug for CityList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CityList")
            .field("len", &self.cities.len())
            .field("page_size", &self.page_size)
            .field("offset", &self.offset)
            .field("state", &self.state)
            .finish()
    }
}
