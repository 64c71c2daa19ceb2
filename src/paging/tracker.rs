//! Continuation-token paging tracker
//!
//! Reconciles page-number navigation with a backend that only understands
//! opaque continuation tokens.

use super::estimator::{estimate_total, EstimateInputs};
use super::store::{CountStore, TokenStore};
use crate::error::Result;
use crate::types::{
    checked_non_negative, checked_page_size, token_content, PageIndex, RecordCount,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pagination state for one table over one query.
///
/// The host calls [`resolve_request_token`](Self::resolve_request_token)
/// before each fetch and [`apply_response`](Self::apply_response) after it.
/// Calls must be paired: resolving twice without applying leaves the current
/// page pointing at the second request.
///
/// Stored tokens are only valid for the query they were issued under; the
/// host must call [`reset`](Self::reset) when the search or sort changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationTokenPaging {
    tokens: TokenStore,
    counts: CountStore,
    current_page: PageIndex,
    estimated_total: RecordCount,
    #[serde(default)]
    reported_total: Option<RecordCount>,
    has_more: bool,
}

impl Default for ContinuationTokenPaging {
    fn default() -> Self {
        Self::new()
    }
}

impl ContinuationTokenPaging {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self {
            tokens: TokenStore::new(),
            counts: CountStore::new(),
            current_page: 0,
            estimated_total: 0,
            reported_total: None,
            has_more: true,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Page index of the most recently resolved request
    pub fn current_page(&self) -> PageIndex {
        self.current_page
    }

    /// Whether a further continuation token is known to exist
    pub fn has_more_pages(&self) -> bool {
        self.has_more
    }

    /// Estimate cached by the last applied response
    pub fn estimated_total(&self) -> RecordCount {
        self.estimated_total
    }

    /// Total reported by the backend, if any
    pub fn reported_total(&self) -> Option<RecordCount> {
        self.reported_total
    }

    /// Token store (read-only)
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Count store (read-only)
    pub fn counts(&self) -> &CountStore {
        &self.counts
    }

    /// Continuation token stored for a page
    pub fn continuation_token(&self, page: PageIndex) -> Option<&str> {
        self.tokens.get(page)
    }

    /// Store a continuation token for a page
    pub fn set_continuation_token(&mut self, page: PageIndex, token: Option<&str>) {
        self.tokens.set(page, token);
    }

    /// Records returned for a page (0 when never fetched)
    pub fn page_record_count(&self, page: PageIndex) -> RecordCount {
        self.counts.get(page)
    }

    /// Record how many records a page returned
    pub fn set_page_record_count(&mut self, page: PageIndex, count: RecordCount) {
        self.counts.set(page, count);
    }

    /// Feed a total reported by the backend. `None` or zero means unknown.
    pub fn set_reported_total(&mut self, total: Option<RecordCount>) {
        self.reported_total = total;
    }

    /// Offset of the first record on the current page
    pub fn calculate_virtual_start(&self, page_size: u64) -> u64 {
        self.current_page.saturating_mul(page_size)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Resolve the token to send when requesting `requested_offset`.
    ///
    /// Sets the current page to `requested_offset / page_size`. Page 0 always
    /// starts from the beginning. Otherwise a token stored for the page wins,
    /// then the token from the previous response, then the closest recorded
    /// page.
    pub fn resolve_request_token(
        &mut self,
        requested_offset: u64,
        page_size: u64,
        token_from_previous_response: Option<&str>,
    ) -> Result<Option<String>> {
        let page_size = checked_page_size(page_size)?;
        let page = requested_offset / page_size;
        self.current_page = page;

        if page == 0 {
            debug!(page, "Resolved to start of data");
            return Ok(None);
        }

        if let Some(token) = self.tokens.get(page) {
            debug!(page, "Resolved from stored token");
            return Ok(Some(token.to_string()));
        }

        if let Some(token) = token_content(token_from_previous_response) {
            debug!(page, "Resolved from previous response token");
            return Ok(Some(token.to_string()));
        }

        Ok(self.best_token_for_page(page))
    }

    /// Signed variant of [`resolve_request_token`](Self::resolve_request_token)
    /// for values taken straight off the wire.
    pub fn resolve_request_token_checked(
        &mut self,
        requested_offset: i64,
        page_size: i64,
        token_from_previous_response: Option<&str>,
    ) -> Result<Option<String>> {
        let offset = checked_non_negative(requested_offset, "requested_offset")?;
        let page_size = checked_non_negative(page_size, "page_size")?;
        self.resolve_request_token(offset, page_size, token_from_previous_response)
    }

    /// Best token for reaching a page whose own token is unknown.
    ///
    /// A page recorded without a token resolves to `None`. An unrecorded page
    /// takes the token of the nearest recorded page (smaller index on ties).
    /// That is a best effort: the backend's page boundaries stay
    /// authoritative.
    pub fn best_token_for_page(&self, page: PageIndex) -> Option<String> {
        if let Some(token) = self.tokens.get(page) {
            return Some(token.to_string());
        }

        if self.tokens.contains(page) {
            debug!(page, "Page recorded without a token");
            return None;
        }

        let closest = self.tokens.closest_page(page)?;
        debug!(page, closest, "Resolved from closest recorded page");
        self.tokens.get(closest).map(ToString::to_string)
    }

    /// Fold a response for the current page back into the tracker.
    pub fn apply_response(
        &mut self,
        page_size: u64,
        record_count: RecordCount,
        next_token: Option<&str>,
        token_used_for_this_page: Option<&str>,
    ) -> Result<()> {
        let page_size = checked_page_size(page_size)?;
        let page = self.current_page;

        self.counts.set(page, record_count);

        if let Some(token) = token_content(token_used_for_this_page) {
            self.tokens.set(page, Some(token));
        }

        match token_content(next_token) {
            Some(token) => {
                self.tokens.set(page.saturating_add(1), Some(token));
                self.has_more = true;
            }
            None => self.has_more = false,
        }

        self.estimated_total = self.compute_estimate(page_size);

        debug!(
            page,
            record_count,
            has_more = self.has_more,
            estimated_total = self.estimated_total,
            "Applied response"
        );

        Ok(())
    }

    /// Signed variant of [`apply_response`](Self::apply_response).
    pub fn apply_response_checked(
        &mut self,
        page_size: i64,
        record_count: i64,
        next_token: Option<&str>,
        token_used_for_this_page: Option<&str>,
    ) -> Result<()> {
        let page_size = checked_non_negative(page_size, "page_size")?;
        let record_count = checked_non_negative(record_count, "record_count")?;
        self.apply_response(page_size, record_count, next_token, token_used_for_this_page)
    }

    // ========================================================================
    // Estimation & lifecycle
    // ========================================================================

    /// Estimated total number of records.
    ///
    /// Exact once the last page has been seen; until then an estimate that
    /// never falls below one page past the highest known page.
    pub fn estimate_total(&self, page_size: u64) -> Result<RecordCount> {
        let page_size = checked_page_size(page_size)?;
        Ok(self.compute_estimate(page_size))
    }

    fn compute_estimate(&self, page_size: u64) -> RecordCount {
        estimate_total(
            &self.counts,
            EstimateInputs {
                reported_total: self.reported_total,
                has_more: self.has_more,
                page_size,
            },
        )
    }

    /// Forget all tokens and counts.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.counts.clear();
        self.current_page = 0;
        self.estimated_total = 0;
        self.reported_total = None;
        self.has_more = true;
    }
}
