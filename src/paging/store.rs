//! Token and count stores
//!
//! Both stores are keyed by virtual page index. Neither knows anything about
//! navigation; the tracker decides what to read and write.

use crate::types::{token_content, PageIndex, RecordCount};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Token Store
// ============================================================================

/// Page index to the continuation token that reaches that page.
///
/// An entry holding `None` records "visited, no token" and is distinct from
/// an absent entry ("never visited"). Use [`TokenStore::contains`] to tell
/// them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenStore {
    tokens: BTreeMap<PageIndex, Option<String>>,
}

impl TokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Token stored for a page, if any
    pub fn get(&self, page: PageIndex) -> Option<&str> {
        self.tokens.get(&page).and_then(|t| token_content(t.as_deref()))
    }

    /// Store a token for a page. Empty strings are stored as `None`.
    pub fn set<T: Into<String>>(&mut self, page: PageIndex, token: Option<T>) {
        let token = token.map(Into::into).filter(|t| !t.is_empty());
        self.tokens.insert(page, token);
    }

    /// Check whether the page has ever been recorded
    pub fn contains(&self, page: PageIndex) -> bool {
        self.tokens.contains_key(&page)
    }

    /// Recorded page nearest to `page`, preferring the smaller index on ties
    pub fn closest_page(&self, page: PageIndex) -> Option<PageIndex> {
        self.tokens
            .keys()
            .copied()
            .min_by_key(|&candidate| (candidate.abs_diff(page), candidate))
    }

    /// Iterate over recorded pages in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (PageIndex, Option<&str>)> {
        self.tokens.iter().map(|(page, token)| (*page, token.as_deref()))
    }

    /// Number of recorded pages
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no page has been recorded
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Forget every recorded page
    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

// ============================================================================
// Count Store
// ============================================================================

/// Page index to the number of records actually returned for that page.
///
/// Only fetched pages have an entry; the latest fetch of a page wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountStore {
    counts: BTreeMap<PageIndex, RecordCount>,
}

impl CountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Count recorded for a page (0 when never fetched)
    pub fn get(&self, page: PageIndex) -> RecordCount {
        self.counts.get(&page).copied().unwrap_or(0)
    }

    /// Record the count for a page, replacing any earlier value
    pub fn set(&mut self, page: PageIndex, count: RecordCount) {
        self.counts.insert(page, count);
    }

    /// Check whether a page has been fetched
    pub fn contains(&self, page: PageIndex) -> bool {
        self.counts.contains_key(&page)
    }

    /// Sum of all recorded counts
    pub fn total(&self) -> RecordCount {
        self.counts.values().fold(0, |acc, c| acc.saturating_add(*c))
    }

    /// Highest fetched page index
    pub fn max_page(&self) -> Option<PageIndex> {
        self.counts.keys().next_back().copied()
    }

    /// Number of fetched pages
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no page has been fetched
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Forget every recorded count
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
