//! Table controller types

use crate::dto::{TableOrder, TableSearch};
use crate::types::{PageIndex, RecordCount};
use serde::{Deserialize, Serialize};

/// Search and ordering of a table.
///
/// Continuation tokens are only meaningful for the query they were issued
/// under, so any change here invalidates the paging state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableQuery {
    /// Global search, `None` when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<TableSearch>,

    /// Ordering clauses, highest priority first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<TableOrder>,
}

impl TableQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search, treating an empty value as no search
    #[must_use]
    pub fn with_search(mut self, search: Option<TableSearch>) -> Self {
        self.search = search.filter(|s| !s.is_empty());
        self
    }

    /// Set the ordering
    #[must_use]
    pub fn with_order(mut self, order: Vec<TableOrder>) -> Self {
        self.order = order;
        self
    }
}

/// One rendered page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<R> {
    /// Zero-based page index
    pub page_index: PageIndex,
    /// Page size the page was requested with
    pub page_size: u64,
    /// Rows returned by the source
    pub rows: Vec<R>,
    /// Estimated (or exact) total number of records
    pub total_estimate: RecordCount,
    /// Whether `total_estimate` is known to be exact
    pub total_is_exact: bool,
    /// Whether a next page is known to exist
    pub has_more: bool,
}

impl<R> PageView<R> {
    /// Number of pages implied by the total estimate
    pub fn page_count(&self) -> u64 {
        self.total_estimate.div_ceil(self.page_size.max(1))
    }

    /// One-based number of the first record on the page (0 when empty)
    pub fn first_record(&self) -> u64 {
        if self.rows.is_empty() {
            0
        } else {
            self.page_index * self.page_size + 1
        }
    }

    /// One-based number of the last record on the page (0 when empty)
    pub fn last_record(&self) -> u64 {
        if self.rows.is_empty() {
            0
        } else {
            self.page_index * self.page_size + self.rows.len() as u64
        }
    }

    /// Info line such as `Showing 11 to 20 of ~30 entries`
    pub fn summary(&self) -> String {
        let approx = if self.total_is_exact { "" } else { "~" };
        format!(
            "Showing {} to {} of {approx}{} entries",
            self.first_record(),
            self.last_record(),
            self.total_estimate
        )
    }
}
