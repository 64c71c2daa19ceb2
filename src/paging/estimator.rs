//! Total-record estimation
//!
//! A cursor-only backend never says how many records exist. The estimate
//! grows as pages are observed and becomes exact once the last page is seen.

use super::store::CountStore;
use crate::types::RecordCount;

/// Everything besides the count store that feeds an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateInputs {
    /// Total reported by the backend, if it reports one
    pub reported_total: Option<RecordCount>,
    /// Whether a further continuation token is known to exist
    pub has_more: bool,
    /// Current page size (must be positive)
    pub page_size: u64,
}

/// Estimate the total number of records.
///
/// A positive reported total always wins. While more pages exist the result
/// is at least one page past the highest known page. Otherwise it is the
/// exact sum of the observed counts.
pub fn estimate_total(counts: &CountStore, inputs: EstimateInputs) -> RecordCount {
    if let Some(total) = inputs.reported_total.filter(|t| *t > 0) {
        return total;
    }

    let known = counts.total();

    match counts.max_page() {
        Some(max_page) if inputs.has_more => {
            let pages_seen = max_page.saturating_add(1);
            let avg_per_page = known / pages_seen;
            let by_average = known.saturating_add(avg_per_page);
            let by_pages = max_page
                .saturating_add(2)
                .saturating_mul(inputs.page_size);

            by_average.max(by_pages)
        }
        _ => known,
    }
}
