//! In-memory data source
//!
//! Filters, orders and pages a fixed set of rows. Pages are resumed by
//! continuation token, so the source behaves like a cursor-based backend;
//! with `hide_totals` it also withholds record counts.

use super::token::{decode_token, encode_token, query_fingerprint};
use super::DataSource;
use crate::dto::{SortDirection, TableRequest, TableResponse};
use crate::error::Result;
use crate::types::{checked_non_negative, token_content};
use async_trait::async_trait;
use regex::{Regex, RegexBuilder};
use std::cmp::Ordering;
use std::time::Duration;
use tracing::debug;

/// What a row provides so the source can search and order it
pub trait TableRow: Clone + Send + Sync {
    /// Text values matched by the global search
    fn search_fields(&self) -> Vec<String>;

    /// Compare two rows on a named column
    fn compare_by(&self, other: &Self, column: &str) -> Ordering;
}

/// Row set served from memory
#[derive(Debug, Clone)]
pub struct InMemorySource<R> {
    rows: Vec<R>,
    hide_totals: bool,
    latency: Option<Duration>,
}

impl<R: TableRow> InMemorySource<R> {
    /// Create a source over the given rows
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows,
            hide_totals: false,
            latency: None,
        }
    }

    /// Report 0 for both totals, like a backend that cannot count
    #[must_use]
    pub fn hide_totals(mut self, hide: bool) -> Self {
        self.hide_totals = hide;
        self
    }

    /// Sleep before answering each request
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of rows before filtering
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the source has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows matching the request's search, in the request's order
    fn select(&self, request: &TableRequest) -> Result<Vec<&R>> {
        let matcher = SearchMatcher::from_request(request)?;
        let mut rows: Vec<&R> = self.rows.iter().filter(|r| matcher.matches(*r)).collect();

        let orders = request.orders();
        if !orders.is_empty() {
            rows.sort_by(|a, b| {
                for order in orders {
                    let column = order.column.as_deref().unwrap_or("name");
                    let ordering = match order.direction_or_default() {
                        SortDirection::Asc => a.compare_by(b, column),
                        SortDirection::Desc => b.compare_by(a, column),
                    };
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                }
                Ordering::Equal
            });
        }

        Ok(rows)
    }
}

#[async_trait]
impl<R: TableRow + 'static> DataSource for InMemorySource<R> {
    type Row = R;

    async fn fetch(&self, request: &TableRequest) -> Result<TableResponse<Vec<R>>> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let rows = self.select(request)?;
        let filtered = rows.len();
        let fingerprint = query_fingerprint(request);

        let offset = match token_content(request.continuation_token.as_deref()) {
            Some(token) => decode_token(token, fingerprint)?,
            None => checked_non_negative(request.start, "start")? as usize,
        };

        let remaining = filtered.saturating_sub(offset);
        let take = if request.length < 0 {
            remaining
        } else {
            (request.length as usize).min(remaining)
        };

        let page: Vec<R> = rows
            .into_iter()
            .skip(offset)
            .take(take)
            .cloned()
            .collect();

        let end = offset + page.len();
        let next_token = (!page.is_empty() && end < filtered).then(|| encode_token(end, fingerprint));

        debug!(
            draw = request.draw,
            offset,
            returned = page.len(),
            filtered,
            has_next = next_token.is_some(),
            "Served page"
        );

        let (total, total_filtered) = if self.hide_totals {
            (0, 0)
        } else {
            (self.rows.len() as i64, filtered as i64)
        };

        Ok(TableResponse::success(
            request.draw,
            total,
            total_filtered,
            page,
            next_token,
        ))
    }
}

// ============================================================================
// Search Matching
// ============================================================================

enum SearchMatcher {
    All,
    Substring { needle: String, case_insensitive: bool },
    Pattern(Regex),
}

impl SearchMatcher {
    fn from_request(request: &TableRequest) -> Result<Self> {
        let (Some(search), Some(value)) = (request.search.as_ref(), request.search_value()) else {
            return Ok(Self::All);
        };

        if search.regex {
            let regex = RegexBuilder::new(value)
                .case_insensitive(search.case_insensitive)
                .build()?;
            return Ok(Self::Pattern(regex));
        }

        let needle = if search.case_insensitive {
            value.to_lowercase()
        } else {
            value.to_string()
        };

        Ok(Self::Substring {
            needle,
            case_insensitive: search.case_insensitive,
        })
    }

    fn matches<R: TableRow>(&self, row: &R) -> bool {
        match self {
            Self::All => true,
            Self::Substring {
                needle,
                case_insensitive,
            } => row.search_fields().iter().any(|field| {
                if *case_insensitive {
                    field.to_lowercase().contains(needle.as_str())
                } else {
                    field.contains(needle.as_str())
                }
            }),
            Self::Pattern(regex) => row.search_fields().iter().any(|field| regex.is_match(field)),
        }
    }
}
