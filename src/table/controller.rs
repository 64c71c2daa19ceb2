//! Table controller implementation

use super::types::{PageView, TableQuery};
use crate::config::TableOptions;
use crate::dto::{TableOrder, TableRequest, TableSearch};
use crate::error::{Error, Result};
use crate::paging::ContinuationTokenPaging;
use crate::source::DataSource;
use crate::types::{checked_page_size, PageIndex};
use tracing::{info, warn};

/// Hosts a paging tracker over a data source
pub struct TableController<S: DataSource> {
    /// Backend serving pages
    source: S,
    /// Table options
    options: TableOptions,
    /// Continuation-token paging state for the current query
    paging: ContinuationTokenPaging,
    /// Current search and ordering
    query: TableQuery,
    /// Current page size
    page_size: u64,
    /// Draw counter of the last request sent
    draw: i64,
    /// Token from the last successful response
    last_next_token: Option<String>,
    /// Page of the last successful fetch
    displayed_page: Option<PageIndex>,
}

impl<S: DataSource> TableController<S> {
    /// Create a controller, starting at the options' default page size
    pub fn new(source: S, options: TableOptions) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            source,
            page_size: options.default_page_size,
            options,
            paging: ContinuationTokenPaging::new(),
            query: TableQuery::new(),
            draw: 0,
            last_next_token: None,
            displayed_page: None,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Table options
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Paging state
    pub fn paging(&self) -> &ContinuationTokenPaging {
        &self.paging
    }

    /// Current search and ordering
    pub fn query(&self) -> &TableQuery {
        &self.query
    }

    /// Current page size
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Draw counter of the last request sent
    pub fn draw(&self) -> i64 {
        self.draw
    }

    /// Page of the last successful fetch
    pub fn displayed_page(&self) -> Option<PageIndex> {
        self.displayed_page
    }

    /// Whether a next page is known to exist
    pub fn has_more_pages(&self) -> bool {
        self.paging.has_more_pages()
    }

    /// The underlying data source
    pub fn source(&self) -> &S {
        &self.source
    }

    // ========================================================================
    // Query Changes
    // ========================================================================

    /// Replace the search. Returns true if the query changed and paging was
    /// reset; the next navigation then starts from page 0.
    pub fn set_search(&mut self, search: Option<TableSearch>) -> bool {
        let query = self.query.clone().with_search(search);
        self.replace_query(query)
    }

    /// Replace the search with a plain case-insensitive term
    pub fn set_search_term(&mut self, term: &str) -> bool {
        self.set_search(Some(TableSearch::new(term)))
    }

    /// Replace the ordering. Returns true if paging was reset.
    pub fn set_order(&mut self, order: Vec<TableOrder>) -> bool {
        let query = self.query.clone().with_order(order);
        self.replace_query(query)
    }

    /// Change the page size. Returns true if paging was reset.
    pub fn set_page_size(&mut self, page_size: u64) -> Result<bool> {
        let page_size = checked_page_size(page_size)?;
        if page_size == self.page_size {
            return Ok(false);
        }

        self.page_size = page_size;
        self.reset();
        Ok(true)
    }

    fn replace_query(&mut self, query: TableQuery) -> bool {
        if query == self.query {
            return false;
        }

        self.query = query;
        self.reset();
        true
    }

    /// Drop all paging state
    pub fn reset(&mut self) {
        info!(page_size = self.page_size, "Resetting table paging");
        self.paging.reset();
        self.last_next_token = None;
        self.displayed_page = None;
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Fetch the first page
    pub async fn first_page(&mut self) -> Result<PageView<S::Row>> {
        self.go_to_page(0).await
    }

    /// Fetch the page after the displayed one
    pub async fn next_page(&mut self) -> Result<PageView<S::Row>> {
        let page = match self.displayed_page {
            None => 0,
            Some(page) if self.paging.has_more_pages() => page + 1,
            Some(page) => return Err(Error::NoMorePages { page }),
        };
        self.go_to_page(page).await
    }

    /// Fetch the page before the displayed one (stays on page 0)
    pub async fn previous_page(&mut self) -> Result<PageView<S::Row>> {
        let page = self.displayed_page.map_or(0, |p| p.saturating_sub(1));
        self.go_to_page(page).await
    }

    /// Fetch the displayed page again
    pub async fn refresh(&mut self) -> Result<PageView<S::Row>> {
        self.go_to_page(self.displayed_page.unwrap_or(0)).await
    }

    /// Fetch a page by index.
    ///
    /// A page whose token is unknown is reached by paging forward from the
    /// nearest page below it that can be fetched exactly, so the rows shown
    /// always belong to the requested page.
    pub async fn go_to_page(&mut self, page: PageIndex) -> Result<PageView<S::Row>> {
        self.page_offset(page)?;

        let mut from = self.walk_start(page);
        if from < page {
            info!(from, to = page, "Paging forward to unvisited page");
        }

        while from < page {
            let view = self.fetch_page(from).await?;
            if !view.has_more {
                return Err(Error::NoMorePages { page: from });
            }
            from += 1;
        }

        self.fetch_page(page).await
    }

    /// Whether a page can be requested with a token known to start it
    fn is_reachable(&self, page: PageIndex) -> bool {
        let follows_displayed = self.displayed_page.map(|p| p + 1) == Some(page);

        page == 0
            || self.paging.continuation_token(page).is_some()
            || (follows_displayed && self.last_next_token.is_some())
    }

    /// Highest page at or below `page` that is reachable
    fn walk_start(&self, page: PageIndex) -> PageIndex {
        if self.is_reachable(page) {
            return page;
        }

        let after_displayed = self
            .displayed_page
            .map(|p| p + 1)
            .filter(|p| *p < page && self.is_reachable(*p));

        self.paging
            .tokens()
            .iter()
            .filter(|(p, token)| *p < page && token.is_some())
            .map(|(p, _)| p)
            .chain(after_displayed)
            .max()
            .unwrap_or(0)
    }

    /// Offset of a page's first record, if it fits the wire type
    fn page_offset(&self, page: PageIndex) -> Result<u64> {
        page.checked_mul(self.page_size)
            .filter(|o| i64::try_from(*o).is_ok())
            .ok_or_else(|| Error::invalid_argument("page", format!("page {page} is out of range")))
    }

    async fn fetch_page(&mut self, page: PageIndex) -> Result<PageView<S::Row>> {
        let offset = self.page_offset(page)?;

        // The previous response's token only reaches the page right after it
        let previous_token = match self.displayed_page {
            Some(shown) if shown + 1 == page => self.last_next_token.as_deref(),
            _ => None,
        };

        let token = self
            .paging
            .resolve_request_token(offset, self.page_size, previous_token)?;

        self.draw += 1;
        let mut request = TableRequest::new(self.draw, offset as i64, self.page_size as i64)
            .with_order(self.query.order.clone())
            .with_continuation_token(token.clone());
        request.search = self.query.search.clone();

        let response = self.source.fetch(&request).await?;

        if response.draw != request.draw {
            warn!(
                expected = request.draw,
                actual = response.draw,
                "Discarding response for another draw"
            );
            return Err(Error::DrawMismatch {
                expected: request.draw,
                actual: response.draw,
            });
        }

        if let Some(message) = response.error {
            warn!(page, %message, "Data source reported an error");
            return Err(Error::data_source(message));
        }

        let rows = response.data.unwrap_or_default();
        let reported_total = u64::try_from(response.total_filtered_records)
            .ok()
            .filter(|t| *t > 0);

        self.paging.set_reported_total(reported_total);
        self.paging.apply_response(
            self.page_size,
            rows.len() as u64,
            response.continuation_token.as_deref(),
            token.as_deref(),
        )?;

        self.last_next_token = response.continuation_token;
        self.displayed_page = Some(page);

        let has_more = self.paging.has_more_pages();
        Ok(PageView {
            page_index: page,
            page_size: self.page_size,
            rows,
            total_estimate: self.paging.estimate_total(self.page_size)?,
            total_is_exact: reported_total.is_some() || !has_more,
            has_more,
        })
    }
}
