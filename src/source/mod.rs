//! Data source module
//!
//! The seam between a table and whatever serves its pages.
//!
//! # Overview
//!
//! - `DataSource` - async trait a backend implements
//! - `InMemorySource` - searchable, sortable in-memory backend that pages by
//!   continuation token
//! - `TableRow` - what a row type provides for search and ordering
//! - `Employee` - demo row type

mod employee;
mod memory;
mod token;

pub use employee::Employee;
pub use memory::{InMemorySource, TableRow};
pub use token::{decode_token, encode_token, query_fingerprint};

use crate::dto::{TableRequest, TableResponse};
use crate::error::Result;
use async_trait::async_trait;

/// A backend that serves table pages
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Row type carried in `TableResponse::data`
    type Row: Send;

    /// Fetch the page described by the request
    async fn fetch(&self, request: &TableRequest) -> Result<TableResponse<Vec<Self::Row>>>;
}

#[cfg(test)]
mod tests;
