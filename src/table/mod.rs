//! Table controller module
//!
//! Drives a `ContinuationTokenPaging` tracker against a `DataSource` the way
//! a hosting table does: resolve a token, fetch, apply the response, and
//! reset whenever the query shape changes.
//!
//! # Overview
//!
//! - `TableController` - navigation entry points (`go_to_page`, `next_page`, ...)
//! - `TableQuery` - search and ordering that define cursor validity
//! - `PageView` - what the table renders for one page

mod controller;
mod types;

pub use controller::TableController;
pub use types::{PageView, TableQuery};
