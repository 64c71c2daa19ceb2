//! Wire types for table requests and responses
//!
//! These mirror the JSON shape exchanged between a table and its backend
//! (`draw`, `start`, `length`, `search`, `order`, `continuationToken`).
//! The paging tracker never sees them; the table controller translates.

mod request;
mod response;

pub use request::{SortDirection, TableOrder, TableRequest, TableSearch};
pub use response::TableResponse;
