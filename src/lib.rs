//! # table-pager
//!
//! Continuation-token pagination for server-driven data tables.
//!
//! Many backends page with opaque continuation tokens and never report an
//! absolute offset or a total count. A table UI still wants page numbers, a
//! page size, and a "Showing 11 to 20 of ~150" line. This crate bridges the
//! two.
//!
//! ## Features
//!
//! - **Token tracking**: remembers which token reaches which page, so the
//!   user can jump backward without replaying the whole cursor trail
//! - **Total estimation**: a growing estimate that becomes exact at the end
//! - **Wire types**: `draw`/`start`/`length`/`search`/`order`/`continuationToken`
//! - **Host glue**: a controller that resets paging when search or order change
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use table_pager::paging::ContinuationTokenPaging;
//!
//! let mut paging = ContinuationTokenPaging::new();
//!
//! // Before a request: which token reaches offset 10 at page size 10?
//! let token = paging.resolve_request_token(10, 10, Some("tokA"))?;
//!
//! // After the response: fold the count and next token back in
//! paging.apply_response(10, 10, Some("tokB"), token.as_deref())?;
//!
//! let total = paging.estimate_total(10)?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    TableController                       │
//! │  go_to_page / next_page / previous_page / set_search     │
//! └──────────────┬───────────────────────────┬───────────────┘
//!                │                           │
//! ┌──────────────┴──────────────┐  ┌─────────┴──────────────┐
//! │   ContinuationTokenPaging   │  │      DataSource        │
//! ├─────────────┬───────────────┤  ├────────────────────────┤
//! │ TokenStore  │ CountStore    │  │ TableRequest  ──►      │
//! │ Navigator   │ Estimator     │  │ ◄── TableResponse      │
//! └─────────────┴───────────────┘  └────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and helpers
pub mod types;

/// Continuation-token paging tracker
pub mod paging;

/// Request/response wire types
pub mod dto;

/// Table options
pub mod config;

/// Data source trait and in-memory source
pub mod source;

/// Table controller
pub mod table;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::TableOptions;
pub use paging::ContinuationTokenPaging;
pub use table::{PageView, TableController};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
