//! Continuation-token paging module
//!
//! Maps a page-number UI onto a backend that only hands out opaque
//! continuation tokens.
//!
//! # Overview
//!
//! - `TokenStore` - page index to the token that reaches that page
//! - `CountStore` - page index to the record count observed for that page
//! - `estimate_total` - total-record estimate from the observed counts
//! - `ContinuationTokenPaging` - the tracker that resolves request tokens and
//!   folds responses back into the stores

mod estimator;
mod store;
mod tracker;

pub use estimator::{estimate_total, EstimateInputs};
pub use store::{CountStore, TokenStore};
pub use tracker::ContinuationTokenPaging;
