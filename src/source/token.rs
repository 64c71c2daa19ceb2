//! Continuation token codec for the in-memory source
//!
//! A token is the URL-safe base64 of `offset:fingerprint`. The fingerprint
//! ties the token to the search and ordering it was issued under, so a token
//! replayed against a different query is rejected instead of silently landing
//! on the wrong rows.

use crate::dto::TableRequest;
use crate::error::{Error, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hash of the query shape (search + ordering) of a request
pub fn query_fingerprint(request: &TableRequest) -> u64 {
    let mut hasher = DefaultHasher::new();
    request.search_value().hash(&mut hasher);
    request.search.as_ref().map(|s| (s.regex, s.case_insensitive)).hash(&mut hasher);
    request.orders().hash(&mut hasher);
    hasher.finish()
}

/// Encode a resume offset for a query
pub fn encode_token(offset: usize, fingerprint: u64) -> String {
    URL_SAFE_NO_PAD.encode(format!("{offset}:{fingerprint:x}"))
}

/// Decode a token, checking it belongs to the query
pub fn decode_token(token: &str, fingerprint: u64) -> Result<usize> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|_| Error::invalid_token(token))?;
    let text = String::from_utf8(bytes).map_err(|_| Error::invalid_token(token))?;

    let (offset, issued_for) = text
        .split_once(':')
        .ok_or_else(|| Error::invalid_token(token))?;

    let issued_for =
        u64::from_str_radix(issued_for, 16).map_err(|_| Error::invalid_token(token))?;
    if issued_for != fingerprint {
        return Err(Error::invalid_token(token));
    }

    offset.parse().map_err(|_| Error::invalid_token(token))
}
