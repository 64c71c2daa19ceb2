//! Common types used throughout table-pager
//!
//! This module contains shared type definitions, type aliases,
//! and small helpers used across multiple modules.

use crate::error::{Error, Result};

// ============================================================================
// Type Aliases
// ============================================================================

/// Zero-based virtual page index (`offset / page_size`)
pub type PageIndex = u64;

/// Number of records observed for a page
pub type RecordCount = u64;

// ============================================================================
// Token Helpers
// ============================================================================

/// Returns the token only if it carries content.
///
/// Backends use both `null` and `""` to say "no further token"; both collapse
/// to `None` here.
pub fn token_content(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.is_empty())
}

// ============================================================================
// Argument Validation
// ============================================================================

/// Convert a signed wire value into an unsigned index or count.
pub fn checked_non_negative(value: i64, name: &str) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| Error::invalid_argument(name, format!("must be non-negative, got {value}")))
}

/// Validate a page size (must be strictly positive).
pub fn checked_page_size(page_size: u64) -> Result<u64> {
    if page_size == 0 {
        return Err(Error::invalid_argument("page_size", "must be positive"));
    }
    Ok(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_content() {
        assert_eq!(token_content(Some("abc")), Some("abc"));
        assert_eq!(token_content(Some("")), None);
        assert_eq!(token_content(None), None);
    }

    #[test]
    fn test_checked_non_negative() {
        assert_eq!(checked_non_negative(0, "page").unwrap(), 0);
        assert_eq!(checked_non_negative(42, "page").unwrap(), 42);

        let err = checked_non_negative(-1, "page").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("page"));
    }

    #[test]
    fn test_checked_page_size() {
        assert_eq!(checked_page_size(10).unwrap(), 10);
        assert!(checked_page_size(0).unwrap_err().is_invalid_argument());
    }
}
