//! Tests for source module

use super::*;
use crate::dto::{TableOrder, TableSearch};
use crate::error::Error;
use pretty_assertions::assert_eq;

fn source(count: usize) -> InMemorySource<Employee> {
    InMemorySource::new(Employee::demo_set(count))
}

// ============================================================================
// Demo Data Tests
// ============================================================================

#[test]
fn test_demo_set_is_deterministic() {
    let a = Employee::demo_set(50);
    let b = Employee::demo_set(50);
    assert_eq!(a, b);
    assert_eq!(a.len(), 50);
    assert_eq!(a[0].id, 1);
    assert_eq!(a[49].id, 50);
    assert!(a.iter().all(|e| e.email.ends_with("@example.com")));
}

// ============================================================================
// Token Tests
// ============================================================================

#[test]
fn test_token_round_trip() {
    let request = TableRequest::new(1, 0, 10);
    let fingerprint = query_fingerprint(&request);

    let token = encode_token(40, fingerprint);
    assert_eq!(decode_token(&token, fingerprint).unwrap(), 40);
}

#[test]
fn test_token_rejected_for_other_query() {
    let plain = TableRequest::new(1, 0, 10);
    let searched = TableRequest::new(1, 0, 10).with_search(TableSearch::new("eng"));

    let token = encode_token(10, query_fingerprint(&plain));
    let err = decode_token(&token, query_fingerprint(&searched)).unwrap_err();
    assert!(matches!(err, Error::InvalidToken { .. }));
}

#[test]
fn test_garbage_token_rejected() {
    let err = decode_token("%%%not-base64", 0).unwrap_err();
    assert!(matches!(err, Error::InvalidToken { .. }));
}

// ============================================================================
// Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_first_page() {
    let source = source(25);
    let response = source.fetch(&TableRequest::new(1, 0, 10)).await.unwrap();

    let rows = response.data.unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].id, 1);
    assert_eq!(response.draw, 1);
    assert_eq!(response.total_records, 25);
    assert_eq!(response.total_filtered_records, 25);
    assert!(response.continuation_token.is_some());
}

#[tokio::test]
async fn test_fetch_follows_token() {
    let source = source(25);
    let first = source.fetch(&TableRequest::new(1, 0, 10)).await.unwrap();

    // `start` is ignored once a token is supplied
    let request =
        TableRequest::new(2, 0, 10).with_continuation_token(first.continuation_token.clone());
    let second = source.fetch(&request).await.unwrap();
    assert_eq!(second.data.unwrap()[0].id, 11);

    let request = TableRequest::new(3, 0, 10).with_continuation_token(second.continuation_token);
    let third = source.fetch(&request).await.unwrap();
    let rows = third.data.unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].id, 21);
    assert!(third.continuation_token.is_none());
}

#[tokio::test]
async fn test_fetch_by_start_offset() {
    let source = source(25);
    let response = source.fetch(&TableRequest::new(1, 20, 10)).await.unwrap();
    let rows = response.data.unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].id, 21);
}

#[tokio::test]
async fn test_fetch_negative_length_returns_rest() {
    let source = source(25);
    let response = source.fetch(&TableRequest::new(1, 5, -1)).await.unwrap();
    assert_eq!(response.data.unwrap().len(), 20);
    assert!(response.continuation_token.is_none());
}

#[tokio::test]
async fn test_fetch_zero_length_has_no_token() {
    let source = source(25);
    let response = source.fetch(&TableRequest::new(1, 0, 0)).await.unwrap();
    assert!(response.data.unwrap().is_empty());
    assert!(response.continuation_token.is_none());
}

#[tokio::test]
async fn test_fetch_negative_start_rejected() {
    let source = source(5);
    let err = source.fetch(&TableRequest::new(1, -5, 10)).await.unwrap_err();
    assert!(err.is_invalid_argument());
}

#[tokio::test]
async fn test_fetch_search_substring() {
    let source = source(60);
    let request = TableRequest::new(1, 0, 100).with_search(TableSearch::new("ENGINEERING"));
    let response = source.fetch(&request).await.unwrap();

    let rows = response.data.unwrap();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|e| e.department == "Engineering"));
    assert_eq!(response.total_filtered_records, rows.len() as i64);
    assert_eq!(response.total_records, 60);
}

#[tokio::test]
async fn test_fetch_search_case_sensitive() {
    let source = source(60);
    let mut search = TableSearch::new("engineering");
    search.case_insensitive = false;

    // Department names are capitalised and emails never contain the word
    let request = TableRequest::new(1, 0, 100).with_search(search);
    let response = source.fetch(&request).await.unwrap();
    assert!(response.data.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_search_regex() {
    let source = source(60);
    let request = TableRequest::new(1, 0, 100).with_search(TableSearch::regex("^(hr|sales)$"));
    let rows = source.fetch(&request).await.unwrap().data.unwrap();

    assert!(!rows.is_empty());
    assert!(rows
        .iter()
        .all(|e| e.department == "HR" || e.department == "Sales"));
}

#[tokio::test]
async fn test_fetch_invalid_regex() {
    let source = source(5);
    let request = TableRequest::new(1, 0, 10).with_search(TableSearch::regex("(unclosed"));
    let err = source.fetch(&request).await.unwrap_err();
    assert!(matches!(err, Error::Regex(_)));
}

#[tokio::test]
async fn test_fetch_multi_column_order() {
    let source = source(60);
    let request = TableRequest::new(1, 0, 100)
        .with_order(vec![TableOrder::asc("department"), TableOrder::desc("salary")]);
    let rows = source.fetch(&request).await.unwrap().data.unwrap();

    for pair in rows.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.department <= b.department);
        if a.department == b.department {
            assert!(a.salary >= b.salary);
        }
    }
}

#[tokio::test]
async fn test_fetch_hidden_totals() {
    let source = source(25).hide_totals(true);
    let response = source.fetch(&TableRequest::new(1, 0, 10)).await.unwrap();
    assert_eq!(response.total_records, 0);
    assert_eq!(response.total_filtered_records, 0);
    assert!(response.continuation_token.is_some());
}

#[tokio::test]
async fn test_fetch_stale_token_rejected() {
    let source = source(25);
    let first = source.fetch(&TableRequest::new(1, 0, 10)).await.unwrap();

    let request = TableRequest::new(2, 10, 10)
        .with_search(TableSearch::new("a"))
        .with_continuation_token(first.continuation_token);
    let err = source.fetch(&request).await.unwrap_err();
    assert!(matches!(err, Error::InvalidToken { .. }));
}
