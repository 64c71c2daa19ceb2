//! Table response type

use serde::{Deserialize, Serialize};

/// A server-side processing response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse<T> {
    /// Draw counter echoed from the request
    #[serde(default)]
    pub draw: i64,

    /// Total records before filtering (0 when the backend does not count)
    #[serde(default)]
    pub total_records: i64,

    /// Total records after filtering (0 when the backend does not count)
    #[serde(default)]
    pub total_filtered_records: i64,

    /// Page data
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error message to show instead of data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Token to send back for the next page; `None` on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

impl<T> TableResponse<T> {
    /// Create a success response
    pub fn success(
        draw: i64,
        total_records: i64,
        total_filtered_records: i64,
        data: T,
        continuation_token: Option<String>,
    ) -> Self {
        Self {
            draw,
            total_records,
            total_filtered_records,
            data: Some(data),
            error: None,
            continuation_token,
        }
    }

    /// Create an error response
    pub fn fail(draw: i64, message: impl Into<String>) -> Self {
        Self {
            draw,
            total_records: 0,
            total_filtered_records: 0,
            data: None,
            error: Some(message.into()),
            continuation_token: None,
        }
    }

    /// Check if this is an error response
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
