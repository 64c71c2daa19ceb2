//! Table request types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A server-side processing request issued by the table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRequest {
    /// Draw counter, echoed back by the server
    #[serde(default)]
    pub draw: i64,

    /// Offset of the first requested record
    #[serde(default)]
    pub start: i64,

    /// Number of records to return (negative means all)
    #[serde(default)]
    pub length: i64,

    /// Global search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<TableSearch>,

    /// Ordering, highest priority first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<TableOrder>>,

    /// Continuation token returned by the previous response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

impl TableRequest {
    /// Create a request for a window of records
    pub fn new(draw: i64, start: i64, length: i64) -> Self {
        Self {
            draw,
            start,
            length,
            ..Default::default()
        }
    }

    /// Set the search
    #[must_use]
    pub fn with_search(mut self, search: TableSearch) -> Self {
        self.search = Some(search);
        self
    }

    /// Set the ordering
    #[must_use]
    pub fn with_order(mut self, order: Vec<TableOrder>) -> Self {
        self.order = if order.is_empty() { None } else { Some(order) };
        self
    }

    /// Set the continuation token
    #[must_use]
    pub fn with_continuation_token(mut self, token: Option<String>) -> Self {
        self.continuation_token = token;
        self
    }

    /// Search value, if one with content is present
    pub fn search_value(&self) -> Option<&str> {
        self.search
            .as_ref()
            .and_then(|s| s.value.as_deref())
            .filter(|v| !v.is_empty())
    }

    /// Ordering as a slice (empty when absent)
    pub fn orders(&self) -> &[TableOrder] {
        self.order.as_deref().unwrap_or_default()
    }
}

/// Global search parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSearch {
    /// Search value
    #[serde(default)]
    pub value: Option<String>,

    /// Treat the value as a regular expression
    #[serde(default)]
    pub regex: bool,

    /// Match without regard to case
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
}

fn default_case_insensitive() -> bool {
    true
}

impl Default for TableSearch {
    fn default() -> Self {
        Self {
            value: None,
            regex: false,
            case_insensitive: true,
        }
    }
}

impl TableSearch {
    /// Create a plain case-insensitive search
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Create a regex search
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            value: Some(pattern.into()),
            regex: true,
            ..Default::default()
        }
    }

    /// Check if the search has no value
    pub fn is_empty(&self) -> bool {
        self.value.as_deref().map_or(true, str::is_empty)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    #[default]
    #[serde(alias = "ASC", alias = "ascending")]
    Asc,
    /// Descending
    #[serde(alias = "DESC", alias = "descending")]
    Desc,
}

impl SortDirection {
    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(Error::invalid_argument(
                "direction",
                format!("expected asc or desc, got '{other}'"),
            )),
        }
    }
}

/// One ordering clause
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOrder {
    /// Column name to order by
    #[serde(default)]
    pub column: Option<String>,

    /// Direction of ordering
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl TableOrder {
    /// Order by a column ascending
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: Some(SortDirection::Asc),
        }
    }

    /// Order by a column descending
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: Some(SortDirection::Desc),
        }
    }

    /// Direction, defaulting to ascending
    pub fn direction_or_default(&self) -> SortDirection {
        self.direction.unwrap_or_default()
    }
}

/// Parses `column` or `column:direction`
impl FromStr for TableOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (column, direction) = match s.split_once(':') {
            Some((column, direction)) => (column, Some(direction.parse::<SortDirection>()?)),
            None => (s, None),
        };

        let column = column.trim();
        if column.is_empty() {
            return Err(Error::invalid_argument("order", "column name is empty"));
        }

        Ok(Self {
            column: Some(column.to_string()),
            direction,
        })
    }
}
