use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Hard cap on the number of rows a single read may return per key.
pub const MAX_FETCH_SIZE: u32 = 1000;

/// A stored telemetry value. The set of storage value types is closed;
/// `Json` carries the raw text exactly as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TsValue {
    Str(String),
    Long(i64),
    Bool(bool),
    Double(f64),
    Json(String),
}

impl TsValue {
    /// Natural string form of the value, used when a single reading is
    /// written to metadata without a timestamp wrapper.
    pub fn as_string(&self) -> String {
        match self {
            TsValue::Str(s) => s.clone(),
            TsValue::Long(v) => itoa::Buffer::new().format(*v).to_string(),
            TsValue::Bool(b) => b.to_string(),
            TsValue::Double(d) => ryu::Buffer::new().format(*d).to_string(),
            TsValue::Json(raw) => raw.clone(),
        }
    }
}

/// One timestamped reading for one key, as returned by the store.
/// Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsEntry {
    pub key: String,
    pub ts: i64,
    pub value: TsValue,
}

impl TsEntry {
    pub fn new(key: impl Into<String>, ts: i64, value: TsValue) -> Self {
        Self {
            key: key.into(),
            ts,
            value,
        }
    }
}

/// Reducer collapsing all readings inside the query window into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aggregation {
    Min,
    Max,
    Avg,
    Sum,
    Count,
    None,
}

impl Aggregation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Min => "MIN",
            Aggregation::Max => "MAX",
            Aggregation::Avg => "AVG",
            Aggregation::Sum => "SUM",
            Aggregation::Count => "COUNT",
            Aggregation::None => "NONE",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Aggregation {
    type Err = ();

    // Case-sensitive, matching the configured aggregation names exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MIN" => Ok(Aggregation::Min),
            "MAX" => Ok(Aggregation::Max),
            "AVG" => Ok(Aggregation::Avg),
            "SUM" => Ok(Aggregation::Sum),
            "COUNT" => Ok(Aggregation::Count),
            "NONE" => Ok(Aggregation::None),
            _ => Err(()),
        }
    }
}

/// Row order requested from the store. For single-row fetches the order
/// decides which end of the interval the row comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Parse a configured order string; anything other than `DESC`
    /// (including empty) falls back to ascending.
    pub fn parse_or_asc(raw: &str) -> Self {
        match raw {
            "DESC" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-key range read: the unit of work handed to the store.
///
/// `interval` is the aggregation window in milliseconds. A window of 1
/// means no bucketing (raw readings up to `limit`); when an aggregation
/// function is set the window spans the whole range so the store returns
/// one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadTsQuery {
    pub key: String,
    pub start_ts: i64,
    pub end_ts: i64,
    pub interval: i64,
    pub limit: u32,
    pub aggregation: Aggregation,
    pub order: SortOrder,
}
