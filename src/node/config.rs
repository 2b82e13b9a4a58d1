use serde::{Deserialize, Serialize};

use crate::storage::types::{MAX_FETCH_SIZE, SortOrder};

pub const FETCH_MODE_FIRST: &str = "FIRST";
pub const FETCH_MODE_LAST: &str = "LAST";
pub const FETCH_MODE_ALL: &str = "ALL";

/// Raw node configuration, deserialized once at init. Field names follow
/// the external camelCase configuration document; absent fields fall back
/// to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetTelemetryConfig {
    /// Telemetry keys to fetch; entries may contain `${...}` placeholders
    /// resolved against each message.
    pub latest_ts_key_names: Vec<String>,
    pub fetch_mode: String,
    /// Sampling order for `ALL` mode; empty means ascending.
    pub order_by: String,
    /// Aggregation function name; empty means `NONE`.
    pub aggregation: String,
    /// Row cap per key in `ALL` mode; 0 means the system maximum.
    pub limit: u32,
    /// When set, interval bounds come from the patterns below instead of
    /// the static offsets.
    pub use_metadata_interval_patterns: bool,
    pub start_interval: i64,
    pub start_interval_time_unit: String,
    pub end_interval: i64,
    pub end_interval_time_unit: String,
    pub start_interval_pattern: String,
    pub end_interval_pattern: String,
}

impl Default for GetTelemetryConfig {
    fn default() -> Self {
        Self {
            latest_ts_key_names: Vec::new(),
            fetch_mode: FETCH_MODE_FIRST.to_string(),
            order_by: "ASC".to_string(),
            aggregation: "NONE".to_string(),
            limit: MAX_FETCH_SIZE,
            use_metadata_interval_patterns: false,
            start_interval: 2,
            start_interval_time_unit: "MINUTES".to_string(),
            end_interval: 1,
            end_interval_time_unit: "MINUTES".to_string(),
            start_interval_pattern: String::new(),
            end_interval_pattern: String::new(),
        }
    }
}

/// How many readings per key a message asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    First,
    Last,
    All,
}

impl FetchMode {
    /// Parse the configured mode name. Unknown names behave as `Last`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            FETCH_MODE_ALL => FetchMode::All,
            FETCH_MODE_FIRST => FetchMode::First,
            _ => FetchMode::Last,
        }
    }

    /// Row order sent to the store: `First` reads from the interval start,
    /// `Last` from its end, `All` keeps the configured order.
    pub fn effective_order(self, configured: SortOrder) -> SortOrder {
        match self {
            FetchMode::First => SortOrder::Asc,
            FetchMode::Last => SortOrder::Desc,
            FetchMode::All => configured,
        }
    }

    /// Row cap sent to the store: single-row modes always read one row.
    pub fn effective_limit(self, configured: u32) -> u32 {
        match self {
            FetchMode::All => configured,
            FetchMode::First | FetchMode::Last => 1,
        }
    }
}
