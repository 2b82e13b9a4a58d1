use serde_json::json;

use crate::node::config::{FETCH_MODE_FIRST, FetchMode, GetTelemetryConfig};
use crate::storage::types::{MAX_FETCH_SIZE, SortOrder};

#[test]
fn test_default_configuration() {
    let config = GetTelemetryConfig::default();
    assert!(config.latest_ts_key_names.is_empty());
    assert_eq!(config.fetch_mode, FETCH_MODE_FIRST);
    assert_eq!(config.order_by, "ASC");
    assert_eq!(config.aggregation, "NONE");
    assert_eq!(config.limit, MAX_FETCH_SIZE);
    assert!(!config.use_metadata_interval_patterns);
    assert_eq!(config.start_interval, 2);
    assert_eq!(config.start_interval_time_unit, "MINUTES");
    assert_eq!(config.end_interval, 1);
    assert_eq!(config.end_interval_time_unit, "MINUTES");
    assert_eq!(config.start_interval_pattern, "");
    assert_eq!(config.end_interval_pattern, "");
}

#[test]
fn test_deserializes_camel_case_document() {
    let config: GetTelemetryConfig = serde_json::from_value(json!({
        "latestTsKeyNames": ["temperature", "${sensor}"],
        "fetchMode": "ALL",
        "orderBy": "DESC",
        "aggregation": "AVG",
        "limit": 50,
        "useMetadataIntervalPatterns": true,
        "startIntervalPattern": "${startTs}",
        "endIntervalPattern": "${endTs}"
    }))
    .unwrap();

    assert_eq!(config.latest_ts_key_names, vec!["temperature", "${sensor}"]);
    assert_eq!(config.fetch_mode, "ALL");
    assert_eq!(config.order_by, "DESC");
    assert_eq!(config.aggregation, "AVG");
    assert_eq!(config.limit, 50);
    assert!(config.use_metadata_interval_patterns);
    assert_eq!(config.start_interval_pattern, "${startTs}");
    assert_eq!(config.end_interval_pattern, "${endTs}");
}

#[test]
fn test_absent_fields_fall_back_to_defaults() {
    let config: GetTelemetryConfig = serde_json::from_value(json!({
        "latestTsKeyNames": ["temperature"]
    }))
    .unwrap();

    assert_eq!(config.fetch_mode, FETCH_MODE_FIRST);
    assert_eq!(config.start_interval, 2);
    assert_eq!(config.end_interval, 1);
}

#[test]
fn test_fetch_mode_parse_tolerates_unknown_names_as_last() {
    assert_eq!(FetchMode::parse("FIRST"), FetchMode::First);
    assert_eq!(FetchMode::parse("LAST"), FetchMode::Last);
    assert_eq!(FetchMode::parse("ALL"), FetchMode::All);
    assert_eq!(FetchMode::parse("NEWEST"), FetchMode::Last);
    assert_eq!(FetchMode::parse(""), FetchMode::Last);
}

#[test]
fn test_effective_order_per_mode() {
    assert_eq!(
        FetchMode::First.effective_order(SortOrder::Desc),
        SortOrder::Asc
    );
    assert_eq!(
        FetchMode::Last.effective_order(SortOrder::Asc),
        SortOrder::Desc
    );
    assert_eq!(
        FetchMode::All.effective_order(SortOrder::Desc),
        SortOrder::Desc
    );
}

#[test]
fn test_effective_limit_per_mode() {
    assert_eq!(FetchMode::First.effective_limit(500), 1);
    assert_eq!(FetchMode::Last.effective_limit(500), 1);
    assert_eq!(FetchMode::All.effective_limit(500), 500);
}
