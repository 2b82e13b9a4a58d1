use crate::storage::types::{Aggregation, SortOrder, TsValue};

#[test]
fn test_string_value_renders_as_is() {
    assert_eq!(TsValue::Str("on".to_string()).as_string(), "on");
}

#[test]
fn test_long_value_renders_as_literal() {
    assert_eq!(TsValue::Long(-42).as_string(), "-42");
}

#[test]
fn test_bool_value_renders_as_literal() {
    assert_eq!(TsValue::Bool(true).as_string(), "true");
    assert_eq!(TsValue::Bool(false).as_string(), "false");
}

#[test]
fn test_double_value_keeps_decimal_point() {
    assert_eq!(TsValue::Double(21.5).as_string(), "21.5");
    assert_eq!(TsValue::Double(20.0).as_string(), "20.0");
}

#[test]
fn test_json_value_renders_raw_text() {
    let raw = r#"{"a":1}"#;
    assert_eq!(TsValue::Json(raw.to_string()).as_string(), raw);
}

#[test]
fn test_aggregation_parse_is_case_sensitive() {
    assert_eq!("MIN".parse::<Aggregation>(), Ok(Aggregation::Min));
    assert_eq!("COUNT".parse::<Aggregation>(), Ok(Aggregation::Count));
    assert_eq!("NONE".parse::<Aggregation>(), Ok(Aggregation::None));
    assert!("min".parse::<Aggregation>().is_err());
    assert!("Average".parse::<Aggregation>().is_err());
}

#[test]
fn test_sort_order_defaults_to_ascending() {
    assert_eq!(SortOrder::parse_or_asc(""), SortOrder::Asc);
    assert_eq!(SortOrder::parse_or_asc("ASC"), SortOrder::Asc);
    assert_eq!(SortOrder::parse_or_asc("DESC"), SortOrder::Desc);
    assert_eq!(SortOrder::parse_or_asc("desc"), SortOrder::Asc);
}
