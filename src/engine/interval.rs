use std::str::FromStr;

use chrono::Utc;
use tracing::debug;

use crate::engine::errors::{NodeError, ValidationError};
use crate::msg::pattern;
use crate::msg::types::Msg;
use crate::node::config::GetTelemetryConfig;

/// Offset unit for static intervals, configured by its Java-style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Convert an offset magnitude in this unit to milliseconds.
    /// Sub-millisecond units truncate toward zero.
    pub fn to_millis(self, amount: i64) -> i64 {
        match self {
            TimeUnit::Nanoseconds => amount / 1_000_000,
            TimeUnit::Microseconds => amount / 1_000,
            TimeUnit::Milliseconds => amount,
            TimeUnit::Seconds => amount * 1_000,
            TimeUnit::Minutes => amount * 60_000,
            TimeUnit::Hours => amount * 3_600_000,
            TimeUnit::Days => amount * 86_400_000,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NANOSECONDS" => Ok(TimeUnit::Nanoseconds),
            "MICROSECONDS" => Ok(TimeUnit::Microseconds),
            "MILLISECONDS" => Ok(TimeUnit::Milliseconds),
            "SECONDS" => Ok(TimeUnit::Seconds),
            "MINUTES" => Ok(TimeUnit::Minutes),
            "HOURS" => Ok(TimeUnit::Hours),
            "DAYS" => Ok(TimeUnit::Days),
            _ => Err(()),
        }
    }
}

/// Resolved query range for one message, in epoch milliseconds. A bound is
/// `None` when its configured pattern did not resolve to a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interval {
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
}

/// Interval configuration, parsed once at node init.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalSpec {
    /// Bounds are offsets back from the moment the message is processed.
    Static {
        start_offset_ms: i64,
        end_offset_ms: i64,
    },
    /// Bounds come from `${...}` patterns substituted per message.
    Dynamic {
        start_pattern: String,
        end_pattern: String,
    },
}

impl IntervalSpec {
    pub fn from_config(config: &GetTelemetryConfig) -> Result<Self, NodeError> {
        if config.use_metadata_interval_patterns {
            return Ok(IntervalSpec::Dynamic {
                start_pattern: config.start_interval_pattern.clone(),
                end_pattern: config.end_interval_pattern.clone(),
            });
        }
        let start_unit = parse_unit(&config.start_interval_time_unit)?;
        let end_unit = parse_unit(&config.end_interval_time_unit)?;
        Ok(IntervalSpec::Static {
            start_offset_ms: start_unit.to_millis(config.start_interval),
            end_offset_ms: end_unit.to_millis(config.end_interval),
        })
    }

    /// Resolve the interval for one message. In static mode `now` is
    /// captured once so both bounds are computed against the same instant.
    pub fn resolve(&self, msg: &Msg) -> Interval {
        match self {
            IntervalSpec::Static {
                start_offset_ms,
                end_offset_ms,
            } => {
                let now = Utc::now().timestamp_millis();
                Interval {
                    start_ts: Some(now - start_offset_ms),
                    end_ts: Some(now - end_offset_ms),
                }
            }
            IntervalSpec::Dynamic {
                start_pattern,
                end_pattern,
            } => Interval {
                start_ts: resolve_bound(start_pattern, msg),
                end_ts: resolve_bound(end_pattern, msg),
            },
        }
    }

    /// Produce the effective `[start_ts, end_ts]` range for one message.
    ///
    /// Dynamic intervals are validated first, in two phases: the undefined
    /// check (key presence in message metadata) and then the format check,
    /// in that order, so the caller can tell "missing" from "malformed".
    /// The interval is resolved once; each bound's nullability drives the
    /// format errors.
    pub fn effective_range(&self, msg: &Msg) -> Result<(i64, i64), ValidationError> {
        match self {
            IntervalSpec::Static {
                start_offset_ms,
                end_offset_ms,
            } => {
                let now = Utc::now().timestamp_millis();
                Ok((now - start_offset_ms, now - end_offset_ms))
            }
            IntervalSpec::Dynamic {
                start_pattern,
                end_pattern,
            } => {
                let start_key = pattern::strip_placeholder(start_pattern);
                let end_key = pattern::strip_placeholder(end_pattern);
                check_defined(&start_key, &end_key, msg)?;

                let interval = self.resolve(msg);
                debug!(
                    target: "ts_enrich::interval",
                    start = ?interval.start_ts,
                    end = ?interval.end_ts,
                    "Resolved dynamic interval"
                );
                match (interval.start_ts, interval.end_ts) {
                    (Some(start_ts), Some(end_ts)) => Ok((start_ts, end_ts)),
                    (None, None) => Err(ValidationError::BothInvalidFormat(start_key, end_key)),
                    (None, Some(_)) => Err(ValidationError::InvalidFormat(start_key)),
                    (Some(_), None) => Err(ValidationError::InvalidFormat(end_key)),
                }
            }
        }
    }
}

/// Undefined check: both boundary keys must be present in the message
/// metadata. Payload is not consulted here.
fn check_defined(start_key: &str, end_key: &str, msg: &Msg) -> Result<(), ValidationError> {
    let start_defined = msg.metadata_value(start_key).is_some();
    let end_defined = msg.metadata_value(end_key).is_some();
    match (start_defined, end_defined) {
        (false, false) => Err(ValidationError::BothUndefined(
            start_key.to_string(),
            end_key.to_string(),
        )),
        (false, true) => Err(ValidationError::Undefined(start_key.to_string())),
        (true, false) => Err(ValidationError::Undefined(end_key.to_string())),
        (true, true) => Ok(()),
    }
}

fn resolve_bound(bound_pattern: &str, msg: &Msg) -> Option<i64> {
    pattern::process_pattern(bound_pattern, msg).parse::<i64>().ok()
}

fn parse_unit(raw: &str) -> Result<TimeUnit, NodeError> {
    raw.parse()
        .map_err(|_| NodeError::Config(format!("unknown time unit: '{raw}'")))
}
