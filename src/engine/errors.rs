use thiserror::Error;

use crate::storage::reader::StorageError;

/// Dynamic interval validation failures. The payload is the bare metadata
/// key, i.e. the configured pattern stripped of its placeholder decoration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Message metadata values: '{0}' and '{1}' are undefined")]
    BothUndefined(String, String),

    #[error("Message metadata value: '{0}' is undefined")]
    Undefined(String),

    #[error("Message metadata values: '{0}' and '{1}' have invalid format")]
    BothInvalidFormat(String, String),

    #[error("Message metadata value: '{0}' has invalid format")]
    InvalidFormat(String),
}

/// A stored Json-typed value that does not parse. Stored data is expected
/// to be well-formed, so this aborts the message instead of skipping the
/// entry.
#[derive(Debug, Error)]
#[error("Can't parse stored JSON value for key '{key}': {raw}")]
pub struct EncodingError {
    pub key: String,
    pub raw: String,
    #[source]
    pub source: serde_json::Error,
}

/// Every way processing a message can fail. Delivered to the failure sink
/// together with the message that triggered it.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("Telemetry is not selected!")]
    TelemetryNotSelected,

    #[error("invalid node configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
