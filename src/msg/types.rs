use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An in-flight message: the originator entity it belongs to, a mutable
/// string metadata store, and a JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Msg {
    pub originator: String,
    pub msg_type: String,
    pub metadata: HashMap<String, String>,
    pub payload: Value,
}

impl Msg {
    pub fn new(
        originator: impl Into<String>,
        msg_type: impl Into<String>,
        metadata: HashMap<String, String>,
        payload: Value,
    ) -> Self {
        Self {
            originator: originator.into(),
            msg_type: msg_type.into(),
            metadata,
            payload,
        }
    }

    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn put_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }
}
