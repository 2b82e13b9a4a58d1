use async_trait::async_trait;
use thiserror::Error;

use crate::storage::types::{ReadTsQuery, TsEntry};

/// Error reported by the timeseries store. Opaque to this crate; it is
/// carried to the failure sink unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("timeseries read failed: {0}")]
pub struct StorageError(pub String);

impl StorageError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Read access to the timeseries store backing an originator entity.
///
/// Implementations execute one read per query and return all entries in a
/// single flattened list, intermixed across keys. Entries for a given key
/// arrive in that query's requested sort order.
#[async_trait]
pub trait TimeseriesReader: Send + Sync {
    async fn find_all(
        &self,
        tenant_id: &str,
        entity_id: &str,
        queries: Vec<ReadTsQuery>,
    ) -> Result<Vec<TsEntry>, StorageError>;
}
