pub mod reader;
pub mod types;

pub use reader::{StorageError, TimeseriesReader};
pub use types::{Aggregation, MAX_FETCH_SIZE, ReadTsQuery, SortOrder, TsEntry, TsValue};

#[cfg(test)]
mod types_tests;
