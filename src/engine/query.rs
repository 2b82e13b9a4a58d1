use tracing::debug;

use crate::node::config::FetchMode;
use crate::storage::types::{Aggregation, ReadTsQuery, SortOrder};

/// Builds one range read per resolved key for a single message.
///
/// The window contract mirrors the store's range validation: raw reads
/// (`NONE`) use a window of 1, aggregated reads collapse the whole range
/// into a single bucket. It must not change independently of the store.
pub struct QueryBuilder<'a> {
    keys: &'a [String],
    start_ts: i64,
    end_ts: i64,
    aggregation: Aggregation,
    fetch_mode: FetchMode,
    order_by: SortOrder,
    limit: u32,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(
        keys: &'a [String],
        range: (i64, i64),
        aggregation: Aggregation,
        fetch_mode: FetchMode,
        order_by: SortOrder,
        limit: u32,
    ) -> Self {
        Self {
            keys,
            start_ts: range.0,
            end_ts: range.1,
            aggregation,
            fetch_mode,
            order_by,
            limit,
        }
    }

    pub fn build(&self) -> Vec<ReadTsQuery> {
        let interval = if self.aggregation == Aggregation::None {
            1
        } else {
            self.end_ts - self.start_ts
        };
        let order = self.fetch_mode.effective_order(self.order_by);
        let limit = self.fetch_mode.effective_limit(self.limit);

        debug!(
            target: "ts_enrich::query",
            keys = self.keys.len(),
            start_ts = self.start_ts,
            end_ts = self.end_ts,
            window = interval,
            limit,
            order = %order,
            "Building read queries"
        );

        self.keys
            .iter()
            .map(|key| ReadTsQuery {
                key: key.clone(),
                start_ts: self.start_ts,
                end_ts: self.end_ts,
                interval,
                limit,
                aggregation: self.aggregation,
                order,
            })
            .collect()
    }
}
