use tracing::{debug, warn};

use crate::engine::encode;
use crate::engine::errors::NodeError;
use crate::engine::interval::IntervalSpec;
use crate::engine::query::QueryBuilder;
use crate::msg::pattern;
use crate::msg::types::Msg;
use crate::node::config::{FetchMode, GetTelemetryConfig};
use crate::node::context::NodeContext;
use crate::storage::reader::TimeseriesReader;
use crate::storage::types::{Aggregation, MAX_FETCH_SIZE, SortOrder};

/// Enrichment node: fetches originator telemetry for the configured keys
/// and time range and writes it into the message metadata.
///
/// Construction validates the configuration; a constructed node is ready
/// and stateless across messages, so one instance may serve any number of
/// concurrent messages.
#[derive(Debug)]
pub struct GetTelemetryNode {
    ts_key_names: Vec<String>,
    fetch_mode: FetchMode,
    order_by: SortOrder,
    aggregation: Aggregation,
    limit: u32,
    interval: IntervalSpec,
}

impl GetTelemetryNode {
    pub fn new(config: GetTelemetryConfig) -> Result<Self, NodeError> {
        let aggregation = parse_aggregation(&config.aggregation)?;
        let interval = IntervalSpec::from_config(&config)?;
        let limit = if config.limit == 0 {
            MAX_FETCH_SIZE
        } else {
            config.limit
        };
        Ok(Self {
            ts_key_names: config.latest_ts_key_names,
            fetch_mode: FetchMode::parse(&config.fetch_mode),
            order_by: SortOrder::parse_or_asc(&config.order_by),
            aggregation,
            limit,
            interval,
        })
    }

    /// Build a node from the raw JSON configuration document.
    pub fn from_json(raw: serde_json::Value) -> Result<Self, NodeError> {
        let config: GetTelemetryConfig =
            serde_json::from_value(raw).map_err(|e| NodeError::Config(e.to_string()))?;
        Self::new(config)
    }

    /// Process one message: route the enriched copy to the success sink,
    /// or the original message plus the root cause to the failure sink.
    /// Never retries; retry policy belongs to the store or the host.
    pub async fn on_msg(&self, ctx: &NodeContext, msg: Msg) {
        if self.ts_key_names.is_empty() {
            ctx.tell_failure(msg, NodeError::TelemetryNotSelected).await;
            return;
        }
        match self.enrich(ctx, &msg).await {
            Ok(enriched) => ctx.tell_success(enriched).await,
            Err(error) => {
                warn!(
                    target: "ts_enrich::node",
                    originator = %msg.originator,
                    %error,
                    "Telemetry enrichment failed"
                );
                ctx.tell_failure(msg, error).await;
            }
        }
    }

    async fn enrich(&self, ctx: &NodeContext, msg: &Msg) -> Result<Msg, NodeError> {
        let range = self.interval.effective_range(msg)?;
        let keys = pattern::process_patterns(&self.ts_key_names, msg);
        let queries = QueryBuilder::new(
            &keys,
            range,
            self.aggregation,
            self.fetch_mode,
            self.order_by,
            self.limit,
        )
        .build();

        debug!(
            target: "ts_enrich::node",
            originator = %msg.originator,
            queries = queries.len(),
            "Submitting timeseries fetch"
        );
        let entries = ctx
            .timeseries()
            .find_all(ctx.tenant_id(), &msg.originator, queries)
            .await?;

        let mapping = encode::encode(self.fetch_mode, &entries)?;
        let mut enriched = msg.clone();
        encode::apply_to_metadata(&mut enriched, &keys, &mapping);
        Ok(enriched)
    }
}

fn parse_aggregation(raw: &str) -> Result<Aggregation, NodeError> {
    if raw.is_empty() {
        return Ok(Aggregation::None);
    }
    raw.parse()
        .map_err(|_| NodeError::Config(format!("unknown aggregation function: '{raw}'")))
}
