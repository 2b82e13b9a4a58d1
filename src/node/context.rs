use std::sync::Arc;

use tokio::sync::mpsc::Sender;
use tracing::warn;

use crate::engine::errors::NodeError;
use crate::msg::types::Msg;
use crate::storage::reader::TimeseriesReader;

/// Terminal routing outcome for one message.
#[derive(Debug)]
pub enum Routed {
    Success(Msg),
    Failure(Msg, NodeError),
}

/// The node's view of its host: tenant identity, the timeseries store and
/// the downstream routing sink.
pub struct NodeContext {
    tenant_id: String,
    timeseries: Arc<dyn TimeseriesReader>,
    out: Sender<Routed>,
}

impl NodeContext {
    pub fn new(
        tenant_id: impl Into<String>,
        timeseries: Arc<dyn TimeseriesReader>,
        out: Sender<Routed>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            timeseries,
            out,
        }
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn timeseries(&self) -> &dyn TimeseriesReader {
        self.timeseries.as_ref()
    }

    pub async fn tell_success(&self, msg: Msg) {
        if self.out.send(Routed::Success(msg)).await.is_err() {
            warn!(target: "ts_enrich::node", "Routing sink closed; success output dropped");
        }
    }

    pub async fn tell_failure(&self, msg: Msg, error: NodeError) {
        if self.out.send(Routed::Failure(msg, error)).await.is_err() {
            warn!(target: "ts_enrich::node", "Routing sink closed; failure output dropped");
        }
    }
}
