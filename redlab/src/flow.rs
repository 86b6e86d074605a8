use std::sync::Arc;

use redlab_api::{Client, PostQuery};
use tokio::sync::mpsc;

use crate::events::{FlowEvent, FlowOutcome};

/// Spawns token-then-posts flows as detached tasks.
///
/// Flows are never cancelled or deduplicated: every trigger spawns a fresh
/// task, overlapping flows all run to completion, and each reports back over
/// the event channel when it finishes.
#[derive(Clone)]
pub struct FlowRunner {
    pub api_client: Arc<Client>,
    pub query: PostQuery,
    pub flow_tx: mpsc::UnboundedSender<FlowEvent>,
}

impl FlowRunner {
    pub fn new(
        api_client: Arc<Client>,
        query: PostQuery,
        flow_tx: mpsc::UnboundedSender<FlowEvent>,
    ) -> Self {
        Self {
            api_client,
            query,
            flow_tx,
        }
    }

    /// Start one flow. Returns immediately; the result arrives as a
    /// [`FlowEvent::Completed`] on the channel.
    pub fn spawn(&self, flow_id: u64) {
        let api_client = self.api_client.clone();
        let query = self.query.clone();
        let flow_tx = self.flow_tx.clone();

        tokio::spawn(async move {
            tracing::info!(flow_id, subreddit = %query.subreddit, "Running flow");
            let outcome = match api_client.fetch_flow(&query).await {
                Ok(response) => FlowOutcome::Success {
                    rendered: response.pretty(),
                },
                Err(e) => {
                    tracing::warn!(flow_id, error = %e, "Flow failed");
                    FlowOutcome::Failure {
                        message: e.to_string(),
                    }
                }
            };
            // The receiver is gone during shutdown; nothing to do about it
            let _ = flow_tx.send(FlowEvent::Completed { flow_id, outcome });
        });
    }
}
