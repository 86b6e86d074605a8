use super::{AppState, OutputState};
use crate::events::{FlowEvent, FlowOutcome};

/// Folds one flow event into the state. No side effects.
pub fn reduce_flow_event(state: &mut AppState, event: FlowEvent) {
    match event {
        FlowEvent::Completed { flow_id, outcome } => {
            state.flows_completed += 1;
            tracing::debug!(
                flow_id,
                in_flight = state.flows_in_flight(),
                "Flow completed"
            );
            // No staleness check: completions land in arrival order and the
            // last one wins, even if it belongs to an older flow.
            state.output = match outcome {
                FlowOutcome::Success { rendered } => OutputState::Rendered(rendered),
                FlowOutcome::Failure { message } => OutputState::Failed(message),
            };
        }
    }
}
