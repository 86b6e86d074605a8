/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Kick off one token-then-posts flow. Issued for every trigger key,
    /// including while an earlier flow is still running.
    StartFlow,

    // System
    Quit,
}

/// Terminal result of one flow, pre-rendered for the output area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Success { rendered: String },
    Failure { message: String },
}

/// What a background flow task reports back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    Completed { flow_id: u64, outcome: FlowOutcome },
}
