pub mod reducer;

/// Content of the output area.
///
/// Flow completions overwrite this unconditionally, so with overlapping
/// flows the last event to arrive owns the output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputState {
    #[default]
    Idle,
    Loading,
    Rendered(String),
    Failed(String),
}

impl OutputState {
    /// Text shown in the output area for this state.
    pub fn display_text(&self) -> String {
        match self {
            OutputState::Idle => String::new(),
            OutputState::Loading => "Loading...".to_string(),
            OutputState::Rendered(text) => text.clone(),
            OutputState::Failed(message) => format!("Error: {message}"),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, OutputState::Loading)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub output: OutputState,
    /// Flows started since launch; doubles as the id of the newest flow.
    pub flows_started: u64,
    pub flows_completed: u64,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a new flow as started and switch the output to loading.
    /// Returns the id of the new flow.
    pub fn begin_flow(&mut self) -> u64 {
        self.flows_started += 1;
        self.output = OutputState::Loading;
        self.flows_started
    }

    pub fn flows_in_flight(&self) -> u64 {
        self.flows_started.saturating_sub(self.flows_completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_flow_sets_loading_and_counts_up() {
        let mut state = AppState::new();
        assert_eq!(state.begin_flow(), 1);
        assert_eq!(state.output.display_text(), "Loading...");
        assert_eq!(state.begin_flow(), 2);
        assert_eq!(state.flows_in_flight(), 2);
    }

    #[test]
    fn display_text_prefixes_failures() {
        let output = OutputState::Failed("token acquisition failed".to_string());
        assert_eq!(output.display_text(), "Error: token acquisition failed");
    }

    #[test]
    fn idle_output_is_empty() {
        assert_eq!(OutputState::Idle.display_text(), "");
    }
}
