use crate::commands::handlers;
use crate::events::{AppCommand, FlowEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};

/// How commands take effect: the real implementation spawns flow tasks,
/// the test one updates state synchronously with no HTTP involved.
pub trait FlowHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Application core with no terminal dependency.
///
/// Holds the UI state and routes keys and flow events through the handler
/// and reducer; the event loop and the test harness drive it the same way.
pub struct AppCore<H: FlowHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: FlowHandler> AppCore<H> {
    pub fn new(handler: H) -> Self {
        Self {
            ui_state: AppState::new(),
            handler,
        }
    }

    /// Map a key press to a command and execute it.
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            self.handler
                .execute_with_context(command, &mut self.ui_state);
        }
    }

    /// Apply a flow completion to the state.
    ///
    /// In production these arrive from spawned tasks over the channel; tests
    /// inject them directly to replay completions in any order.
    pub fn handle_flow_event(&mut self, event: FlowEvent) {
        reducer::reduce_flow_event(&mut self.ui_state, event);
    }

    /// Current state, for rendering or assertions.
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
