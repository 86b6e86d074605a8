use crate::app_core::{AppCore, FlowHandler};
use crate::commands::executor;
use crate::events::{AppCommand, FlowEvent};
use crate::input::{Key, KeyEvent};
use crate::state::AppState;

/// Flow handler that spawns nothing.
///
/// Commands go through [`executor::execute_command_sync`], so a trigger key
/// flips the state to loading but no task runs; tests inject the completion
/// as a [`FlowEvent`] themselves.
pub struct MockFlowHandler;

impl MockFlowHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockFlowHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowHandler for MockFlowHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command_sync(command, state);
    }
}

/// Test facade over [`AppCore`]: feed keys and flow events, assert on state.
pub struct TestApp {
    core: AppCore<MockFlowHandler>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockFlowHandler::new()),
        }
    }

    /// Send a single key press.
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send several key presses in order.
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Inject a flow completion, as if a spawned task had finished.
    pub fn send_flow_event(&mut self, event: FlowEvent) {
        self.core.handle_flow_event(event);
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn assert_should_quit(&self) {
        assert!(self.core.should_quit(), "expected quit flag to be set");
    }

    pub fn assert_not_quit(&self) {
        assert!(!self.core.should_quit(), "expected quit flag to be clear");
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
