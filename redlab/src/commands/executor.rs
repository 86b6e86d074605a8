use crate::events::AppCommand;
use crate::flow::FlowRunner;
use crate::state::AppState;

/// Apply a command: mutate state and spawn flow tasks as needed
pub fn execute_command(command: AppCommand, state: &mut AppState, flow_runner: &FlowRunner) {
    match command {
        AppCommand::StartFlow => {
            // Loading state is set before the task is spawned, so the output
            // area flips on the same frame as the trigger.
            let flow_id = state.begin_flow();
            tracing::info!(flow_id, "Starting flow");
            flow_runner.spawn(flow_id);
        }

        AppCommand::Quit => state.should_quit = true,
    }
}

/// Test-only twin of [`execute_command`].
///
/// Updates state the same way but spawns no tasks; tests inject flow
/// completions as events instead.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    match command {
        AppCommand::StartFlow => {
            state.begin_flow();
        }

        AppCommand::Quit => state.should_quit = true,
    }
}
