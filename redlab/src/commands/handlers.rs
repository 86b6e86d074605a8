use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::AppState;

/// Key bindings. None means the key does nothing.
///
/// There is deliberately no "already loading" check: triggering while a flow
/// is in flight starts another one.
pub fn handle_key_input(event: KeyEvent, _state: &AppState) -> Option<AppCommand> {
    match event.key {
        Key::Char('f') | Key::Enter => Some(AppCommand::StartFlow),
        Key::Char('q') | Key::Esc => Some(AppCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_for(key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), &AppState::new())
    }

    #[test]
    fn trigger_keys_start_a_flow() {
        assert_eq!(command_for(Key::Char('f')), Some(AppCommand::StartFlow));
        assert_eq!(command_for(Key::Enter), Some(AppCommand::StartFlow));
    }

    #[test]
    fn quit_keys_quit() {
        assert_eq!(command_for(Key::Char('q')), Some(AppCommand::Quit));
        assert_eq!(command_for(Key::Esc), Some(AppCommand::Quit));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(command_for(Key::Char('x')), None);
        assert_eq!(command_for(Key::Char('\0')), None);
    }

    #[test]
    fn trigger_is_not_suppressed_while_loading() {
        let mut state = AppState::new();
        state.begin_flow();
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('f')), &state),
            Some(AppCommand::StartFlow)
        );
    }
}
