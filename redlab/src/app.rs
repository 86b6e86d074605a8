use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use redlab_api::{Client, PostQuery};
use std::sync::Arc;

use crate::commands::{executor, handlers};
use crate::flow::FlowRunner;
use crate::input::KeyEvent;
use crate::logging::init_logging;
use crate::state::AppState;

pub struct App {
    api_client: Arc<Client>,
    query: PostQuery,
}

impl App {
    pub fn new(api_client: Client, query: PostQuery) -> Self {
        Self {
            api_client: Arc::new(api_client),
            query,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let _log_path = init_logging()?;

        tracing::info!("redlab starting");

        let mut terminal = self.init()?;

        let (flow_tx, mut flow_rx) = tokio::sync::mpsc::unbounded_channel();

        let mut ui_state = AppState::new();
        let flow_runner = FlowRunner::new(self.api_client.clone(), self.query.clone(), flow_tx);

        let mut event_stream = EventStream::new();

        tracing::info!("Event loop running");

        loop {
            terminal.draw(|f| {
                crate::ui::render_app(f, &ui_state);
            })?;

            tokio::select! {
                Some(Ok(event)) = event_stream.next() => {
                    match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            tracing::debug!("key press: {:?}", key);
                            if let Some(command) = handlers::handle_key_input(KeyEvent::from(key), &ui_state) {
                                tracing::info!("command: {:?}", command);
                                executor::execute_command(command, &mut ui_state, &flow_runner);
                            }
                        }
                        _ => {}
                    }
                }
                Some(flow_event) = flow_rx.recv() => {
                    tracing::debug!("Received flow event: {:?}", flow_event);
                    crate::state::reducer::reduce_flow_event(&mut ui_state, flow_event);
                }
            }

            // In-flight flows are detached tasks and are simply abandoned on quit
            if ui_state.should_quit {
                tracing::info!("Quit requested, leaving event loop");
                break;
            }
        }

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}
