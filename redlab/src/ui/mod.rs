pub mod layouts;
pub mod theme;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{AppState, OutputState};

const HELP_TEXT: &str = "f/Enter: fetch posts  |  q/Esc: quit";
const IDLE_HINT: &str = "Press f or Enter to fetch posts";

/// Draws the whole screen from the current state. Pure: reads state,
/// writes to the frame, touches nothing else.
pub fn render_app(f: &mut Frame, state: &AppState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    render_title(f, title_area, state);
    render_output(f, content_area, state);
    render_help_bar(f, help_area);
}

fn render_title(f: &mut Frame, area: Rect, state: &AppState) {
    let (text_area, status_area) = layouts::title_with_status(area);

    let title = Paragraph::new(Span::styled("redlab", theme::title_style()));
    f.render_widget(title, text_area);

    let in_flight = state.flows_in_flight();
    if in_flight > 0 {
        let status = Paragraph::new(Span::styled(
            format!("{in_flight} in flight"),
            theme::loading_style(),
        ))
        .alignment(Alignment::Right);
        f.render_widget(status, status_area);
    }
}

/// Render the output area: idle hint, loading marker, pretty-printed
/// response, or error line, depending on the newest flow completion.
fn render_output(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title("Output");

    let output = match &state.output {
        OutputState::Idle => Paragraph::new(IDLE_HINT)
            .style(theme::help_text_style())
            .alignment(Alignment::Center),
        _ => {
            let style = match &state.output {
                OutputState::Loading => theme::loading_style(),
                OutputState::Failed(_) => theme::error_style(),
                _ => Style::default(),
            };
            Paragraph::new(state.output.display_text())
                .style(style)
                .wrap(Wrap { trim: false })
        }
    };

    f.render_widget(output.block(block), area);
}

fn render_help_bar(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP_TEXT)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}
