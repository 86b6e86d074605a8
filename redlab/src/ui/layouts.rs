//! Layout builders shared by the renderer.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HELP_BAR_HEIGHT, SCREEN_MARGIN, TITLE_HEIGHT};

/// Vertical split into title bar, output area, and help bar.
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Splits the title bar into title text and a right-aligned status cell.
pub fn title_with_status(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(100), Constraint::Length(14)])
        .split(area);

    (chunks[0], chunks[1])
}
