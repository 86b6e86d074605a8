//! Theme constants and style functions shared by the renderer.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Help bar and hint text
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Title bar text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Loading marker and the in-flight counter
pub const COLOR_LOADING: Color = Color::Yellow;

/// Failed-flow output
pub const COLOR_ERROR: Color = Color::Red;

// =============================================================================
// Layout Constants
// =============================================================================

/// Margin around the whole screen
pub const SCREEN_MARGIN: u16 = 2;

/// Height of the title bar
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the bordered help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

// =============================================================================
// Style Functions
// =============================================================================

pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

pub fn error_style() -> Style {
    Style::default().fg(COLOR_ERROR)
}
