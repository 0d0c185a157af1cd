//! Theme toggle button

use crate::app::state::AppState;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Padding, Paragraph},
};

pub const WIDTH: u16 = 24;
pub const HEIGHT: u16 = 3;

/// Render the button; its label names the mode a click switches to.
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let icon = theme.icons.target_mode(state.theme.is_dark_mode());
    let label = format!("{} {}", icon, state.theme.label());

    let button = Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .style(theme.button_style(state.button_highlighted()))
        .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(button, area);
}
