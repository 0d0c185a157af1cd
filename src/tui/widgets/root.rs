//! Root layout widget - orchestrates main layout structure

use crate::app::state::AppState;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::{help, swatch_list, toggle_button};

/// Main layout structure:
/// ┌──────────────────────────────────────┐
/// │            [ Light ]                 │
/// │ ╭─ Swatches ───────────────────────╮ │
/// │ │ Steel Blue                       │ │
/// │ │ Swatch Code: #4D7EA8  ██████     │ │
/// │ │ ...                              │ │
/// │ ╰──────────────────────────────────╯ │
/// │ ? help  t toggle  q quit    status   │
/// └──────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let theme = Theme::for_state(state.theme);
    let root = frame.area();

    // Page background for the whole screen
    frame.render_widget(Block::default().style(theme.base_style()), root);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                      // Top padding
            Constraint::Length(toggle_button::HEIGHT), // Button
            Constraint::Length(1),                      // Gap
            Constraint::Min(swatch_list::CARD_HEIGHT),  // Swatches
            Constraint::Length(1),                      // Footer
        ])
        .split(root);

    let [button_area] = Layout::horizontal([Constraint::Length(toggle_button::WIDTH)])
        .flex(Flex::Center)
        .areas(rows[1]);
    state.button_area = button_area;

    let list_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2), // Left padding
            Constraint::Min(10),   // Content
            Constraint::Length(2), // Right padding
        ])
        .split(rows[3])[1];

    toggle_button::render(frame, state, &theme, button_area);
    swatch_list::render(frame, state, &theme, list_area);
    render_footer(frame, state, &theme, rows[4]);

    if state.show_help {
        help::render(frame, &theme, root);
    }
}

fn render_footer(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let hint = Style::default().fg(theme.palette.primary);
    let key = Style::default().fg(theme.palette.secondary);

    let mut spans = vec![
        Span::styled("  ? ", key),
        Span::styled("help  ", hint),
        Span::styled("t ", key),
        Span::styled("toggle  ", hint),
        Span::styled("q ", key),
        Span::styled("quit", hint),
    ];
    if !state.status.is_empty() {
        spans.push(Span::styled(format!("   {}", state.status), key));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
