//! Help overlay showing keybindings

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const KEYBINDS: [(&str, &str); 8] = [
    ("t", "Toggle light / dark"),
    ("Enter / Space", "Press focused button"),
    ("Tab", "Switch focus"),
    ("j / Down", "Next swatch"),
    ("k / Up", "Previous swatch"),
    ("g / G", "First / last swatch"),
    ("?", "Close this help"),
    ("q / Esc", "Quit"),
];

pub fn render(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup = centered(area, 44, KEYBINDS.len() as u16 + 2);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.primary))
        .title(format!(" {} Keybinds ", theme.icons.help))
        .title_style(Style::default().fg(theme.palette.primary))
        .style(theme.base_style());

    let lines: Vec<Line> = KEYBINDS
        .iter()
        .map(|(key, desc)| keybind(key, desc, theme))
        .collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:14}", key),
            Style::default()
                .fg(theme.palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.secondary)),
    ])
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
