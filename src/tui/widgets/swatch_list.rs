//! Swatch list widget - one card per record, alternating backgrounds

use crate::app::state::{AppState, Focus};
use crate::swatch::render::{DisplayItem, render as render_items};
use crate::tui::theme::{Theme, palette::parse_color_code};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Rows per card: name, code, spacer
pub const CARD_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme, area: Rect) {
    let focused = state.focus == Focus::List;
    let border_color = if focused {
        theme.palette.primary
    } else {
        theme.palette.secondary
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} Swatches ", theme.icons.palette))
        .title_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = render_items(&state.swatches, theme.palette);

    if items.is_empty() {
        let empty = Paragraph::new(Line::from("No swatches"))
            .style(Style::default().fg(theme.palette.secondary));
        frame.render_widget(empty, inner);
        return;
    }

    state.list_visible = (inner.height / CARD_HEIGHT) as usize;
    state.list.update_scroll(state.list_visible);

    let cards: Vec<ListItem> = items.iter().map(|item| card(item, theme)).collect();

    let mut list_state = ListState::default()
        .with_offset(state.list.scroll_offset)
        .with_selected(Some(state.list.selected));

    let symbol = if focused {
        format!("{} ", theme.icons.selected)
    } else {
        "  ".to_string()
    };
    let list = List::new(cards)
        .highlight_symbol(symbol.as_str())
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED));

    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn card<'a>(item: &DisplayItem<'a>, theme: &Theme) -> ListItem<'a> {
    let mut code_line = vec![Span::raw(format!(" Swatch Code: {} ", item.color_code))];
    if let Some(swatch) = parse_color_code(item.color_code) {
        code_line.push(Span::styled(theme.icons.chip, Style::default().fg(swatch)));
    }

    let text = Text::from(vec![
        Line::from(Span::styled(
            format!(" {}", item.color_name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(code_line),
        Line::default(),
    ]);

    ListItem::new(text).style(Style::default().fg(theme.palette.color).bg(item.background))
}
