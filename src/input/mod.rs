use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Focus};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let sent = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => {
                        tx.blocking_send(Event::Input(InputEvent::Key(k)))
                    }
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => {
                        tx.blocking_send(Event::Input(InputEvent::Mouse(m)))
                    }
                    Ok(CtEvent::Resize(_, _)) => tx.blocking_send(Event::Input(InputEvent::Resize)),
                    Ok(_) => Ok(()),
                    Err(e) => {
                        tracing::warn!("terminal read failed: {e}");
                        Ok(())
                    }
                };
                if sent.is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => handle_mouse(state, m),
        InputEvent::Key(k) if state.show_help => handle_help_overlay(k),
        InputEvent::Key(k) => handle_key(state, k),
    }
}

fn handle_mouse(state: &AppState, m: MouseEvent) -> Option<Action> {
    let over_button = state.button_area.contains(Position::new(m.column, m.row));
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) if over_button => Some(Action::ToggleTheme),
        MouseEventKind::Moved if over_button != state.button_hovered => {
            Some(Action::SetButtonHover(over_button))
        }
        MouseEventKind::ScrollUp => Some(Action::ListUp),
        MouseEventKind::ScrollDown => Some(Action::ListDown),
        _ => None,
    }
}

fn handle_help_overlay(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}

fn handle_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Char(' ') if state.focus == Focus::Button => Some(Action::Activate),

        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),

        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::GoTop),
        KeyCode::Char('G') | KeyCode::End => Some(Action::GoBottom),

        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swatch::builtin;
    use crate::tui::theme::ThemeState;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn state() -> AppState {
        let mut s = AppState::new(ThemeState::default(), builtin());
        s.focus = Focus::Button;
        s.button_area = Rect::new(10, 1, 20, 3);
        s
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_toggle_keys() {
        let s = state();
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('t'))), Some(Action::ToggleTheme));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Enter)), Some(Action::Activate));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char(' '))), Some(Action::Activate));
    }

    #[test]
    fn test_space_ignored_when_list_focused() {
        let mut s = state();
        s.focus = Focus::List;
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_click_inside_button_toggles() {
        let s = state();
        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(map_input_to_action(&s, mouse(down, 12, 2)), Some(Action::ToggleTheme));
        assert_eq!(map_input_to_action(&s, mouse(down, 40, 2)), None);
    }

    #[test]
    fn test_hover_changes_only_on_edge() {
        let mut s = state();
        assert_eq!(
            map_input_to_action(&s, mouse(MouseEventKind::Moved, 12, 2)),
            Some(Action::SetButtonHover(true))
        );
        s.button_hovered = true;
        assert_eq!(map_input_to_action(&s, mouse(MouseEventKind::Moved, 13, 2)), None);
        assert_eq!(
            map_input_to_action(&s, mouse(MouseEventKind::Moved, 0, 0)),
            Some(Action::SetButtonHover(false))
        );
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut s = state();
        s.show_help = true;
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('t'))), None);
        assert_eq!(map_input_to_action(&s, key(KeyCode::Esc)), Some(Action::CloseHelp));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('q'))), Some(Action::Quit));
    }
}
