pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::swatch::ColorRecord;
use crate::tui::theme::ThemeState;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::Event;
use state::{AppState, Focus};
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    state: AppState,
}

impl App {
    pub fn new(cfg: Config, swatches: Vec<ColorRecord>) -> Self {
        let theme = ThemeState::new(cfg.theme.start_dark);
        let state = AppState::new(theme, swatches);
        Self { cfg, state }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx, self.cfg.input.mouse);

        tracing::info!(
            swatches = self.state.swatches.len(),
            dark = self.state.theme.is_dark_mode(),
            "session started"
        );

        // First draw
        tui::draw(terminal, &mut self.state)?;

        // Redraw only after handled events; nothing changes between them.
        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.reduce(action);
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        tracing::info!("session ended");
        Ok(())
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::ToggleTheme => {
                self.state.theme = self.state.theme.toggled();
                tracing::debug!(dark = self.state.theme.is_dark_mode(), "theme toggled");
            }
            Action::Activate => match self.state.focus {
                Focus::Button => self.reduce(Action::ToggleTheme),
                Focus::None => {}
                Focus::List => {
                    self.state.status = match self.state.selected_swatch() {
                        Some(s) => format!("{} {}", s.color_name, s.color_code),
                        None => String::new(),
                    };
                }
            },
            Action::FocusNext => self.state.focus = self.state.focus.next(),
            Action::FocusPrev => self.state.focus = self.state.focus.prev(),
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::CloseHelp => self.state.show_help = false,
            Action::ListUp => {
                self.state.list.select_prev();
                self.state.list.update_scroll(self.state.list_visible);
            }
            Action::ListDown => {
                let len = self.state.swatches.len();
                self.state.list.select_next(len);
                self.state.list.update_scroll(self.state.list_visible);
            }
            Action::GoTop => {
                self.state.list.selected = 0;
                self.state.list.scroll_offset = 0;
            }
            Action::GoBottom => {
                let len = self.state.swatches.len();
                self.state.list.select_last(len);
                self.state.list.update_scroll(self.state.list_visible);
            }
            Action::SetButtonHover(hovered) => self.state.button_hovered = hovered,
            Action::Resize => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swatch::builtin;

    fn app() -> App {
        App::new(Config::default(), builtin())
    }

    #[test]
    fn test_starts_dark_with_light_label() {
        let app = app();
        assert!(app.state.theme.is_dark_mode());
        assert_eq!(app.state.theme.label(), "Light");
    }

    #[test]
    fn test_start_mode_from_config() {
        let mut cfg = Config::default();
        cfg.theme.start_dark = false;
        let app = App::new(cfg, builtin());
        assert_eq!(app.state.theme.label(), "Dark");
    }

    #[test]
    fn test_toggle_theme_twice() {
        let mut app = app();
        app.reduce(Action::ToggleTheme);
        assert!(!app.state.theme.is_dark_mode());
        assert_eq!(app.state.theme.label(), "Dark");
        app.reduce(Action::ToggleTheme);
        assert!(app.state.theme.is_dark_mode());
    }

    #[test]
    fn test_activate_follows_focus() {
        let mut app = app();
        app.reduce(Action::Activate);
        assert!(app.state.theme.is_dark_mode());

        app.reduce(Action::FocusNext);
        app.reduce(Action::Activate);
        assert!(!app.state.theme.is_dark_mode());

        app.reduce(Action::FocusNext);
        app.reduce(Action::ListDown);
        app.reduce(Action::Activate);
        assert!(!app.state.theme.is_dark_mode());
        assert_eq!(app.state.status, "Web Gray #828489");
    }

    #[test]
    fn test_list_navigation_clamps() {
        let mut app = app();
        app.reduce(Action::GoBottom);
        assert_eq!(app.state.list.selected, 4);
        app.reduce(Action::ListDown);
        assert_eq!(app.state.list.selected, 4);
        app.reduce(Action::GoTop);
        app.reduce(Action::ListUp);
        assert_eq!(app.state.list.selected, 0);
    }

    #[test]
    fn test_toggle_leaves_swatches_untouched() {
        let mut app = app();
        let before = app.state.swatches.clone();
        app.reduce(Action::ToggleTheme);
        assert_eq!(app.state.swatches, before);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.reduce(Action::Quit);
        assert!(app.state.should_quit);
    }
}
