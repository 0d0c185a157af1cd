//! Theme state and palette selection - light/dark toggle

pub mod icons;
pub mod palette;

pub use icons::Icons;
pub use palette::Palette;

use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;

/// The single mutable theme value. Only `toggle` changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    is_dark_mode: bool,
}

impl ThemeState {
    pub const fn new(is_dark_mode: bool) -> Self {
        Self { is_dark_mode }
    }

    pub const fn is_dark_mode(self) -> bool {
        self.is_dark_mode
    }

    pub fn toggled(self) -> Self {
        toggle(self)
    }

    pub fn palette(self) -> &'static Palette {
        active_palette(self.is_dark_mode)
    }

    /// Button label, naming the mode a toggle switches to.
    pub fn label(self) -> &'static str {
        label_for(self.is_dark_mode)
    }
}

impl Default for ThemeState {
    /// Sessions start in dark mode.
    fn default() -> Self {
        Self::new(true)
    }
}

pub fn active_palette(is_dark_mode: bool) -> &'static Palette {
    if is_dark_mode {
        &Palette::DARK
    } else {
        &Palette::LIGHT
    }
}

pub fn toggle(state: ThemeState) -> ThemeState {
    ThemeState::new(!state.is_dark_mode)
}

pub fn label_for(is_dark_mode: bool) -> &'static str {
    if is_dark_mode { "Light" } else { "Dark" }
}

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: &'static Palette,
    pub icons: Icons,
}

impl Theme {
    pub fn for_state(state: ThemeState) -> Self {
        Self {
            palette: state.palette(),
            icons: Icons::nerd(),
        }
    }

    pub fn border_set(&self) -> border::Set<'static> {
        border::ROUNDED
    }

    /// Page background and foreground
    pub fn base_style(&self) -> Style {
        Style::default()
            .fg(self.palette.color)
            .bg(self.palette.background_color)
    }

    pub fn button_style(&self, hovered: bool) -> Style {
        let style = if hovered {
            Style::default()
                .fg(self.palette.background_color)
                .bg(self.palette.secondary)
        } else {
            Style::default()
                .fg(self.palette.color)
                .bg(self.palette.primary)
        };
        style.add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for dark in [true, false] {
            let s = ThemeState::new(dark);
            assert_eq!(toggle(toggle(s)), s);
            assert_ne!(toggle(s), s);
        }
    }

    #[test]
    fn test_label_names_target_mode() {
        assert_eq!(label_for(true), "Light");
        assert_eq!(label_for(false), "Dark");
    }

    #[test]
    fn test_active_palette() {
        assert_eq!(active_palette(true), &Palette::DARK);
        assert_eq!(active_palette(false), &Palette::LIGHT);
        assert_eq!(ThemeState::new(false).toggled().palette(), &Palette::DARK);
    }

    #[test]
    fn test_initial_state_is_dark() {
        let s = ThemeState::default();
        assert!(s.is_dark_mode());
        assert_eq!(s.label(), "Light");
    }

    #[test]
    fn test_button_hover_swaps_colors() {
        let theme = Theme::for_state(ThemeState::default());
        let idle = theme.button_style(false);
        let hover = theme.button_style(true);
        assert_eq!(idle.bg, Some(Palette::DARK.primary));
        assert_eq!(hover.bg, Some(Palette::DARK.secondary));
        assert_eq!(hover.fg, Some(Palette::DARK.background_color));
    }
}
