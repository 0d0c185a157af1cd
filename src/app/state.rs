use crate::swatch::ColorRecord;
use crate::tui::theme::ThemeState;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Nothing focused until the first Tab.
    #[default]
    None,
    Button,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::None | Focus::List => Focus::Button,
            Focus::Button => Focus::List,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::None | Focus::Button => Focus::List,
            Focus::List => Focus::Button,
        }
    }
}

/// Selection and scroll for the swatch list
#[derive(Debug, Clone, Default)]
pub struct ListCursor {
    pub selected: usize,
    pub scroll_offset: usize,
}

impl ListCursor {
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the selection inside a window of `visible` items.
    pub fn update_scroll(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible {
            self.scroll_offset = self.selected + 1 - visible;
        }
    }
}

pub struct AppState {
    pub should_quit: bool,

    pub theme: ThemeState,
    pub swatches: Vec<ColorRecord>,

    pub focus: Focus,
    pub list: ListCursor,
    pub show_help: bool,

    // Mouse hover over the toggle button
    pub button_hovered: bool,
    // Screen regions from the last draw, for mouse hit-testing
    pub button_area: Rect,
    pub list_visible: usize,

    pub status: String,
}

impl AppState {
    pub fn new(theme: ThemeState, swatches: Vec<ColorRecord>) -> Self {
        Self {
            should_quit: false,
            theme,
            swatches,
            focus: Focus::default(),
            list: ListCursor::default(),
            show_help: false,
            button_hovered: false,
            button_area: Rect::default(),
            list_visible: 0,
            status: String::new(),
        }
    }

    /// Button draws in its hover style when hovered or keyboard-focused.
    pub fn button_highlighted(&self) -> bool {
        self.button_hovered || self.focus == Focus::Button
    }

    pub fn selected_swatch(&self) -> Option<&ColorRecord> {
        self.swatches.get(self.list.selected)
    }
}
