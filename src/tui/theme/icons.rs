//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

/// Icon set using Nerd Font glyphs
#[derive(Debug, Clone)]
pub struct Icons {
    pub light_mode: &'static str,
    pub dark_mode: &'static str,
    pub palette: &'static str,
    pub help: &'static str,
    pub selected: &'static str,
    pub chip: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            light_mode: "\u{f185}", // nf-fa-sun_o
            dark_mode: "\u{f186}",  // nf-fa-moon_o
            palette: "\u{e22b}",    // nf-fae-palette_color
            help: "\u{f059}",       // nf-fa-question_circle
            selected: "\u{f054}",   // nf-fa-chevron_right
            chip: "██████",
        }
    }

    /// Icon for the mode a toggle would switch to
    pub fn target_mode(&self, is_dark_mode: bool) -> &'static str {
        if is_dark_mode {
            self.light_mode
        } else {
            self.dark_mode
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}
