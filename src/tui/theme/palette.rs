//! Color palettes - the light and dark swatch themes

use ratatui::style::Color;

/// One of the two fixed theme palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub background_color: Color,
    pub color: Color,
    pub primary: Color,
    pub secondary: Color,
}

impl Palette {
    pub const LIGHT: Self = Self {
        name: "light",
        background_color: Color::Rgb(182, 194, 217), // #B6C2D9 light steel blue
        color: Color::Rgb(182, 194, 217),            // #B6C2D9 light steel blue
        primary: Color::Rgb(158, 144, 162),          // #9E90A2 heliotrope gray
        secondary: Color::Rgb(130, 132, 137),        // #828489 web gray
    };

    pub const DARK: Self = Self {
        name: "dark",
        background_color: Color::Rgb(39, 41, 50), // #272932 raisin black
        color: Color::Rgb(39, 41, 50),            // #272932 raisin black
        primary: Color::Rgb(77, 126, 168),        // #4D7EA8 steel blue
        secondary: Color::Rgb(182, 194, 217),     // #B6C2D9 light steel blue
    };

    /// `(label, color)` pairs in declaration order, for headless output.
    pub fn entries(&self) -> [(&'static str, Color); 4] {
        [
            ("backgroundColor", self.background_color),
            ("color", self.color),
            ("primary", self.primary),
            ("secondary", self.secondary),
        ]
    }
}

/// Parse a `#RRGGBB` swatch code. Surrounding whitespace and the `#` are optional.
pub fn parse_color_code(code: &str) -> Option<Color> {
    let digits = code.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    let mut rgb = [0u8; 3];
    hex::decode_to_slice(digits, &mut rgb).ok()?;
    Some(Color::Rgb(rgb[0], rgb[1], rgb[2]))
}

/// Format an RGB color back to `#RRGGBB`. Indexed/named colors have no code.
pub fn to_color_code(color: Color) -> Option<String> {
    match color {
        Color::Rgb(r, g, b) => Some(format!("#{}", hex::encode_upper([r, g, b]))),
        _ => None,
    }
}
