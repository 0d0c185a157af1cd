//! Swatch list rendering - records to alternating-styled display items

use super::ColorRecord;
use crate::tui::theme::Palette;
use ratatui::style::Color;

/// Background variant picked by id parity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Even ids
    Primary,
    /// Odd ids
    Secondary,
}

impl Variant {
    pub fn for_id(id: i64) -> Self {
        if id.rem_euclid(2) == 0 {
            Variant::Primary
        } else {
            Variant::Secondary
        }
    }

    pub fn resolve(self, palette: &Palette) -> Color {
        match self {
            Variant::Primary => palette.primary,
            Variant::Secondary => palette.secondary,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
        }
    }
}

/// A record ready to draw, borrowing its text from the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem<'a> {
    pub id: i64,
    pub variant: Variant,
    pub color_name: &'a str,
    pub color_code: &'a str,
    pub background: Color,
}

/// One item per record, in input order.
pub fn render<'a>(records: &'a [ColorRecord], palette: &Palette) -> Vec<DisplayItem<'a>> {
    records
        .iter()
        .map(|r| {
            let variant = Variant::for_id(r.id);
            DisplayItem {
                id: r.id,
                variant,
                color_name: &r.color_name,
                color_code: &r.color_code,
                background: variant.resolve(palette),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swatch::builtin;

    fn scenario() -> Vec<ColorRecord> {
        vec![
            ColorRecord::new(1, "Steel Blue", "#4D7EA8"),
            ColorRecord::new(2, "Web Gray", "#828489"),
        ]
    }

    #[test]
    fn test_dark_mode_scenario() {
        let records = scenario();
        let items = render(&records, &Palette::DARK);
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].variant, Variant::Secondary);
        assert_eq!(items[0].background, Palette::DARK.secondary);
        assert_eq!(items[0].color_name, "Steel Blue");
        assert_eq!(items[0].color_code, "#4D7EA8");

        assert_eq!(items[1].variant, Variant::Primary);
        assert_eq!(items[1].background, Palette::DARK.primary);
        assert_eq!(items[1].color_name, "Web Gray");
    }

    #[test]
    fn test_variant_by_parity() {
        for id in [-4, -1, 0, 1, 2, 3, 10, 11, i64::MAX, i64::MIN] {
            let records = vec![ColorRecord::new(id, "x", "#000000")];
            let item = &render(&records, &Palette::LIGHT)[0];
            assert_eq!(item.variant == Variant::Primary, id % 2 == 0, "id {id}");
        }
    }

    #[test]
    fn test_length_and_order_preserved() {
        let records = builtin();
        let items = render(&records, &Palette::LIGHT);
        assert_eq!(items.len(), records.len());
        for (item, record) in items.iter().zip(&records) {
            assert_eq!(item.id, record.id);
            assert_eq!(item.color_name, record.color_name);
        }

        let empty: Vec<ColorRecord> = Vec::new();
        assert!(render(&empty, &Palette::DARK).is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let records = builtin();
        assert_eq!(render(&records, &Palette::DARK), render(&records, &Palette::DARK));
        assert_ne!(render(&records, &Palette::DARK), render(&records, &Palette::LIGHT));
    }
}
