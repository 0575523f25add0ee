use crate::color::Color;
use crate::yarn::YarnTable;
use serde::{Deserialize, Serialize};

/// Symbol alphabet for accessibility / black-and-white charts. Generated
/// palettes cycle through it when they hold more entries than symbols.
pub const SYMBOLS: &[char] = &[
    'X', 'O', '/', '\\', '+', '-', '#', '*', '=', '$', '%', '&', '@', '?', '!',
];

/// One palette slot referenced by grid cells via its stable id.
///
/// Ids are opaque and must never be reused for a different color while any
/// grid cell still references them. Two entries may share a color value;
/// equality is by id alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEntry {
    pub id: String,
    pub name: String,
    pub rgb: Color,
    pub hex: String,
    pub symbol: Option<char>,
}

impl PartialEq for PaletteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PaletteEntry {}

/// An ordered color palette with id lookup. Travels as a pair with the
/// grid that references it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Build a palette from quantized colors: ids "1".."n" in quantizer
    /// output order, names from the yarn reference table, symbols cycled
    /// from the fixed alphabet.
    pub fn generate(colors: &[Color], yarns: &YarnTable) -> Self {
        let entries = colors
            .iter()
            .enumerate()
            .map(|(idx, color)| PaletteEntry {
                id: (idx + 1).to_string(),
                name: yarns.name_of(*color).to_string(),
                rgb: *color,
                hex: color.to_hex(),
                symbol: Some(SYMBOLS[idx % SYMBOLS.len()]),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entry colors in palette order, for nearest-color mapping.
    pub fn colors(&self) -> Vec<Color> {
        self.entries.iter().map(|entry| entry.rgb).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_assigns_ids_names_and_symbols() {
        let colors = [Color::new(255, 255, 255), Color::new(0, 0, 0)];
        let palette = Palette::generate(&colors, YarnTable::global());

        assert_eq!(palette.len(), 2);
        let first = &palette.entries()[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.name, "Pure White");
        assert_eq!(first.hex, "#FFFFFF");
        assert_eq!(first.symbol, Some('X'));

        let second = &palette.entries()[1];
        assert_eq!(second.id, "2");
        assert_eq!(second.name, "Black");
        assert_eq!(second.symbol, Some('O'));
    }

    #[test]
    fn test_symbols_cycle_past_alphabet_length() {
        let colors: Vec<Color> = (0..SYMBOLS.len() as u8 + 2)
            .map(|i| Color::new(i * 3, i * 3, i * 3))
            .collect();
        let palette = Palette::generate(&colors, YarnTable::global());

        let entries = palette.entries();
        assert_eq!(entries[0].symbol, entries[SYMBOLS.len()].symbol);
        assert_eq!(entries[1].symbol, entries[SYMBOLS.len() + 1].symbol);
    }

    #[test]
    fn test_entry_equality_is_by_id() {
        let a = PaletteEntry {
            id: "1".to_string(),
            name: "Red".to_string(),
            rgb: Color::new(255, 0, 0),
            hex: "#FF0000".to_string(),
            symbol: Some('X'),
        };
        let mut b = a.clone();
        b.name = "Crimson".to_string();
        b.rgb = Color::new(220, 20, 60);
        assert_eq!(a, b);

        let mut c = a.clone();
        c.id = "2".to_string();
        assert_ne!(a, c);
    }

    #[test]
    fn test_lookup_by_id() {
        let palette = Palette::generate(&[Color::new(0, 0, 0)], YarnTable::global());
        assert!(palette.get("1").is_some());
        assert!(palette.get("2").is_none());
    }
}
