//! Real-world yarn color naming.
//!
//! Quantized palette colors get human-readable names by nearest match
//! against a fixed reference table of standard yarn colors (DMC/Scheepjes
//! style). Matching is plain Euclidean RGB distance with a deterministic
//! earliest-entry tie-break.

use crate::color::Color;
use std::sync::OnceLock;

/// Curated yarn color reference table.
/// Each entry: (name, hex)
const YARN_COLORS: &[(&str, &str)] = &[
    ("Pure White", "#FFFFFF"),
    ("Cream", "#FFFDD0"),
    ("Ecru", "#C2B280"),
    ("Black", "#000000"),
    ("Charcoal", "#36454F"),
    ("Silver Grey", "#C0C0C0"),
    ("Red", "#FF0000"),
    ("Crimson", "#DC143C"),
    ("Burgundy", "#800020"),
    ("Pink", "#FFC0CB"),
    ("Hot Pink", "#FF69B4"),
    ("Orange", "#FFA500"),
    ("Burnt Orange", "#CC5500"),
    ("Yellow", "#FFFF00"),
    ("Mustard", "#FFDB58"),
    ("Gold", "#FFD700"),
    ("Green", "#008000"),
    ("Forest Green", "#228B22"),
    ("Olive", "#808000"),
    ("Lime", "#32CD32"),
    ("Teal", "#008080"),
    ("Cyan", "#00FFFF"),
    ("Tapestry Blue", "#8FDAFA"),
    ("Royal Blue", "#4169E1"),
    ("Navy", "#000080"),
    ("Purple", "#800080"),
    ("Lavender", "#E6E6FA"),
    ("Violet", "#EE82EE"),
    ("Brown", "#A52A2A"),
    ("Chocolate", "#D2691E"),
    ("Beige", "#F5F5DC"),
];

/// One named reference color with its parsed RGB value precomputed at
/// table construction.
#[derive(Debug, Clone)]
pub struct YarnColor {
    pub name: String,
    pub hex: String,
    pub rgb: Color,
}

/// An ordered reference table of named yarn colors. Entry order is part of
/// the matching contract: on exact distance ties the earliest entry wins.
#[derive(Debug, Clone)]
pub struct YarnTable {
    entries: Vec<YarnColor>,
}

static BUILTIN_TABLE: OnceLock<YarnTable> = OnceLock::new();

impl YarnTable {
    /// The built-in table, parsed once per process. Immutable after first
    /// use, so sharing it between calls needs no locking.
    pub fn global() -> &'static Self {
        BUILTIN_TABLE.get_or_init(|| {
            Self::from_entries(YARN_COLORS).expect("built-in yarn color table is valid")
        })
    }

    /// Build a table from (name, hex) pairs. An empty list or a malformed
    /// hex value is a configuration error, rejected up front rather than
    /// surfacing per lookup.
    pub fn from_entries(entries: &[(&str, &str)]) -> Result<Self, String> {
        if entries.is_empty() {
            return Err("Yarn color table must contain at least one entry".to_string());
        }

        let entries = entries
            .iter()
            .map(|(name, hex)| {
                let rgb = Color::from_hex(hex).ok_or_else(|| {
                    format!("Invalid hex value '{}' for yarn color '{}'", hex, name)
                })?;
                Ok(YarnColor {
                    name: name.to_string(),
                    hex: hex.to_string(),
                    rgb,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[YarnColor] {
        &self.entries
    }

    /// The table entry nearest to `color` in RGB space. Sequential scan in
    /// declaration order, replacing the best candidate only on strict
    /// improvement; the table is non-empty by construction.
    pub fn closest(&self, color: Color) -> &YarnColor {
        let mut best = &self.entries[0];
        let mut best_dist = color.distance_sq(best.rgb);
        for entry in &self.entries[1..] {
            let dist = color.distance_sq(entry.rgb);
            if dist < best_dist {
                best_dist = dist;
                best = entry;
            }
        }
        best
    }

    /// Name of the nearest reference color.
    pub fn name_of(&self, color: Color) -> &str {
        &self.closest(color).name
    }
}
