use serde::{Deserialize, Serialize};

/// An 8-bit RGB color. Alpha is handled separately at the sampling stage
/// and never participates in distance calculations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (leading `#` optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let trimmed = hex.trim_start_matches('#');
        if trimmed.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&trimmed[0..2], 16).ok()?;
        let g = u8::from_str_radix(&trimmed[2..4], 16).ok()?;
        let b = u8::from_str_radix(&trimmed[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Render as an uppercase `#RRGGBB` string. Consumers must compare hex
    /// strings case-insensitively; the case here is not part of any contract.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Squared Euclidean RGB distance. Ordering-equivalent to the plain
    /// Euclidean metric under strict comparison, and exact in integer math.
    pub fn distance_sq(self, other: Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// Index of the nearest color in `candidates`, or `None` if empty.
///
/// Iterates in declaration order and replaces the current best only on a
/// strict improvement, so the earliest candidate wins exact distance ties.
/// Both the yarn namer and the pixel mapper rely on this exact ordering.
pub fn nearest_index(target: Color, candidates: &[Color]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        let dist = target.distance_sq(*candidate);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((idx, dist)),
        }
    }
    best.map(|(idx, _)| idx)
}
