use crate::palette::Palette;
use serde::{Deserialize, Serialize};

/// A rectangular stitch grid. Each cell holds a palette entry id; storage
/// row 0 is the topmost visual row. Structural invariants (at least one
/// row, at least one column, all rows equal length) are checked at
/// construction so downstream encoding never sees a malformed grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    cells: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(cells: Vec<Vec<String>>) -> Result<Self, String> {
        if cells.is_empty() {
            return Err("Grid must contain at least one row".to_string());
        }
        let cols = cells[0].len();
        if cols == 0 {
            return Err("Grid rows must contain at least one column".to_string());
        }
        for (idx, row) in cells.iter().enumerate() {
            if row.len() != cols {
                return Err(format!(
                    "Grid is not rectangular: row {} has {} columns, expected {}",
                    idx,
                    row.len(),
                    cols
                ));
            }
        }
        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    pub fn row(&self, index: usize) -> &[String] {
        &self.cells[index]
    }

    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Check the grid/palette pairing invariant: every cell id resolves to
    /// an entry of `palette`. The editor owns both and must re-check after
    /// mutating either side.
    pub fn validate_against(&self, palette: &Palette) -> Result<(), String> {
        for (y, row) in self.cells.iter().enumerate() {
            for (x, id) in row.iter().enumerate() {
                if palette.get(id).is_none() {
                    return Err(format!(
                        "Grid cell ({}, {}) references unknown palette id '{}'",
                        x, y, id
                    ));
                }
            }
        }
        Ok(())
    }
}
