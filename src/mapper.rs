use crate::color::{nearest_index, Color};
use crate::grid::Grid;
use crate::import::PixelBuffer;
use crate::palette::Palette;
use rayon::prelude::*;

/// Assign every pixel the index of its nearest palette color.
///
/// Alpha is ignored here: pixels excluded from sampling by the opacity
/// threshold still get mapped. Rows are processed in parallel, but each
/// result lands at its pixel's fixed coordinate and the per-pixel scan is
/// the same strict-improvement loop as the yarn namer, so the output is
/// identical to a sequential pass.
pub fn map_pixels(buffer: &PixelBuffer, palette: &[Color]) -> Result<Vec<Vec<usize>>, String> {
    if palette.is_empty() {
        return Err("Cannot map pixels against an empty palette".to_string());
    }

    let width = buffer.width() as usize;
    let indices: Vec<Vec<usize>> = (0..buffer.height() as usize)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| {
                    let color = buffer.color_at(y * width + x);
                    nearest_index(color, palette).unwrap_or(0)
                })
                .collect()
        })
        .collect();

    Ok(indices)
}

/// Map a pixel buffer onto a palette, resolving indices to stable entry
/// ids, and return the validated grid half of the grid/palette pair.
pub fn map_to_grid(buffer: &PixelBuffer, palette: &Palette) -> Result<Grid, String> {
    if palette.is_empty() {
        return Err("Cannot map pixels against an empty palette".to_string());
    }

    let colors = palette.colors();
    let indices = map_pixels(buffer, &colors)?;
    let cells = indices
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|idx| palette.entries()[idx].id.clone())
                .collect()
        })
        .collect();

    let grid = Grid::new(cells)?;
    grid.validate_against(palette)?;
    Ok(grid)
}
