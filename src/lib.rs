//! Photo-to-stitch-chart conversion for tapestry crochet patterns.
//!
//! The pipeline reduces a raster image to a small named color palette
//! (median-cut quantization + yarn naming), maps every pixel to its nearest
//! palette entry to produce a stitch grid, and encodes grid rows into
//! direction-aware, run-length-compressed working instructions. Every stage
//! is pure and deterministic: identical inputs produce byte-identical
//! output, so UI layers can recompute the full pipeline on every parameter
//! change.

mod color;
mod format;
mod grid;
mod import;
mod mapper;
mod palette;
mod quantize;
mod rows;
mod yarn;

pub use color::{nearest_index, Color};
pub use format::{format_instruction, written_pattern};
pub use grid::Grid;
pub use import::{decode_and_scale, sample_colors, PixelBuffer, ALPHA_THRESHOLD, SAMPLE_STRIDE};
pub use mapper::{map_pixels, map_to_grid};
pub use palette::{Palette, PaletteEntry, SYMBOLS};
pub use quantize::quantize;
pub use rows::{encode_rows, working_order, RowBlock, RowInstruction, Side};
pub use yarn::{YarnColor, YarnTable};

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Chart generation options. Values outside the supported ranges are
/// clamped at the pipeline boundary, mirroring the editor's slider limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Chart width in stitches; the height is derived from the source
    /// aspect ratio. Clamped to 10..=150.
    pub target_width: u32,
    /// Maximum palette size. Clamped to 2..=16.
    pub color_count: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            target_width: 40,
            color_count: 8,
        }
    }
}

/// The pipeline's aggregate output: the palette and the grid that travel
/// together, plus the chart dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResult {
    pub width: u32,
    pub height: u32,
    pub palette: Palette,
    pub grid: Grid,
    pub processing_time_ms: u64,
}

/// Run the core pipeline on an already-scaled pixel buffer: sample, build
/// a named palette, and map every pixel onto it.
///
/// The yarn table is passed explicitly; use [`YarnTable::global`] for the
/// built-in one. Fails when the buffer has no opaque pixels to sample,
/// since an empty palette cannot map.
pub fn generate_chart(
    buffer: &PixelBuffer,
    options: &ChartOptions,
    yarns: &YarnTable,
) -> Result<ChartResult, String> {
    let start = Instant::now();
    let color_count = options.color_count.clamp(2, 16) as usize;

    let samples = sample_colors(buffer);
    let quantized = quantize(&samples, color_count);
    if quantized.is_empty() {
        return Err("Image has no opaque pixels to sample; cannot build a palette".to_string());
    }

    let palette = Palette::generate(&quantized, yarns);
    let grid = map_to_grid(buffer, &palette)?;

    let processing_time_ms = start.elapsed().as_millis() as u64;
    log::info!(
        "Chart generated: {}x{}, {} colors, {}ms",
        buffer.width(),
        buffer.height(),
        palette.len(),
        processing_time_ms
    );

    Ok(ChartResult {
        width: buffer.width(),
        height: buffer.height(),
        palette,
        grid,
        processing_time_ms,
    })
}

/// Convenience entry point from encoded image bytes: decode, downscale to
/// chart dimensions, then run [`generate_chart`].
pub fn import_image(
    image_bytes: &[u8],
    options: &ChartOptions,
    yarns: &YarnTable,
) -> Result<ChartResult, String> {
    log::info!(
        "Importing image: {} bytes, target width {}, {} colors max",
        image_bytes.len(),
        options.target_width,
        options.color_count
    );

    let target_width = options.target_width.clamp(10, 150);
    let buffer = decode_and_scale(image_bytes, target_width)?;
    generate_chart(&buffer, options, yarns)
}
