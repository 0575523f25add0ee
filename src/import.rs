use crate::color::Color;
use image::imageops::FilterType;
use image::GenericImageView;

/// Pixels visited per sample step when collecting quantizer input.
pub const SAMPLE_STRIDE: usize = 5;

/// Sampling keeps only pixels whose alpha strictly exceeds this threshold.
/// The threshold applies to the sampling stage only; mapping assigns every
/// pixel a color regardless of alpha.
pub const ALPHA_THRESHOLD: u8 = 128;

/// An RGBA8 pixel buffer, row-major, top row first. The length invariant
/// (width * height * 4) is checked at construction.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(rgba: Vec<u8>, width: u32, height: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err("Pixel buffer dimensions must be at least 1x1".to_string());
        }
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(format!(
                "Pixel buffer size mismatch: got {} bytes, expected {} for {}x{}",
                rgba.len(),
                expected,
                width,
                height
            ));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Color of the pixel at flat index `idx` (row-major), alpha dropped.
    pub fn color_at(&self, idx: usize) -> Color {
        let offset = idx * 4;
        Color::new(self.rgba[offset], self.rgba[offset + 1], self.rgba[offset + 2])
    }

    pub fn alpha_at(&self, idx: usize) -> u8 {
        self.rgba[idx * 4 + 3]
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Decode encoded image bytes and downscale them to chart dimensions.
///
/// The chart height is derived from the target width and the source aspect
/// ratio (`round(width / aspect)`, at least 1). Downscaling uses a triangle
/// filter so each cell averages the source pixels it covers.
pub fn decode_and_scale(image_bytes: &[u8], target_width: u32) -> Result<PixelBuffer, String> {
    if target_width == 0 {
        return Err("Target chart width must be at least 1".to_string());
    }

    let decoded = image::load_from_memory(image_bytes)
        .map_err(|e| format!("Failed to decode image bytes: {}", e))?;
    let (src_width, src_height) = decoded.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err("Image has no pixels".to_string());
    }

    let aspect = src_width as f64 / src_height as f64;
    let target_height = ((target_width as f64 / aspect).round() as u32).max(1);

    let scaled = decoded
        .resize_exact(target_width, target_height, FilterType::Triangle)
        .to_rgba8();
    PixelBuffer::new(scaled.into_raw(), target_width, target_height)
}

/// Collect quantizer samples: every `SAMPLE_STRIDE`-th pixel, skipping
/// pixels at or below the opacity threshold. A fully transparent image
/// yields an empty sample set.
pub fn sample_colors(buffer: &PixelBuffer) -> Vec<Color> {
    let mut samples = Vec::new();
    for idx in (0..buffer.pixel_count()).step_by(SAMPLE_STRIDE) {
        if buffer.alpha_at(idx) > ALPHA_THRESHOLD {
            samples.push(buffer.color_at(idx));
        }
    }
    samples
}
