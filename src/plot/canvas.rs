use super::Canvas;
use crate::config::LABEL_SCALE;
use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result, anyhow};
use image::{Rgb, RgbImage};
use imageproc::drawing::{BresenhamLineIter, draw_text_mut};
use std::path::Path;

/// Read a TrueType/OpenType font for axis labels
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid font
pub fn load_font(path: &Path) -> Result<FontVec> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read font file: {}", path.display()))?;
    FontVec::try_from_vec(data).map_err(|e| anyhow!("Invalid font {}: {e}", path.display()))
}

/// Canvas backed by an RGB image
///
/// Lines are added onto existing pixels with per-channel saturation, so
/// overlapping red, green and blue bars mix towards white. Without a font,
/// text is skipped.
pub struct ImageCanvas<'f> {
    image: RgbImage,
    font: Option<&'f FontVec>,
    scale: PxScale,
}

impl<'f> ImageCanvas<'f> {
    /// Black canvas
    #[must_use]
    pub fn new(width: u32, height: u32, font: Option<&'f FontVec>) -> Self {
        Self::from_image(RgbImage::new(width, height), font)
    }

    #[must_use]
    pub fn from_image(image: RgbImage, font: Option<&'f FontVec>) -> Self {
        Self {
            image,
            font,
            scale: PxScale::from(LABEL_SCALE),
        }
    }

    #[must_use]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    #[must_use]
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn add_pixel(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x >= self.image.width() || y >= self.image.height() {
            return;
        }

        let px = self.image.get_pixel_mut(x, y);
        for (dst, src) in px.0.iter_mut().zip(color.0) {
            *dst = dst.saturating_add(src);
        }
    }
}

impl Canvas for ImageCanvas<'_> {
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb<u8>) {
        let start = (from.0 as f32, from.1 as f32);
        let end = (to.0 as f32, to.1 as f32);
        for (x, y) in BresenhamLineIter::new(start, end) {
            self.add_pixel(x, y, color);
        }
    }

    fn draw_text(&mut self, text: &str, at: (i32, i32), color: Rgb<u8>) {
        let Some(font) = self.font else {
            tracing::debug!(text, "no label font loaded, skipping text");
            return;
        };

        // imageproc anchors text at its top-left corner
        let top = at.1 - self.scale.y.round() as i32;
        draw_text_mut(&mut self.image, color, at.0, top, self.scale, font, text);
    }
}
