//! Hue/saturation/value split of RGB images
//!
//! The value plane is `max(R, G, B)` and stays exact in 8 bits. Hue (degrees)
//! and saturation (0..=1) are kept as `f32` so that merging an untouched value
//! plane reproduces the source pixels.

use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

/// RGB pixel to (hue degrees, saturation, value)
#[inline]
#[must_use]
pub fn rgb_to_hsv(rgb: [u8; 3]) -> (f32, f32, u8) {
    let [r8, g8, b8] = rgb;
    let max8 = r8.max(g8).max(b8);

    let r = f32::from(r8);
    let g = f32::from(g8);
    let b = f32::from(b8);
    let max = f32::from(max8);
    let delta = max - r.min(g).min(b);

    let hue = if delta == 0.0 {
        0.0
    } else if max8 == r8 {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max8 == g8 {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    let saturation = if max8 == 0 { 0.0 } else { delta / max };

    (hue, saturation, max8)
}

/// (hue degrees, saturation, value) back to an RGB pixel
#[inline]
#[must_use]
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: u8) -> [u8; 3] {
    let v = f32::from(value);
    let chroma = v * saturation;
    let sector = (hue / 60.0).rem_euclid(6.0);
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [to_u8(r + m), to_u8(g + m), to_u8(b + m)]
}

#[inline]
fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// An RGB image split into hue, saturation and value planes
#[derive(Debug, Clone)]
pub struct HsvPlanes {
    pub hue: Vec<f32>,
    pub saturation: Vec<f32>,
    pub value: GrayImage,
}

impl HsvPlanes {
    /// Recombine the planes into an RGB image
    #[must_use]
    pub fn merge(&self) -> RgbImage {
        let (width, height) = self.value.dimensions();
        ImageBuffer::from_fn(width, height, |x, y| {
            let idx = y as usize * width as usize + x as usize;
            let value = self.value.get_pixel(x, y).0[0];
            Rgb(hsv_to_rgb(self.hue[idx], self.saturation[idx], value))
        })
    }
}

/// Split an RGB image into hue, saturation and value planes
#[must_use]
pub fn split_hsv(image: &RgbImage) -> HsvPlanes {
    let (width, height) = image.dimensions();
    let pixel_count = width as usize * height as usize;

    let mut hue = Vec::with_capacity(pixel_count);
    let mut saturation = Vec::with_capacity(pixel_count);
    let value = GrayImage::from_fn(width, height, |x, y| {
        let (h, s, v) = rgb_to_hsv(image.get_pixel(x, y).0);
        hue.push(h);
        saturation.push(s);
        Luma([v])
    });

    HsvPlanes { hue, saturation, value }
}
