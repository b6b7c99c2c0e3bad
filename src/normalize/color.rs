//! Auto-levels for colour images
//!
//! Only the HSV value plane is stretched, so hue and saturation survive.

use super::{Algorithm, Normalized, normalize_in_place};
use crate::raster::{PlaneMut, split_hsv};
use image::RgbImage;

/// Normalize the value channel of an RGB image
///
/// A skipped normalization returns an exact copy of the input.
#[must_use]
pub fn normalize_value_channel(image: &RgbImage, algorithm: Algorithm) -> (RgbImage, Normalized) {
    let mut planes = split_hsv(image);
    let outcome = normalize_in_place(&mut PlaneMut::from(&mut planes.value), algorithm);

    match outcome {
        Normalized::Applied(_) => (planes.merge(), outcome),
        Normalized::Skipped(_) => (image.clone(), outcome),
    }
}

#[must_use]
pub fn normalize_min_max_rgb(image: &RgbImage) -> (RgbImage, Normalized) {
    normalize_value_channel(image, Algorithm::MinMax)
}

#[must_use]
pub fn normalize_clip_rgb(image: &RgbImage, clip_percent: f64) -> (RgbImage, Normalized) {
    normalize_value_channel(image, Algorithm::Clip { percent: clip_percent })
}
