//! Brightness normalization of 8-bit channels
//!
//! Two algorithms stretch an intensity window onto the full [0, 255] range:
//! a plain min-max stretch over the intensities present, and a clipped
//! stretch that first discards a percentage of the darkest and brightest
//! pixels so outliers do not compress the useful range.
//!
//! Inputs that cannot be stretched (empty images, a single intensity, an
//! out-of-range clip percentage) are a no-op reported as
//! [`Normalized::Skipped`], never a panic or an error.

mod bounds;
mod color;

pub use bounds::{ClipBounds, SkipReason, clip_bounds, min_max_bounds};
pub use color::{normalize_clip_rgb, normalize_min_max_rgb, normalize_value_channel};

use crate::error::PlaneError;
use crate::histogram::Histogram;
use crate::raster::{Plane, PlaneMut};
use image::GrayImage;
use std::fmt;

/// Stretch algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Algorithm {
    /// Stretch the darkest and brightest intensities present to 0 and 255
    MinMax,
    /// Discard `percent`% of the pixels, half from each end, then stretch
    Clip { percent: f64 },
}

impl Algorithm {
    /// Window for an image with histogram `hist`
    ///
    /// # Errors
    ///
    /// Returns the reason the image would be left unchanged
    pub fn bounds(&self, hist: &Histogram) -> Result<ClipBounds, SkipReason> {
        match *self {
            Algorithm::MinMax => min_max_bounds(hist),
            Algorithm::Clip { percent } => clip_bounds(hist, percent),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::MinMax => write!(f, "min-max"),
            Algorithm::Clip { percent } => write!(f, "clip {percent}%"),
        }
    }
}

/// Outcome of a normalization call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized {
    /// Pixels were remapped through these bounds
    Applied(ClipBounds),
    /// Pixels were left as they were
    Skipped(SkipReason),
}

impl Normalized {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Normalized::Applied(_))
    }

    #[must_use]
    pub fn bounds(&self) -> Option<ClipBounds> {
        match self {
            Normalized::Applied(bounds) => Some(*bounds),
            Normalized::Skipped(_) => None,
        }
    }

    fn from_bounds(result: Result<ClipBounds, SkipReason>, algorithm: Algorithm) -> Self {
        match result {
            Ok(bounds) => {
                tracing::debug!(%algorithm, %bounds, "normalizing channel");
                Normalized::Applied(bounds)
            }
            Err(reason) => {
                tracing::debug!(%algorithm, %reason, "normalization skipped");
                Normalized::Skipped(reason)
            }
        }
    }
}

/// Normalize a plane in place
pub fn normalize_in_place(plane: &mut PlaneMut<'_>, algorithm: Algorithm) -> Normalized {
    let hist = Histogram::compute(&plane.as_plane());
    let outcome = Normalized::from_bounds(algorithm.bounds(&hist), algorithm);

    if let Normalized::Applied(bounds) = outcome {
        let lut = bounds.lookup_table();
        plane.map_in_place(|v| lut[usize::from(v)]);
    }

    outcome
}

/// Normalize `src` into a caller-provided `dst` of the same dimensions
///
/// When skipped, `dst` receives an exact copy of `src`. Padding bytes of
/// `dst` are never written.
///
/// # Errors
///
/// Returns an error if the planes differ in width or height
pub fn normalize_into(
    src: &Plane<'_>,
    dst: &mut PlaneMut<'_>,
    algorithm: Algorithm,
) -> Result<Normalized, PlaneError> {
    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(PlaneError::DimensionMismatch {
            src_width: src.width(),
            src_height: src.height(),
            dst_width: dst.width(),
            dst_height: dst.height(),
        });
    }

    let hist = Histogram::compute(src);
    let outcome = Normalized::from_bounds(algorithm.bounds(&hist), algorithm);

    let lut = match outcome {
        Normalized::Applied(bounds) => bounds.lookup_table(),
        Normalized::Skipped(_) => std::array::from_fn(|v| v as u8),
    };

    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        for (out, &v) in dst_row.iter_mut().zip(src_row) {
            *out = lut[usize::from(v)];
        }
    }

    Ok(outcome)
}

/// Normalized copy of a grayscale image
#[must_use]
pub fn normalize(image: &GrayImage, algorithm: Algorithm) -> (GrayImage, Normalized) {
    let mut out = image.clone();
    let outcome = normalize_in_place(&mut PlaneMut::from(&mut out), algorithm);
    (out, outcome)
}

/// Clipped stretch of a grayscale image; see [`clip_bounds`]
#[must_use]
pub fn normalize_clip(image: &GrayImage, clip_percent: f64) -> (GrayImage, Normalized) {
    normalize(image, Algorithm::Clip { percent: clip_percent })
}

/// Clipped stretch of a grayscale image, in place
pub fn normalize_clip_in_place(image: &mut GrayImage, clip_percent: f64) -> Normalized {
    normalize_in_place(&mut PlaneMut::from(image), Algorithm::Clip { percent: clip_percent })
}

/// Min-max stretch of a grayscale image
#[must_use]
pub fn normalize_min_max(image: &GrayImage) -> (GrayImage, Normalized) {
    normalize(image, Algorithm::MinMax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use image::Luma;

    fn ramp(width: u32, lo: u8, hi: u8) -> GrayImage {
        let span = u32::from(hi - lo);
        GrayImage::from_fn(width, 3, |x, y| {
            Luma([lo + ((x * 7 + y * 13) % (span + 1)) as u8])
        })
    }

    #[test]
    fn test_clip_half_and_half() {
        let mut values = vec![10u8; 50];
        values.extend([200u8; 50]);
        let img = GrayImage::from_raw(100, 1, values).unwrap();

        let (out, outcome) = normalize_clip(&img, 50.0);
        assert_eq!(outcome.bounds(), ClipBounds::new(10, 200));
        assert!(out.as_raw()[..50].iter().all(|&v| v == 0));
        assert!(out.as_raw()[50..].iter().all(|&v| v == 255));
    }

    #[test]
    fn test_out_of_range_percent_is_noop() {
        let img = ramp(40, 20, 180);
        for percent in [-5.0, 100.0, 250.0] {
            let (out, outcome) = normalize_clip(&img, percent);
            assert_eq!(out, img);
            assert_matches!(outcome, Normalized::Skipped(SkipReason::InvalidClipPercent(_)));
        }
    }

    #[test]
    fn test_constant_image_min_max_is_noop() {
        let img = GrayImage::from_pixel(8, 8, Luma([128]));
        let (out, outcome) = normalize_min_max(&img);
        assert_eq!(out, img);
        assert_matches!(
            outcome,
            Normalized::Skipped(SkipReason::DegenerateRange { min: 128, max: 128 })
        );
    }

    #[test]
    fn test_empty_image_is_noop() {
        let img = GrayImage::new(0, 0);
        let (out, outcome) = normalize_clip(&img, 2.0);
        assert_eq!(out.dimensions(), (0, 0));
        assert_matches!(outcome, Normalized::Skipped(SkipReason::EmptyImage));
    }

    #[test]
    fn test_min_max_stretches_full_range() {
        let img = ramp(64, 40, 90);
        let (out, outcome) = normalize_min_max(&img);

        assert_eq!(outcome.bounds(), ClipBounds::new(40, 90));
        let hist = Histogram::of_gray(&out);
        assert_eq!(hist.first_nonzero(), Some(0));
        assert_eq!(hist.last_nonzero(), Some(255));
    }

    #[test]
    fn test_min_max_is_idempotent() {
        let img = ramp(64, 40, 90);
        let (once, _) = normalize_min_max(&img);
        let (twice, outcome) = normalize_min_max(&once);

        assert_eq!(twice, once);
        assert!(outcome.bounds().is_some_and(|b| b.is_identity()));
    }

    #[test]
    fn test_zero_clip_equals_min_max() {
        let img = ramp(97, 33, 201);
        let (clipped, _) = normalize_clip(&img, 0.0);
        let (stretched, _) = normalize_min_max(&img);
        assert_eq!(clipped, stretched);
    }

    #[test]
    fn test_clip_in_place() {
        let mut img = ramp(50, 60, 120);
        let outcome = normalize_clip_in_place(&mut img, 2.0);
        assert!(outcome.is_applied());
        assert!(img.as_raw().contains(&0));
        assert!(img.as_raw().contains(&255));
    }

    #[test]
    fn test_normalize_into_padded_destination() {
        let src_data = [10, 20, 30, 40];
        let src = Plane::new(&src_data, 2, 2, 2).unwrap();

        let mut dst_data = [0u8, 0, 77, 0, 0];
        let mut dst = PlaneMut::new(&mut dst_data, 2, 2, 3).unwrap();

        let outcome = normalize_into(&src, &mut dst, Algorithm::MinMax).unwrap();
        assert_eq!(outcome.bounds(), ClipBounds::new(10, 40));
        assert_eq!(dst_data, [0, 85, 77, 170, 255]);
    }

    #[test]
    fn test_normalize_into_copies_when_skipped() {
        let src_data = [9, 9, 9, 9];
        let src = Plane::new(&src_data, 4, 1, 4).unwrap();
        let mut dst_data = [0u8; 4];
        let mut dst = PlaneMut::new(&mut dst_data, 4, 1, 4).unwrap();

        let outcome = normalize_into(&src, &mut dst, Algorithm::MinMax).unwrap();
        assert!(!outcome.is_applied());
        assert_eq!(dst_data, src_data);
    }

    #[test]
    fn test_normalize_into_dimension_mismatch() {
        let src_data = [0u8; 4];
        let src = Plane::new(&src_data, 2, 2, 2).unwrap();
        let mut dst_data = [0u8; 6];
        let mut dst = PlaneMut::new(&mut dst_data, 3, 2, 3).unwrap();

        assert_matches!(
            normalize_into(&src, &mut dst, Algorithm::MinMax),
            Err(PlaneError::DimensionMismatch { src_width: 2, dst_width: 3, .. })
        );
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::MinMax.to_string(), "min-max");
        assert_eq!(Algorithm::Clip { percent: 2.0 }.to_string(), "clip 2%");
    }
}
