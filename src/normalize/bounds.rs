use crate::histogram::Histogram;
use std::fmt;
use thiserror::Error;

/// Why a normalization left its image untouched
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SkipReason {
    #[error("clip percentage {0} is outside [0, 100)")]
    InvalidClipPercent(f64),

    #[error("degenerate intensity range (min {min}, max {max})")]
    DegenerateRange { min: u8, max: u8 },

    #[error("image has no pixels")]
    EmptyImage,
}

/// Intensity window stretched onto [0, 255]; always `min < max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipBounds {
    min: u8,
    max: u8,
}

impl ClipBounds {
    #[must_use]
    pub fn new(min: u8, max: u8) -> Option<Self> {
        (min < max).then_some(Self { min, max })
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> u8 {
        self.min
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> u8 {
        self.max
    }

    /// Map one intensity linearly so `min -> 0` and `max -> 255`
    #[inline]
    #[must_use]
    pub fn remap(&self, value: u8) -> u8 {
        let factor = 255.0 / f64::from(self.max - self.min);
        let scaled = (f64::from(value) - f64::from(self.min)) * factor;
        scaled.clamp(0.0, 255.0).round() as u8
    }

    /// `remap` for every possible intensity
    #[must_use]
    pub fn lookup_table(&self) -> [u8; 256] {
        let mut lut = [0u8; 256];
        for (v, out) in lut.iter_mut().enumerate() {
            *out = self.remap(v as u8);
        }
        lut
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.min == 0 && self.max == 255
    }
}

impl fmt::Display for ClipBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{min}, {max}]", min = self.min, max = self.max)
    }
}

/// Bounds that discard roughly `clip_percent`% of the pixels, half from each end
///
/// The lower bound is the first bin (scanning up from 0, at most to 254)
/// where the running count exceeds half the clip budget, 0 if none does. A
/// black bin that alone fills a non-zero half budget keeps the bound at 0.
/// The upper bound scans down from 255 to 1 the same way and defaults to 255.
///
/// # Errors
///
/// Fails with a [`SkipReason`] when the percentage is outside [0, 100), the
/// histogram is empty, or the search collapses to `max <= min`.
pub fn clip_bounds(hist: &Histogram, clip_percent: f64) -> Result<ClipBounds, SkipReason> {
    if !(0.0..100.0).contains(&clip_percent) {
        return Err(SkipReason::InvalidClipPercent(clip_percent));
    }

    let total = hist.total();
    if total == 0 {
        return Err(SkipReason::EmptyImage);
    }

    let pixels_to_clip = (clip_percent / 100.0 * total as f64).round() as u64;
    let half_clip = (pixels_to_clip as f64 / 2.0).round() as u64;

    let min = if half_clip > 0 && hist[0] >= half_clip {
        0
    } else {
        first_exceeding(hist, half_clip, 0..=254).unwrap_or(0)
    };
    let max = if half_clip > 0 && hist[255] >= half_clip {
        255
    } else {
        first_exceeding(hist, half_clip, (1..=255).rev()).unwrap_or(255)
    };

    ClipBounds::new(min, max).ok_or(SkipReason::DegenerateRange { min, max })
}

/// True extrema of the histogram
///
/// # Errors
///
/// Fails when the histogram is empty or holds a single intensity.
pub fn min_max_bounds(hist: &Histogram) -> Result<ClipBounds, SkipReason> {
    let (Some(min), Some(max)) = (hist.first_nonzero(), hist.last_nonzero()) else {
        return Err(SkipReason::EmptyImage);
    };

    ClipBounds::new(min, max).ok_or(SkipReason::DegenerateRange { min, max })
}

fn first_exceeding(
    hist: &Histogram,
    threshold: u64,
    bins: impl Iterator<Item = u8>,
) -> Option<u8> {
    let mut sum = 0u64;
    for bin in bins {
        sum += hist[bin];
        if sum > threshold {
            return Some(bin);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn hist_of(pairs: &[(u8, u64)]) -> Histogram {
        let mut counts = [0u64; 256];
        for &(bin, count) in pairs {
            counts[usize::from(bin)] = count;
        }
        Histogram::from_counts(counts)
    }

    #[test]
    fn test_half_and_half_at_fifty_percent() {
        // 100 pixels: 50 at 10, 50 at 200. Budget 50, 25 per side.
        let hist = hist_of(&[(10, 50), (200, 50)]);
        let bounds = clip_bounds(&hist, 50.0).unwrap();
        assert_eq!((bounds.min(), bounds.max()), (10, 200));
    }

    #[test]
    fn test_outliers_are_clipped() {
        // 1000 pixels: 10 near black, 10 near white, 980 spread over 100..=149
        let mut pairs = vec![(0u8, 5u64), (1, 5), (254, 5), (255, 5)];
        for v in 100..=149u8 {
            pairs.push((v, if v == 100 { 49 } else { 19 }));
        }
        let hist = hist_of(&pairs);
        assert_eq!(hist.total(), 1000);

        // 2% of 1000 = 20, 10 per side: exactly the outlier counts
        let bounds = clip_bounds(&hist, 2.0).unwrap();
        assert_eq!((bounds.min(), bounds.max()), (100, 149));
    }

    #[test]
    fn test_edge_bin_over_budget_keeps_default() {
        let hist = hist_of(&[(0, 40), (128, 20), (255, 40)]);
        let bounds = clip_bounds(&hist, 10.0).unwrap();
        assert!(bounds.is_identity());
    }

    #[test]
    fn test_edge_bins_equal_to_half_budget_keep_defaults() {
        // 100 pixels at 10%: budget 10, 5 per side, each edge bin holds exactly 5
        let hist = hist_of(&[(0, 5), (100, 90), (255, 5)]);
        let bounds = clip_bounds(&hist, 10.0).unwrap();
        assert_eq!((bounds.min(), bounds.max()), (0, 255));
    }

    #[test]
    fn test_black_bin_equal_to_half_budget_keeps_lower_default() {
        let hist = hist_of(&[(0, 5), (100, 40), (200, 55)]);
        let bounds = clip_bounds(&hist, 10.0).unwrap();
        assert_eq!((bounds.min(), bounds.max()), (0, 200));
    }

    #[test]
    fn test_white_bin_equal_to_half_budget_keeps_upper_default() {
        let hist = hist_of(&[(20, 55), (100, 40), (255, 5)]);
        let bounds = clip_bounds(&hist, 10.0).unwrap();
        assert_eq!((bounds.min(), bounds.max()), (20, 255));
    }

    #[test]
    fn test_black_bin_under_half_budget_is_clipped() {
        // Budget 5 per side; 4 black pixels fall short, the scan moves on to 30
        let hist = hist_of(&[(0, 4), (30, 2), (100, 88), (210, 6)]);
        let bounds = clip_bounds(&hist, 10.0).unwrap();
        assert_eq!((bounds.min(), bounds.max()), (30, 210));
    }

    #[test]
    fn test_zero_percent_matches_extrema() {
        let hist = hist_of(&[(30, 5), (90, 1), (199, 2)]);
        assert_eq!(clip_bounds(&hist, 0.0), min_max_bounds(&hist));
        assert_eq!(min_max_bounds(&hist).unwrap(), ClipBounds::new(30, 199).unwrap());
    }

    #[test]
    fn test_search_stops_short_of_last_bin() {
        // Everything at 255: the lower scan never reaches bin 255
        let hist = hist_of(&[(255, 9)]);
        let bounds = clip_bounds(&hist, 0.0).unwrap();
        assert_eq!((bounds.min(), bounds.max()), (0, 255));

        // Everything at 0: the upper scan never reaches bin 0
        let hist = hist_of(&[(0, 9)]);
        let bounds = clip_bounds(&hist, 0.0).unwrap();
        assert_eq!((bounds.min(), bounds.max()), (0, 255));
    }

    #[test]
    fn test_crossing_bounds_are_degenerate() {
        // 2 pixels at 99%: budget 2, one per side, the scans cross
        let hist = hist_of(&[(10, 1), (200, 1)]);
        assert_matches!(
            clip_bounds(&hist, 99.0),
            Err(SkipReason::DegenerateRange { min: 200, max: 10 })
        );
    }

    #[test]
    fn test_constant_image_is_degenerate() {
        let hist = hist_of(&[(128, 64)]);
        assert_matches!(
            min_max_bounds(&hist),
            Err(SkipReason::DegenerateRange { min: 128, max: 128 })
        );
        assert_matches!(
            clip_bounds(&hist, 0.0),
            Err(SkipReason::DegenerateRange { min: 128, max: 128 })
        );
    }

    #[test]
    fn test_invalid_percentages() {
        let hist = hist_of(&[(1, 1), (2, 1)]);
        assert_matches!(clip_bounds(&hist, -5.0), Err(SkipReason::InvalidClipPercent(_)));
        assert_matches!(clip_bounds(&hist, 100.0), Err(SkipReason::InvalidClipPercent(_)));
        assert_matches!(clip_bounds(&hist, f64::NAN), Err(SkipReason::InvalidClipPercent(_)));
    }

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram::new();
        assert_matches!(clip_bounds(&hist, 2.0), Err(SkipReason::EmptyImage));
        assert_matches!(min_max_bounds(&hist), Err(SkipReason::EmptyImage));
    }

    #[test]
    fn test_remap_clamps_and_rounds() {
        let bounds = ClipBounds::new(100, 149).unwrap();
        assert_eq!(bounds.remap(0), 0);
        assert_eq!(bounds.remap(100), 0);
        // 24 * 255 / 49 = 124.9
        assert_eq!(bounds.remap(124), 125);
        assert_eq!(bounds.remap(149), 255);
        assert_eq!(bounds.remap(255), 255);
    }

    #[test]
    fn test_identity_lookup_table() {
        let lut = ClipBounds::new(0, 255).unwrap().lookup_table();
        assert!(lut.iter().enumerate().all(|(i, &v)| usize::from(v) == i));
    }

    #[test]
    fn test_bounds_require_min_below_max() {
        assert!(ClipBounds::new(5, 5).is_none());
        assert!(ClipBounds::new(6, 5).is_none());
    }
}
