//! 256-bin intensity histograms

use crate::raster::{Plane, extract_channel};
use crate::types::Channel;
use image::{GrayImage, RgbImage};
use std::ops::Index;

const BIN_COUNT: usize = 256;

/// Count of pixels at each 8-bit intensity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; BIN_COUNT],
}

impl Histogram {
    pub const BINS: usize = BIN_COUNT;

    #[must_use]
    pub const fn new() -> Self {
        Self { bins: [0; Self::BINS] }
    }

    #[must_use]
    pub const fn from_counts(bins: [u64; Self::BINS]) -> Self {
        Self { bins }
    }

    /// Count every pixel of a single-channel plane
    ///
    /// An empty plane gives an all-zero histogram.
    #[must_use]
    pub fn compute(plane: &Plane<'_>) -> Self {
        let mut hist = Self::new();
        for v in plane.samples() {
            hist.bins[usize::from(v)] += 1;
        }
        tracing::trace!(
            pixels = hist.total(),
            max_count = hist.max_count(),
            "computed histogram"
        );
        hist
    }

    #[must_use]
    pub fn of_gray(image: &GrayImage) -> Self {
        Self::compute(&Plane::from(image))
    }

    /// Histogram of one colour channel
    #[must_use]
    pub fn of_channel(image: &RgbImage, channel: Channel) -> Self {
        Self::of_gray(&extract_channel(image, channel))
    }

    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[u64; Self::BINS] {
        &self.bins
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.bins.iter().copied()
    }

    /// Total number of pixels counted
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.iter().all(|&c| c == 0)
    }

    /// Lowest intensity present
    #[must_use]
    pub fn first_nonzero(&self) -> Option<u8> {
        self.bins.iter().position(|&c| c > 0).map(|i| i as u8)
    }

    /// Highest intensity present
    #[must_use]
    pub fn last_nonzero(&self) -> Option<u8> {
        self.bins.iter().rposition(|&c| c > 0).map(|i| i as u8)
    }

    /// Most frequent intensity (lowest one on ties)
    #[must_use]
    pub fn mode(&self) -> Option<u8> {
        let max = self.max_count();
        if max == 0 {
            return None;
        }
        self.bins.iter().position(|&c| c == max).map(|i| i as u8)
    }

    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: f64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(v, &c)| v as f64 * c as f64)
            .sum();
        Some(weighted / total as f64)
    }

    /// Rescale counts so the largest bin becomes `target_height`
    ///
    /// An all-zero histogram is returned unchanged.
    #[must_use]
    pub fn scale(&self, target_height: u32) -> Self {
        self.scale_against(target_height, self.max_count())
    }

    /// Rescale counts so that `reference_max` maps to `target_height`
    ///
    /// Bins are rounded half away from zero. A zero reference returns the
    /// histogram unchanged.
    #[must_use]
    pub fn scale_against(&self, target_height: u32, reference_max: u64) -> Self {
        if reference_max == 0 {
            return self.clone();
        }

        let factor = f64::from(target_height) / reference_max as f64;
        let mut scaled = Self::new();
        for (out, &count) in scaled.bins.iter_mut().zip(self.bins.iter()) {
            *out = (count as f64 * factor).round() as u64;
        }
        scaled
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<u8> for Histogram {
    type Output = u64;

    fn index(&self, bin: u8) -> &u64 {
        &self.bins[usize::from(bin)]
    }
}

/// Scale several histograms by their common maximum
///
/// Keeps relative magnitudes comparable between channels.
#[must_use]
pub fn scale_jointly(histograms: &[Histogram], target_height: u32) -> Vec<Histogram> {
    let global_max = histograms.iter().map(Histogram::max_count).max().unwrap_or(0);
    histograms
        .iter()
        .map(|h| h.scale_against(target_height, global_max))
        .collect()
}
