//! Plot geometry, colour palette and channel names

use crate::config::{HIST_BINS, HIST_EDGE, HIST_HEIGHT};
use image::Rgb;
use std::fmt;

/// One colour plane of an RGB image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Blue,
    Green,
    Red,
}

impl Channel {
    /// Blue, green, red: the order histograms are drawn in
    pub const ALL: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];

    /// Sample index within an `Rgb<u8>` pixel
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Blue => write!(f, "Blue"),
            Channel::Green => write!(f, "Green"),
            Channel::Red => write!(f, "Red"),
        }
    }
}

/// Named drawing colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub red: Rgb<u8>,
    pub green: Rgb<u8>,
    pub blue: Rgb<u8>,
    pub white: Rgb<u8>,
}

impl Palette {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            red: Rgb([0xff, 0x00, 0x00]),
            green: Rgb([0x00, 0xff, 0x00]),
            blue: Rgb([0x00, 0x00, 0xff]),
            white: Rgb([0xff, 0xff, 0xff]),
        }
    }

    #[must_use]
    pub fn channel(&self, channel: Channel) -> Rgb<u8> {
        match channel {
            Channel::Blue => self.blue,
            Channel::Green => self.green,
            Channel::Red => self.red,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Layout of a histogram plot
///
/// Bars are 3 pixels apart, starting `edge` pixels from the left, and grow
/// upward from the baseline at `edge + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotGeometry {
    pub bins: u32,
    pub height: u32,
    pub edge: u32,
}

impl PlotGeometry {
    /// Horizontal distance between neighbouring bars
    pub const BAR_SPACING: u32 = 3;

    #[must_use]
    pub fn new(bins: u32, height: u32, edge: u32) -> Self {
        Self { bins, height, edge }
    }

    /// Canvas (width, height) that fits the plot and its margins
    #[inline]
    #[must_use]
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            2 * self.edge + Self::BAR_SPACING * self.bins,
            2 * self.edge + self.height,
        )
    }

    #[inline]
    #[must_use]
    pub fn bar_x(&self, bin: u32) -> u32 {
        self.edge + bin * Self::BAR_SPACING
    }

    #[inline]
    #[must_use]
    pub fn baseline_y(&self) -> u32 {
        self.edge + self.height
    }
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self::new(HIST_BINS, HIST_HEIGHT, HIST_EDGE)
    }
}

impl fmt::Display for PlotGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.canvas_size();
        write!(
            f,
            "{bins} bins, {height}px tall, {edge}px edge ({w}x{h})",
            bins = self.bins,
            height = self.height,
            edge = self.edge
        )
    }
}
