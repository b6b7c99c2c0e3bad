//! Histogram plotting
//!
//! Drawing goes through the [`Canvas`] trait. Bar `i` is a vertical line at
//! `x = edge + 3*i` rising from the baseline `y = edge + height` by the bin's
//! pixel height. Colour histograms are drawn channel by channel onto the same
//! canvas.

mod canvas;

pub use canvas::{ImageCanvas, load_font};

use crate::histogram::{Histogram, scale_jointly};
use crate::types::{Channel, Palette, PlotGeometry};
use ab_glyph::FontVec;
use image::{Rgb, RgbImage, imageops};
use num_traits::ToPrimitive;

/// 2D drawing sink for plots
pub trait Canvas {
    /// Straight line including both end points
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb<u8>);

    /// Text whose baseline starts at `at`
    fn draw_text(&mut self, text: &str, at: (i32, i32), color: Rgb<u8>);
}

/// Which histogram of a colour image to plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramMode {
    /// One white histogram of the luma
    Luma,
    /// Blue, green and red histograms scaled together
    Channels,
}

/// Pixel height of one bin sample
///
/// Floats are rounded half away from zero. Negative, NaN and other
/// unrepresentable samples have no height.
#[must_use]
pub fn bar_height<T: ToPrimitive>(value: T) -> u32 {
    match value.to_f64() {
        Some(v) if v.is_finite() && v > 0.0 => v.round().to_u32().unwrap_or(u32::MAX),
        _ => 0,
    }
}

/// Draw one bar per sample; zero-height bars are not drawn
pub fn draw_bars<T, C>(canvas: &mut C, values: &[T], color: Rgb<u8>, geometry: &PlotGeometry)
where
    T: ToPrimitive + Copy,
    C: Canvas + ?Sized,
{
    let baseline = geometry.baseline_y() as i32;

    for (bin, &value) in values.iter().enumerate() {
        let height = bar_height(value);
        if height == 0 {
            continue;
        }

        let x = geometry.bar_x(bin as u32) as i32;
        let top = baseline.saturating_sub(i32::try_from(height).unwrap_or(i32::MAX));
        canvas.draw_line((x, baseline), (x, top), color);
    }
}

/// Draw an already scaled histogram
pub fn draw_histogram<C: Canvas + ?Sized>(
    canvas: &mut C,
    scaled: &Histogram,
    color: Rgb<u8>,
    geometry: &PlotGeometry,
) {
    draw_bars(canvas, scaled.counts(), color, geometry);
}

/// Horizontal axis with the first and last bin labelled
pub fn draw_axis<C: Canvas + ?Sized>(canvas: &mut C, geometry: &PlotGeometry, palette: &Palette) {
    let edge = geometry.edge as i32;
    let baseline = geometry.baseline_y() as i32;
    let right = geometry.bar_x(geometry.bins) as i32;

    canvas.draw_line((edge, baseline), (right, baseline), palette.white);
    canvas.draw_text("0", (edge - 3, baseline + 10), palette.white);

    let last_bin = geometry.bins.saturating_sub(1).to_string();
    canvas.draw_text(&last_bin, (right - 10, baseline + 10), palette.white);
}

/// Luma histogram of a colour image, scaled to the plot height
pub fn draw_histogram_gray<C: Canvas + ?Sized>(
    canvas: &mut C,
    image: &RgbImage,
    geometry: &PlotGeometry,
    palette: &Palette,
) {
    let luma = imageops::grayscale(image);
    let scaled = Histogram::of_gray(&luma).scale(geometry.height);
    draw_histogram(canvas, &scaled, palette.white, geometry);
}

/// Blue, green and red histograms scaled by their common maximum
pub fn draw_histogram_rgb<C: Canvas + ?Sized>(
    canvas: &mut C,
    image: &RgbImage,
    geometry: &PlotGeometry,
    palette: &Palette,
) {
    let histograms: Vec<Histogram> = Channel::ALL
        .iter()
        .map(|&channel| Histogram::of_channel(image, channel))
        .collect();

    for (channel, scaled) in Channel::ALL.iter().zip(scale_jointly(&histograms, geometry.height)) {
        draw_histogram(canvas, &scaled, palette.channel(*channel), geometry);
    }
}

/// Blank plot with axis and histogram(s) of `image`
#[must_use]
pub fn render_histogram(
    image: &RgbImage,
    mode: HistogramMode,
    geometry: &PlotGeometry,
    palette: &Palette,
    font: Option<&FontVec>,
) -> RgbImage {
    let (width, height) = geometry.canvas_size();
    let mut canvas = ImageCanvas::new(width, height, font);

    draw_axis(&mut canvas, geometry, palette);
    match mode {
        HistogramMode::Luma => draw_histogram_gray(&mut canvas, image, geometry, palette),
        HistogramMode::Channels => draw_histogram_rgb(&mut canvas, image, geometry, palette),
    }

    canvas.into_image()
}
