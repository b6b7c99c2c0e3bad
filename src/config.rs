//! Default constants

/// Number of histogram bins, one per 8-bit intensity
pub const HIST_BINS: u32 = 256;

/// Height of the plotted bars for the largest bin, in pixels
pub const HIST_HEIGHT: u32 = 300;

/// Margin around the plot, in pixels
pub const HIST_EDGE: u32 = 15;

/// Percentage of extreme pixels discarded by clip normalization
pub const DEFAULT_CLIP_PERCENT: f64 = 2.0;

/// Font size for axis labels, in pixels
pub const LABEL_SCALE: f32 = 11.0;

/// Largest accepted `--plot-height`
pub const MAX_PLOT_HEIGHT: u32 = 4096;

/// Largest accepted `--plot-edge`
pub const MAX_PLOT_EDGE: u32 = 1024;
