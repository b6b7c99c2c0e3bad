use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{DEFAULT_CLIP_PERCENT, HIST_EDGE, HIST_HEIGHT, MAX_PLOT_EDGE, MAX_PLOT_HEIGHT};
use crate::normalize::Algorithm;

/// Brightness normalization to apply before saving
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeMode {
    /// Only plot the histogram
    #[default]
    None,
    /// Stretch the value channel between its darkest and brightest pixel
    MinMax,
    /// Stretch the value channel after discarding --clip-percent of the pixels
    Clip,
}

/// Plot image histograms and auto-level image brightness
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Image file path(s) to process
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Normalization to apply
    #[arg(short, long, value_enum, default_value_t = NormalizeMode::None)]
    pub normalize: NormalizeMode,

    /// Percentage of extreme pixels ignored by clip normalization
    #[arg(short, long, default_value_t = DEFAULT_CLIP_PERCENT, allow_negative_numbers = true)]
    pub clip_percent: f64,

    /// Plot the luma histogram instead of one histogram per channel
    #[arg(short, long)]
    pub gray: bool,

    /// Directory for output files (defaults to the input's directory)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Height of the tallest histogram bar in pixels
    #[arg(
        long,
        default_value_t = HIST_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PLOT_HEIGHT))
    )]
    pub plot_height: u32,

    /// Margin around the plot in pixels
    #[arg(
        long,
        default_value_t = HIST_EDGE,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_PLOT_EDGE))
    )]
    pub plot_edge: u32,

    /// Font for axis labels (labels are omitted without one)
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Print the histogram in the terminal
    #[arg(short, long)]
    pub show: bool,

    /// Terminal output width in columns
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Terminal output height in rows
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Show histogram statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The algorithm selected on the command line, if any
    #[must_use]
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self.normalize {
            NormalizeMode::None => None,
            NormalizeMode::MinMax => Some(Algorithm::MinMax),
            NormalizeMode::Clip => Some(Algorithm::Clip {
                percent: self.clip_percent,
            }),
        }
    }
}
