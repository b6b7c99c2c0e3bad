pub mod cli;
pub mod config;
pub mod display;
pub mod display_stats;
pub mod error;
pub mod histogram;
pub mod normalize;
pub mod plot;
pub mod raster;
pub mod types;

// Re-export commonly used items
pub use config::{DEFAULT_CLIP_PERCENT, HIST_BINS, HIST_EDGE, HIST_HEIGHT};
pub use histogram::Histogram;
pub use normalize::{Algorithm, ClipBounds, Normalized, SkipReason};
