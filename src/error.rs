use std::path::PathBuf;
use thiserror::Error;

/// Invalid geometry for a borrowed pixel plane
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaneError {
    #[error("row stride {stride} is smaller than width {width}")]
    StrideTooSmall { width: usize, stride: usize },

    #[error("buffer holds {actual} bytes, {width}x{height} plane with stride {stride} needs {required}")]
    BufferTooSmall {
        width: usize,
        height: usize,
        stride: usize,
        required: usize,
        actual: usize,
    },

    #[error("destination is {dst_width}x{dst_height}, source is {src_width}x{src_height}")]
    DimensionMismatch {
        src_width: usize,
        src_height: usize,
        dst_width: usize,
        dst_height: usize,
    },
}

/// Error for one input file, carrying the stage that failed
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Input could not be opened or decoded
    #[error("Failed to open image {}: {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output image could not be encoded or written
    #[error("Failed to save {}: {source}", .path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Label font could not be read or parsed
    #[error("Failed to load font: {0:#}")]
    FontLoad(anyhow::Error),

    /// Histogram rendered but terminal display failed
    #[error("{0:#}")]
    DisplayFailed(anyhow::Error),
}
