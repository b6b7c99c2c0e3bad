use ab_glyph::FontVec;
use clap::{CommandFactory, Parser};
use histlevels::cli::Args;
use histlevels::display;
use histlevels::error::ProcessError;
use histlevels::histogram::Histogram;
use histlevels::normalize::normalize_value_channel;
use histlevels::plot::{self, HistogramMode};
use histlevels::types::{Palette, PlotGeometry};
use histlevels::{display_stats, HIST_BINS};
use image::{imageops, RgbImage};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if args.files.is_empty() {
        let _ = Args::command().print_help();
        println!();
        return;
    }

    let font = match args.font.as_deref().map(plot::load_font).transpose() {
        Ok(font) => font,
        Err(e) => {
            println!("Error: {}", ProcessError::FontLoad(e));
            std::process::exit(1);
        }
    };

    let multiple_files = args.files.len() > 1;
    let mut any_failed = false;

    for (idx, file_path) in args.files.iter().enumerate() {
        if multiple_files {
            println!("{}", file_path.display());
        }

        if let Err(e) = process_file(file_path, &args, font.as_ref()) {
            println!("Error: {e}");
            any_failed = true;
        }

        if multiple_files && idx < args.files.len() - 1 {
            println!();
        }
    }

    if any_failed {
        std::process::exit(1);
    }
}

/// Process a single image file, returning the paths written
fn process_file(
    file_path: &Path,
    args: &Args,
    font: Option<&FontVec>,
) -> Result<Vec<PathBuf>, ProcessError> {
    // Stage 1: Decode
    let image: RgbImage = image::open(file_path)
        .map_err(|source| ProcessError::OpenFailed {
            path: file_path.to_path_buf(),
            source,
        })?
        .to_rgb8();

    let geometry = PlotGeometry::new(HIST_BINS, args.plot_height, args.plot_edge);
    let palette = Palette::default();
    let mode = if args.gray {
        HistogramMode::Luma
    } else {
        HistogramMode::Channels
    };
    let mut written = Vec::new();

    // Stage 2: Histogram of the input
    if args.verbose {
        display_stats::print_stats("Input", &Histogram::of_gray(&imageops::grayscale(&image)));
    }
    let mut plot = plot::render_histogram(&image, mode, &geometry, &palette, font);
    written.push(save(&plot, &output_path(file_path, args, "hist"))?);

    // Stage 3: Normalize, then plot the result
    if let Some(algorithm) = args.algorithm() {
        let (normalized, outcome) = normalize_value_channel(&image, algorithm);
        info!(file = %file_path.display(), %algorithm, ?outcome, "normalized");

        if args.verbose {
            display_stats::print_outcome(&outcome);
            display_stats::print_stats(
                "Normalized",
                &Histogram::of_gray(&imageops::grayscale(&normalized)),
            );
        }

        written.push(save(&normalized, &output_path(file_path, args, "norm"))?);
        plot = plot::render_histogram(&normalized, mode, &geometry, &palette, font);
        written.push(save(&plot, &output_path(file_path, args, "norm.hist"))?);
    }

    // Stage 4: Display
    if args.show {
        display::print_plot(&plot, args).map_err(ProcessError::DisplayFailed)?;
    }

    Ok(written)
}

/// `<dir>/<stem>.<suffix>.png`, where dir is --out-dir or the input's directory
fn output_path(file_path: &Path, args: &Args, suffix: &str) -> PathBuf {
    let stem = file_path
        .file_stem()
        .map_or_else(|| "image".to_string(), |s| s.to_string_lossy().into_owned());
    let dir = args
        .out_dir
        .as_deref()
        .or_else(|| file_path.parent())
        .unwrap_or_else(|| Path::new("."));
    dir.join(format!("{stem}.{suffix}.png"))
}

fn save(image: &RgbImage, path: &Path) -> Result<PathBuf, ProcessError> {
    image.save(path).map_err(|source| ProcessError::SaveFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "saved");
    Ok(path.to_path_buf())
}
