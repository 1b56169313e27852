//! alov2yolo: convert ALOV tracking sequences into a YOLO detection dataset.
//!
//! The input is a directory of video sequences in ALOV format, each holding
//! ordered frame images and one `.ann` file with per-frame bounding boxes as
//! corner points, plus a file mapping every sequence to an object class.
//! The output is a flat detection dataset: normalized YOLO labels, a
//! train/validation split, and the darknet-style manifest files
//! (`data.names`, `train.txt`, `test.txt`, `data.data`, `backup/`).
//!
//! # Modules
//!
//! - [`alov`]: annotation file discovery and parsing
//! - [`classes`]: sequence-to-class registry
//! - [`yolo`]: coordinate normalization into YOLO labels
//! - [`split`]: subsampling, shuffling, and train/validation splitting
//! - [`output`]: flat output tree with a global output-ID sequence
//! - [`manifest`]: darknet manifest files
//! - [`convert`]: the pipeline tying everything together
//! - [`error`]: error types for alov2yolo operations

pub mod alov;
pub mod classes;
pub mod convert;
pub mod error;
pub mod manifest;
pub mod output;
pub mod split;
pub mod yolo;

use std::path::PathBuf;

use clap::Parser;

use convert::ConvertOptions;
use split::SplitFractions;

pub use error::ConvertError;

/// The alov2yolo CLI application.
#[derive(Parser)]
#[command(name = "alov2yolo")]
#[command(version, about)]
struct Cli {
    /// Directory containing ALOV sequence subdirectories with frames and annotations.
    input: PathBuf,

    /// File mapping each sequence subdirectory to the tracked object's class name.
    sequence_classes: PathBuf,

    /// Empty directory that receives the generated detection dataset.
    output: PathBuf,

    /// Directory with frames that contain no objects (negative examples).
    #[arg(long, value_name = "DIR")]
    directory_with_empty_frames: Option<PathBuf>,

    /// Fraction of frames from each sequence used for training (0.0-1.0).
    #[arg(long, default_value_t = 0.3, value_parser = parse_fraction)]
    train_frames_percentage: f64,

    /// Fraction of frames from each sequence used for validation (0.0-1.0).
    #[arg(long, default_value_t = 0.1, value_parser = parse_fraction)]
    validation_frames_percentage: f64,

    /// Keep every Nth frame of a sequence before shuffling.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=119))]
    use_every: u32,

    /// Seed for the random shuffling; drawn and printed when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_fraction(raw: &str) -> Result<f64, String> {
    match raw.parse::<f64>() {
        Ok(value) if (0.0..=1.0).contains(&value) => Ok(value),
        _ => Err("fraction must be between 0.0 and 1.0".to_string()),
    }
}

/// Run the alov2yolo CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ConvertError> {
    let cli = Cli::parse();

    let opts = ConvertOptions {
        input: cli.input,
        sequence_classes: cli.sequence_classes,
        output: cli.output,
        empty_frames_dir: cli.directory_with_empty_frames,
        fractions: SplitFractions {
            train: cli.train_frames_percentage,
            validation: cli.validation_frames_percentage,
        },
        use_every: cli.use_every as usize,
        seed: cli.seed,
    };

    let summary = convert::run_conversion(&opts)?;

    println!();
    println!(
        "Wrote {} training and {} validation example(s) across {} class(es).",
        summary.train_count, summary.validation_count, summary.class_count
    );

    Ok(())
}
