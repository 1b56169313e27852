//! The conversion pipeline: preflight checks, per-sequence splitting,
//! output writing, and manifest generation.

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use walkdir::WalkDir;

use crate::alov;
use crate::classes::{self, SequenceClass};
use crate::error::ConvertError;
use crate::manifest;
use crate::output::{OutputWriter, Split};
use crate::split::{shuffle_split, subsample, SplitFractions};
use crate::yolo::YoloLabel;

const IMAGE_EXTENSION: &str = "jpg";

/// Everything the conversion needs, assembled from the CLI.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub sequence_classes: PathBuf,
    pub output: PathBuf,
    pub empty_frames_dir: Option<PathBuf>,
    pub fractions: SplitFractions,
    pub use_every: usize,
    pub seed: Option<u64>,
}

/// What a finished run produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertSummary {
    pub seed: u64,
    pub class_count: usize,
    pub train_count: usize,
    pub validation_count: usize,
}

/// Run the whole ALOV-to-YOLO conversion.
///
/// The RNG is seeded once and shared across sequences and the negative
/// pool, so a fixed seed reproduces the entire dataset.
pub fn run_conversion(opts: &ConvertOptions) -> Result<ConvertSummary, ConvertError> {
    preflight(opts)?;

    let registry = classes::read_class_map(&opts.sequence_classes, &opts.input)?;

    let seed = opts.seed.unwrap_or_else(|| rand::rng().random());
    println!("Using seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let data_dir = opts.output.join("data");
    let train_dir = data_dir.join("train");
    let valid_dir = data_dir.join("valid");
    fs::create_dir(&data_dir)?;
    fs::create_dir(&train_dir)?;
    fs::create_dir(&valid_dir)?;

    let mut writer = OutputWriter::new(train_dir, valid_dir);

    for sequence in &registry.sequences {
        convert_sequence(sequence, opts, &mut rng, &mut writer)?;
    }

    if let Some(pool) = &opts.empty_frames_dir {
        convert_empty_frames(pool, opts.fractions, &mut rng, &mut writer)?;
    }

    manifest::write_manifest(
        &opts.output,
        &registry.names,
        writer.train_files(),
        writer.valid_files(),
    )?;

    let (train_count, validation_count) = writer.written();
    Ok(ConvertSummary {
        seed,
        class_count: registry.names.len(),
        train_count,
        validation_count,
    })
}

/// Validate the input/output paths before anything is written.
fn preflight(opts: &ConvertOptions) -> Result<(), ConvertError> {
    if !opts.input.is_dir() {
        return Err(ConvertError::InputNotADirectory {
            path: opts.input.clone(),
        });
    }

    if !opts.output.exists() {
        match opts.output.parent() {
            Some(parent) if parent.as_os_str().is_empty() || parent.is_dir() => {
                fs::create_dir(&opts.output)?;
            }
            _ => {
                return Err(ConvertError::OutputParentMissing {
                    path: opts.output.clone(),
                });
            }
        }
    }

    if !opts.output.is_dir() {
        return Err(ConvertError::OutputNotADirectory {
            path: opts.output.clone(),
        });
    }

    if fs::read_dir(&opts.output)?.next().is_some() {
        return Err(ConvertError::OutputNotEmpty {
            path: opts.output.clone(),
        });
    }

    if !opts.sequence_classes.is_file() {
        return Err(ConvertError::ClassMapMissing {
            path: opts.sequence_classes.clone(),
        });
    }

    Ok(())
}

fn convert_sequence(
    sequence: &SequenceClass,
    opts: &ConvertOptions,
    rng: &mut StdRng,
    writer: &mut OutputWriter,
) -> Result<(), ConvertError> {
    let annotation_file = alov::find_annotation_file(&sequence.directory)?;
    let entries = alov::read_annotation_file(&annotation_file)?;

    if entries.is_empty() {
        eprintln!("no entries in {}, skipping", annotation_file.display());
        return Ok(());
    }

    let entries = subsample(entries, opts.use_every);
    let sets = shuffle_split(entries, opts.fractions, rng);

    for (split, selected) in [
        (Split::Train, &sets.train),
        (Split::Validation, &sets.validation),
    ] {
        for entry in selected {
            let frame_path = sequence.directory.join(entry.frame_file_name());
            let (width, height) = read_image_dimensions(&frame_path)?;
            let label = YoloLabel::from_corner_box(
                sequence.class_id,
                entry.bbox,
                &frame_path,
                width,
                height,
            )?;
            writer.write_labeled(split, &frame_path, &label)?;
        }
    }

    Ok(())
}

/// Split the negative pool with the same fractions and RNG, writing each
/// selected image with an empty label file.
fn convert_empty_frames(
    pool: &Path,
    fractions: SplitFractions,
    rng: &mut StdRng,
    writer: &mut OutputWriter,
) -> Result<(), ConvertError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(pool).follow_links(true) {
        let entry = entry.map_err(|source| ConvertError::Traverse {
            path: pool.to_path_buf(),
            message: source.to_string(),
        })?;

        if entry.file_type().is_file() && has_image_extension(entry.path()) {
            images.push(entry.path().to_path_buf());
        }
    }

    // Traversal order is platform dependent; sort so the shuffle alone
    // determines the split.
    images.sort();

    let sets = shuffle_split(images, fractions, rng);

    for (split, selected) in [
        (Split::Train, &sets.train),
        (Split::Validation, &sets.validation),
    ] {
        for image in selected {
            writer.write_empty(split, image)?;
        }
    }

    Ok(())
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION))
        .unwrap_or(false)
}

fn read_image_dimensions(path: &Path) -> Result<(usize, usize), ConvertError> {
    let size = imagesize::size(path).map_err(|source| ConvertError::ImageDimensionRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok((size.width, size.height))
}
