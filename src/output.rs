//! Flat output tree writer.
//!
//! Every written example draws the next ID from a single global sequence
//! shared across sequences and both splits, replacing the original
//! per-sequence frame numbering.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::yolo::YoloLabel;

/// The two output splits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    Train,
    Validation,
}

impl Split {
    fn tag(self) -> &'static str {
        match self {
            Split::Train => "TRAIN",
            Split::Validation => "VALID",
        }
    }
}

/// Copies frames into the split directories under fresh 8-digit IDs and
/// writes the paired label files.
pub struct OutputWriter {
    train_dir: PathBuf,
    valid_dir: PathBuf,
    next_id: u64,
    train_files: Vec<PathBuf>,
    valid_files: Vec<PathBuf>,
}

impl OutputWriter {
    pub fn new(train_dir: PathBuf, valid_dir: PathBuf) -> Self {
        Self {
            train_dir,
            valid_dir,
            next_id: 0,
            train_files: Vec::new(),
            valid_files: Vec::new(),
        }
    }

    /// Copy `src` into the split with a one-line YOLO label.
    pub fn write_labeled(
        &mut self,
        split: Split,
        src: &Path,
        label: &YoloLabel,
    ) -> Result<(), ConvertError> {
        let (image_path, label_path) = self.allocate(split);

        fs::copy(src, &image_path).map_err(ConvertError::Io)?;
        fs::write(&label_path, format!("{label}\n")).map_err(ConvertError::Io)?;

        println!(
            "{}: {} => {}, {}",
            split.tag(),
            src.display(),
            image_path.display(),
            label
        );

        self.record(split, image_path);
        Ok(())
    }

    /// Copy `src` as a negative example with an empty label file.
    pub fn write_empty(&mut self, split: Split, src: &Path) -> Result<(), ConvertError> {
        let (image_path, label_path) = self.allocate(split);

        fs::copy(src, &image_path).map_err(ConvertError::Io)?;
        fs::write(&label_path, "").map_err(ConvertError::Io)?;

        println!(
            "EMPTY {}: {} => {}",
            split.tag(),
            src.display(),
            image_path.display()
        );

        self.record(split, image_path);
        Ok(())
    }

    /// Image paths written to the training split, in write order.
    pub fn train_files(&self) -> &[PathBuf] {
        &self.train_files
    }

    /// Image paths written to the validation split, in write order.
    pub fn valid_files(&self) -> &[PathBuf] {
        &self.valid_files
    }

    /// Written example counts as `(train, validation)`.
    pub fn written(&self) -> (usize, usize) {
        (self.train_files.len(), self.valid_files.len())
    }

    fn allocate(&mut self, split: Split) -> (PathBuf, PathBuf) {
        let dir = match split {
            Split::Train => &self.train_dir,
            Split::Validation => &self.valid_dir,
        };

        let stem = format!("{:08}", self.next_id);
        self.next_id += 1;

        (
            dir.join(format!("{stem}.jpg")),
            dir.join(format!("{stem}.txt")),
        )
    }

    fn record(&mut self, split: Split, image_path: PathBuf) {
        match split {
            Split::Train => self.train_files.push(image_path),
            Split::Validation => self.valid_files.push(image_path),
        }
    }
}
