use std::path::PathBuf;
use thiserror::Error;

/// The main error type for alov2yolo operations.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path} is not a directory")]
    InputNotADirectory { path: PathBuf },

    #[error("parent for {path} does not exist")]
    OutputParentMissing { path: PathBuf },

    #[error("{path} is not a directory")]
    OutputNotADirectory { path: PathBuf },

    #[error("{path} is not empty; use an empty directory to store the results")]
    OutputNotEmpty { path: PathBuf },

    #[error("{path} is not a file")]
    ClassMapMissing { path: PathBuf },

    #[error("failed to parse class map {path} at line {line}: {message}")]
    ClassMapParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("{path} does not exist or is not a directory")]
    SequenceDirMissing { path: PathBuf },

    #[error("expected exactly one annotation file in {dir}, found {count}")]
    AnnotationFileCount { dir: PathBuf, count: usize },

    #[error("failed to parse annotation file {path} at line {line}: {message}")]
    AnnotationParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("failed to read image dimensions from {path}: {source}")]
    ImageDimensionRead {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error(
        "bounding box for {path} escapes the unit square after normalization: \
         center=({cx:.6}, {cy:.6}) size=({w:.6}, {h:.6})"
    )]
    BoxOutOfBounds {
        path: PathBuf,
        cx: f64,
        cy: f64,
        w: f64,
        h: f64,
    },

    #[error("failed while traversing {path}: {message}")]
    Traverse { path: PathBuf, message: String },
}
