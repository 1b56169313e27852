//! ALOV sequence annotations: discovery and parsing.
//!
//! Each sequence directory holds ordered frame images named
//! `<frame-id zero-padded to 8>.jpg` plus exactly one `.ann` file listing
//! per-frame bounding boxes as four corner points in pixel space.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ConvertError;

const ANNOTATION_EXTENSION: &str = "ann";

/// An axis-aligned bounding box in raw pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// One labeled frame from a sequence's annotation file.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationEntry {
    pub frame_id: u64,
    pub bbox: CornerBox,
}

impl AnnotationEntry {
    /// File name of the frame image this entry annotates.
    pub fn frame_file_name(&self) -> String {
        format!("{:08}.jpg", self.frame_id)
    }
}

/// Locate the single `.ann` file inside a sequence directory.
pub fn find_annotation_file(dir: &Path) -> Result<PathBuf, ConvertError> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|source| ConvertError::Traverse {
            path: dir.to_path_buf(),
            message: source.to_string(),
        })?;

        if entry.file_type().is_file() && has_extension(entry.path(), ANNOTATION_EXTENSION) {
            found.push(entry.path().to_path_buf());
        }
    }

    if found.len() != 1 {
        return Err(ConvertError::AnnotationFileCount {
            dir: dir.to_path_buf(),
            count: found.len(),
        });
    }

    Ok(found.remove(0))
}

/// Read every entry of an annotation file, skipping blank lines.
pub fn read_annotation_file(path: &Path) -> Result<Vec<AnnotationEntry>, ConvertError> {
    let content = fs::read_to_string(path).map_err(ConvertError::Io)?;
    let mut entries = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        if let Some(entry) = parse_annotation_line(line, path, line_idx + 1)? {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Parse one `frame-id x1 y1 x2 y1 x1 y2 x2 y2` line.
///
/// A non-rotated quadrilateral degenerates to an axis-aligned box, so only
/// the first corner plus the second corner's x and the third corner's y are
/// consumed; the remaining fields are redundant.
fn parse_annotation_line(
    line: &str,
    file_path: &Path,
    line_num: usize,
) -> Result<Option<AnnotationEntry>, ConvertError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() != 9 {
        return Err(ConvertError::AnnotationParse {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!("expected 9 tokens, found {}", tokens.len()),
        });
    }

    let frame_id = tokens[0]
        .parse::<u64>()
        .map_err(|_| ConvertError::AnnotationParse {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!(
                "invalid frame id '{}'; expected non-negative integer",
                tokens[0]
            ),
        })?;

    let x1 = parse_f64_token(tokens[1], "x1", file_path, line_num)?;
    let y1 = parse_f64_token(tokens[2], "y1", file_path, line_num)?;
    let x2 = parse_f64_token(tokens[3], "x2", file_path, line_num)?;
    let y2 = parse_f64_token(tokens[6], "y2", file_path, line_num)?;

    Ok(Some(AnnotationEntry {
        frame_id,
        bbox: CornerBox { x1, y1, x2, y2 },
    }))
}

fn parse_f64_token(
    raw: &str,
    field_name: &str,
    file_path: &Path,
    line_num: usize,
) -> Result<f64, ConvertError> {
    raw.parse::<f64>()
        .map_err(|_| ConvertError::AnnotationParse {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!("invalid {field_name} '{raw}'; expected floating-point number"),
        })
}

fn has_extension(path: &Path, allowed: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(allowed))
        .unwrap_or(false)
}
