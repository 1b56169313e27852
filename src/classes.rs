//! Sequence-to-class registry.
//!
//! Built once from a `<sequence-subdirectory> <class-name>` mapping file and
//! immutable thereafter. Class IDs start at 0 and follow first appearance in
//! the file, so `data.names` order is the ID order.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// A sequence directory paired with its detection class ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceClass {
    pub directory: PathBuf,
    pub class_id: u32,
}

/// Class names in ID order plus the per-sequence class assignment.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    pub names: Vec<String>,
    pub sequences: Vec<SequenceClass>,
}

/// Build the registry from a mapping file.
///
/// Each referenced sequence subdirectory must exist under `input_root`.
/// Sequences sharing a class name share an ID, so multiple sequences may map
/// to the same class.
pub fn read_class_map(path: &Path, input_root: &Path) -> Result<ClassRegistry, ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::ClassMapMissing {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(ConvertError::Io)?;
    let mut ids: HashMap<String, u32> = HashMap::new();
    let mut registry = ClassRegistry::default();

    for (line_idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(ConvertError::ClassMapParse {
                path: path.to_path_buf(),
                line: line_idx + 1,
                message: format!(
                    "expected '<sequence-subdir> <class-name>', found {} token(s)",
                    tokens.len()
                ),
            });
        }

        let sequence_dir = input_root.join(tokens[0]);
        if !sequence_dir.is_dir() {
            return Err(ConvertError::SequenceDirMissing { path: sequence_dir });
        }

        let next_id = ids.len() as u32;
        let class_id = *ids.entry(tokens[1].to_string()).or_insert_with(|| {
            registry.names.push(tokens[1].to_string());
            next_id
        });

        registry.sequences.push(SequenceClass {
            directory: sequence_dir,
            class_id,
        });
    }

    Ok(registry)
}
