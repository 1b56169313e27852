//! Darknet-style manifest files describing the generated dataset.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

pub const NAMES_FILE: &str = "data.names";
pub const TRAIN_LIST_FILE: &str = "train.txt";
pub const VALID_LIST_FILE: &str = "test.txt";
pub const DESCRIPTOR_FILE: &str = "data.data";
pub const BACKUP_DIR: &str = "backup";

/// Write `data.names`, the two split file lists, and `data.data`, and create
/// the empty `backup/` directory reserved for training artifacts.
pub fn write_manifest(
    output_root: &Path,
    class_names: &[String],
    train_files: &[PathBuf],
    valid_files: &[PathBuf],
) -> Result<(), ConvertError> {
    let mut names = String::new();
    for name in class_names {
        names.push_str(name);
        names.push('\n');
    }
    fs::write(output_root.join(NAMES_FILE), names)?;

    fs::write(output_root.join(TRAIN_LIST_FILE), file_list(train_files))?;
    fs::write(output_root.join(VALID_LIST_FILE), file_list(valid_files))?;

    fs::create_dir(output_root.join(BACKUP_DIR))?;

    let descriptor = format!(
        "classes= {}\ntrain= {TRAIN_LIST_FILE}\nvalid= {VALID_LIST_FILE}\nnames= {NAMES_FILE}\nbackup= {BACKUP_DIR}/\n",
        class_names.len()
    );
    fs::write(output_root.join(DESCRIPTOR_FILE), descriptor)?;

    Ok(())
}

fn file_list(paths: &[PathBuf]) -> String {
    let mut out = String::new();
    for path in paths {
        out.push_str(&path.to_string_lossy());
        out.push('\n');
    }
    out
}
