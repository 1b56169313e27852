use std::fs;
use std::path::Path;

pub fn bmp_bytes(width: u32, height: u32) -> Vec<u8> {
    let row_stride = (width * 3).div_ceil(4) * 4;
    let pixel_array_size = row_stride * height;
    let file_size = 54 + pixel_array_size;

    let mut bytes = Vec::with_capacity(file_size as usize);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_size.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes.extend_from_slice(&54u32.to_le_bytes());

    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&(height as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&pixel_array_size.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    bytes.resize(file_size as usize, 0);
    bytes
}

/// Write BMP bytes under a `.jpg` name; dimension reading sniffs the content,
/// not the extension.
pub fn write_frame(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, bmp_bytes(width, height)).expect("write frame image");
}

/// Create an ALOV sequence directory with `frames` annotated 64x64 frames.
pub fn write_sequence(root: &Path, name: &str, frames: u32) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("create sequence dir");

    let mut annotations = String::new();
    for frame in 1..=frames {
        write_frame(&dir.join(format!("{frame:08}.jpg")), 64, 64);

        let (x1, y1) = (frame, frame);
        let (x2, y2) = (x1 + 20, y1 + 30);
        annotations.push_str(&format!(
            "{frame} {x1} {y1} {x2} {y1} {x1} {y2} {x2} {y2}\n"
        ));
    }

    fs::write(dir.join("annotations.ann"), annotations).expect("write annotation file");
}

pub fn write_class_map(path: &Path, rows: &[(&str, &str)]) {
    let mut content = String::new();
    for (dir, class) in rows {
        content.push_str(&format!("{dir} {class}\n"));
    }
    fs::write(path, content).expect("write class map");
}
