//! YOLO detection labels and the ALOV-to-YOLO coordinate normalizer.

use std::fmt;
use std::path::Path;

use crate::alov::CornerBox;
use crate::error::ConvertError;

/// Tolerance for float rounding at the frame edges. A box touching the frame
/// border can land a few ulps outside `[0, 1]` after normalization.
const BOUNDS_EPSILON: f64 = 1e-9;

/// One YOLO detection entry: class ID plus a center box in unit-square space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YoloLabel {
    pub class_id: u32,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

impl YoloLabel {
    /// Normalize a pixel-space corner box against the frame dimensions.
    ///
    /// Fails with [`ConvertError::BoxOutOfBounds`] when the normalized box
    /// escapes the unit square, which indicates malformed input annotations.
    /// `frame_path` only provides diagnostic context.
    pub fn from_corner_box(
        class_id: u32,
        bbox: CornerBox,
        frame_path: &Path,
        frame_width: usize,
        frame_height: usize,
    ) -> Result<Self, ConvertError> {
        let fw = frame_width as f64;
        let fh = frame_height as f64;

        let width = (bbox.x2 - bbox.x1) / fw;
        let height = (bbox.y2 - bbox.y1) / fh;
        let x_center = bbox.x1 / fw + width / 2.0;
        let y_center = bbox.y1 / fh + height / 2.0;

        let label = Self {
            class_id,
            x_center,
            y_center,
            width,
            height,
        };

        if !label.fits_unit_square() {
            return Err(ConvertError::BoxOutOfBounds {
                path: frame_path.to_path_buf(),
                cx: x_center,
                cy: y_center,
                w: width,
                h: height,
            });
        }

        Ok(label)
    }

    /// True when `center ± size/2` stays within `[0, 1]` on both axes.
    pub fn fits_unit_square(&self) -> bool {
        self.x_center - self.width / 2.0 >= -BOUNDS_EPSILON
            && self.y_center - self.height / 2.0 >= -BOUNDS_EPSILON
            && self.x_center + self.width / 2.0 <= 1.0 + BOUNDS_EPSILON
            && self.y_center + self.height / 2.0 <= 1.0 + BOUNDS_EPSILON
    }

    /// Denormalize back to a pixel-space corner box.
    pub fn to_corner_box(&self, frame_width: usize, frame_height: usize) -> CornerBox {
        let fw = frame_width as f64;
        let fh = frame_height as f64;

        CornerBox {
            x1: (self.x_center - self.width / 2.0) * fw,
            y1: (self.y_center - self.height / 2.0) * fh,
            x2: (self.x_center + self.width / 2.0) * fw,
            y2: (self.y_center + self.height / 2.0) * fh,
        }
    }
}

impl fmt::Display for YoloLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.6} {:.6} {:.6} {:.6}",
            self.class_id, self.x_center, self.y_center, self.width, self.height
        )
    }
}
