use std::path::Path;

use proptest::prelude::*;

use alov2yolo::alov::CornerBox;
use alov2yolo::yolo::YoloLabel;

/// Frame dimensions plus an integer corner box strictly inside the frame.
fn frame_and_box() -> impl Strategy<Value = (usize, usize, CornerBox)> {
    (2usize..2000, 2usize..2000).prop_flat_map(|(fw, fh)| {
        (0..fw as u32 - 1, 0..fh as u32 - 1).prop_flat_map(move |(x1, y1)| {
            (x1 + 1..=fw as u32, y1 + 1..=fh as u32).prop_map(move |(x2, y2)| {
                (
                    fw,
                    fh,
                    CornerBox {
                        x1: x1 as f64,
                        y1: y1 as f64,
                        x2: x2 as f64,
                        y2: y2 as f64,
                    },
                )
            })
        })
    })
}

proptest! {
    #[test]
    fn normalized_box_stays_in_unit_square((fw, fh, bbox) in frame_and_box()) {
        let label = YoloLabel::from_corner_box(0, bbox, Path::new("frame.jpg"), fw, fh)
            .expect("in-frame box normalizes");

        prop_assert!(label.fits_unit_square());
        prop_assert!(label.x_center - label.width / 2.0 >= -1e-9);
        prop_assert!(label.y_center - label.height / 2.0 >= -1e-9);
        prop_assert!(label.x_center + label.width / 2.0 <= 1.0 + 1e-9);
        prop_assert!(label.y_center + label.height / 2.0 <= 1.0 + 1e-9);
    }

    #[test]
    fn denormalization_reconstructs_the_corner_box((fw, fh, bbox) in frame_and_box()) {
        let label = YoloLabel::from_corner_box(0, bbox, Path::new("frame.jpg"), fw, fh)
            .expect("in-frame box normalizes");
        let restored = label.to_corner_box(fw, fh);

        prop_assert!((restored.x1 - bbox.x1).abs() < 1e-6);
        prop_assert!((restored.y1 - bbox.y1).abs() < 1e-6);
        prop_assert!((restored.x2 - bbox.x2).abs() < 1e-6);
        prop_assert!((restored.y2 - bbox.y2).abs() < 1e-6);
    }

    #[test]
    fn boxes_escaping_the_frame_are_rejected((fw, fh, bbox) in frame_and_box()) {
        let escaped = CornerBox {
            x2: bbox.x2 + fw as f64,
            ..bbox
        };
        let err = YoloLabel::from_corner_box(0, escaped, Path::new("frame.jpg"), fw, fh);
        prop_assert!(err.is_err());
    }
}
