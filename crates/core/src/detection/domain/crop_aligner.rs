use ndarray::{Array3, ArrayView3};

use crate::shared::cropped_face::CroppedFace;
use crate::shared::face_detection::FaceDetection;
use crate::shared::frame::Frame;

/// Extracts a detected face region and resizes it to the classifier's
/// square input, bilinear, byte values normalized to [0, 1].
///
/// Corner coordinates are first normalized against the frame dimensions and
/// clamped to [0, 1], so boxes spilling over a frame edge are clipped
/// rather than rejected. A box whose clipped width or height collapses to
/// zero (or is inverted) yields `None`; degenerate detections are a normal
/// per-face skip, not an error.
#[derive(Clone, Debug)]
pub struct CropAligner {
    side: usize,
}

impl CropAligner {
    pub fn new(side: usize) -> Self {
        debug_assert!(side > 0, "aligned side must be positive");
        Self { side }
    }

    pub fn align(&self, frame: &Frame, detection: &FaceDetection) -> Option<CroppedFace> {
        if frame.width() == 0 || frame.height() == 0 || frame.channels() != 3 {
            return None;
        }
        let fw = frame.width() as f32;
        let fh = frame.height() as f32;

        let left = (detection.top_left.0 / fw).clamp(0.0, 1.0);
        let top = (detection.top_left.1 / fh).clamp(0.0, 1.0);
        let right = (detection.bottom_right.0 / fw).clamp(0.0, 1.0);
        let bottom = (detection.bottom_right.1 / fh).clamp(0.0, 1.0);

        let crop_w = (right - left) * fw;
        let crop_h = (bottom - top) * fh;
        if crop_w <= 0.0 || crop_h <= 0.0 {
            return None;
        }

        let pixels = frame.as_ndarray();
        let (x0, y0) = (left * fw, top * fh);
        let mut tensor = Array3::<f32>::zeros((self.side, self.side, 3));
        for row in 0..self.side {
            let src_y = y0 + (row as f32 + 0.5) * crop_h / self.side as f32 - 0.5;
            for col in 0..self.side {
                let src_x = x0 + (col as f32 + 0.5) * crop_w / self.side as f32 - 0.5;
                for ch in 0..3 {
                    tensor[[row, col, ch]] = sample_bilinear(&pixels, src_x, src_y, ch) / 255.0;
                }
            }
        }
        Some(CroppedFace::new(tensor))
    }
}

/// Bilinear sample of one channel at fractional pixel coordinates, with
/// edge clamping.
fn sample_bilinear(pixels: &ArrayView3<'_, u8>, x: f32, y: f32, channel: usize) -> f32 {
    let (h, w) = (pixels.shape()[0], pixels.shape()[1]);
    let x = x.max(0.0);
    let y = y.max(0.0);

    let x0 = (x.floor() as usize).min(w - 1);
    let y0 = (y.floor() as usize).min(h - 1);
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let dx = (x - x0 as f32).clamp(0.0, 1.0);
    let dy = (y - y0 as f32).clamp(0.0, 1.0);

    let p00 = pixels[[y0, x0, channel]] as f32;
    let p01 = pixels[[y0, x1, channel]] as f32;
    let p10 = pixels[[y1, x0, channel]] as f32;
    let p11 = pixels[[y1, x1, channel]] as f32;

    let top = p00 + (p01 - p00) * dx;
    let bottom = p10 + (p11 - p10) * dx;
    top + (bottom - top) * dy
}
