use crate::shared::face_detection::FaceDetection;
use crate::shared::frame::Frame;

/// Finds faces in a frame.
///
/// Returns zero or more detections in detector order; order carries no
/// meaning and each detection is processed independently. An empty result
/// is a normal outcome, not an error.
pub trait FaceLocalizer: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceDetection>, Box<dyn std::error::Error>>;
}
