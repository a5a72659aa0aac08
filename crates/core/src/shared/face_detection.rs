/// One detected face in a frame.
///
/// Corner coordinates are in the source frame's pixel space; `probability`
/// is the detector's confidence in [0, 1]. Detections are consumed within
/// the frame iteration that produced them and never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceDetection {
    pub top_left: (f32, f32),
    pub bottom_right: (f32, f32),
    pub probability: f32,
}

impl FaceDetection {
    pub fn new(top_left: (f32, f32), bottom_right: (f32, f32), probability: f32) -> Self {
        Self {
            top_left,
            bottom_right,
            probability,
        }
    }

    /// Box width; negative when the corners are inverted (degenerate).
    pub fn width(&self) -> f32 {
        self.bottom_right.0 - self.top_left.0
    }

    /// Box height; negative when the corners are inverted (degenerate).
    pub fn height(&self) -> f32 {
        self.bottom_right.1 - self.top_left.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_width_and_height() {
        let det = FaceDetection::new((10.0, 20.0), (110.0, 170.0), 0.9);
        assert_relative_eq!(det.width(), 100.0);
        assert_relative_eq!(det.height(), 150.0);
    }

    #[test]
    fn test_inverted_corners_yield_negative_extent() {
        let det = FaceDetection::new((50.0, 50.0), (40.0, 60.0), 0.9);
        assert!(det.width() < 0.0);
        assert!(det.height() > 0.0);
    }

    #[test]
    fn test_zero_area_box() {
        let det = FaceDetection::new((30.0, 30.0), (30.0, 30.0), 0.5);
        assert_relative_eq!(det.width(), 0.0);
        assert_relative_eq!(det.height(), 0.0);
    }
}
