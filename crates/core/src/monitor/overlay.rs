use crate::shared::camera_metadata::CameraFacing;
use crate::shared::constants::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_X, DEFAULT_VIEWPORT_Y,
};
use crate::shared::face_detection::FaceDetection;

/// On-screen rectangle the camera preview occupies, in screen points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewViewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PreviewViewport {
    fn default() -> Self {
        Self {
            x: DEFAULT_VIEWPORT_X,
            y: DEFAULT_VIEWPORT_Y,
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Overlay rectangle in screen coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// One drawable detection: where to draw and what to caption.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceOverlay {
    pub rect: OverlayRect,
    pub caption: String,
}

/// Projects detections from capture pixel space into viewport space.
///
/// Mirrored previews (front cameras) flip the box horizontally inside the
/// viewport so it lands on the face the user sees.
#[derive(Clone, Debug)]
pub struct OverlayMapper {
    viewport: PreviewViewport,
    mirror: bool,
}

impl OverlayMapper {
    pub fn new(viewport: PreviewViewport, mirror: bool) -> Self {
        Self { viewport, mirror }
    }

    /// Mirror exactly when the camera faces the user.
    pub fn for_facing(viewport: PreviewViewport, facing: CameraFacing) -> Self {
        Self::new(viewport, facing == CameraFacing::Front)
    }

    pub fn project(
        &self,
        detection: &FaceDetection,
        capture_width: u32,
        capture_height: u32,
    ) -> FaceOverlay {
        let scale_x = self.viewport.width / capture_width.max(1) as f32;
        let scale_y = self.viewport.height / capture_height.max(1) as f32;

        let mut left = detection.top_left.0 * scale_x;
        let top = detection.top_left.1 * scale_y;
        let width = detection.width() * scale_x;
        let height = detection.height() * scale_y;
        if self.mirror {
            left = self.viewport.width - left - width;
        }

        FaceOverlay {
            rect: OverlayRect {
                left: self.viewport.x + left,
                top: self.viewport.y + top,
                width,
                height,
            },
            caption: caption(detection),
        }
    }
}

/// Debug caption with fixed decimal places: probability to 3, corners to 1.
fn caption(detection: &FaceDetection) -> String {
    format!(
        "p: {:.3} | tl: [{:.1}, {:.1}] | br: [{:.1}, {:.1}]",
        detection.probability,
        detection.top_left.0,
        detection.top_left.1,
        detection.bottom_right.0,
        detection.bottom_right.1,
    )
}
