use std::collections::HashMap;
use std::sync::Arc;

use crate::detection::domain::face_localizer::FaceLocalizer;
use crate::shared::face_detection::FaceDetection;
use crate::shared::frame::Frame;

/// Replays scripted detections by frame index.
///
/// Drives the pipeline without an ML runtime: the demo mode scripts a box
/// per frame, and tests script exact geometry to make downstream stages
/// deterministic. Frames without an entry yield no faces.
pub struct ReplayLocalizer {
    script: Arc<HashMap<usize, Vec<FaceDetection>>>,
}

impl ReplayLocalizer {
    pub fn new(script: Arc<HashMap<usize, Vec<FaceDetection>>>) -> Self {
        Self { script }
    }
}

impl FaceLocalizer for ReplayLocalizer {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceDetection>, Box<dyn std::error::Error>> {
        Ok(self.script.get(&frame.index()).cloned().unwrap_or_default())
    }
}
