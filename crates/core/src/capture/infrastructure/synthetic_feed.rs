use crate::capture::domain::camera_feed::{CameraFeed, PermissionStatus};
use crate::shared::camera_metadata::{CameraFacing, CameraMetadata};
use crate::shared::frame::Frame;

const SYNTHETIC_FPS: f64 = 30.0;

/// Generates a fixed number of gradient frames, no camera required.
///
/// Pixel values are a deterministic function of position and frame index,
/// so downstream geometry can be checked against known content. The
/// permission answer is configurable to exercise the denial path.
pub struct SyntheticFeed {
    frame_count: usize,
    width: u32,
    height: u32,
    facing: CameraFacing,
    permission: PermissionStatus,
    opened: bool,
}

impl SyntheticFeed {
    pub fn new(
        frame_count: usize,
        width: u32,
        height: u32,
        facing: CameraFacing,
        permission: PermissionStatus,
    ) -> Self {
        Self {
            frame_count,
            width,
            height,
            facing,
            permission,
            opened: false,
        }
    }
}

fn gradient_frame(width: u32, height: u32, index: usize) -> Frame {
    let (w, h) = (width as usize, height as usize);
    let mut data = Vec::with_capacity(w * h * 3);
    for y in 0..h {
        for x in 0..w {
            data.push((x * 255 / w.max(1)) as u8);
            data.push((y * 255 / h.max(1)) as u8);
            data.push((index % 256) as u8);
        }
    }
    Frame::new(data, width, height, 3, index)
}

impl CameraFeed for SyntheticFeed {
    fn request_access(&mut self) -> Result<PermissionStatus, Box<dyn std::error::Error>> {
        Ok(self.permission)
    }

    fn open(&mut self) -> Result<CameraMetadata, Box<dyn std::error::Error>> {
        self.opened = true;
        Ok(CameraMetadata {
            width: self.width,
            height: self.height,
            fps: SYNTHETIC_FPS,
            facing: self.facing,
        })
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        if !self.opened {
            return Box::new(std::iter::once(Err("SyntheticFeed: not opened".into())));
        }
        let (width, height) = (self.width, self.height);
        Box::new((0..self.frame_count).map(move |index| Ok(gradient_frame(width, height, index))))
    }

    fn close(&mut self) {
        self.opened = false;
    }
}
