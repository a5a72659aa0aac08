use std::fs;
use std::path::PathBuf;

use image::imageops::FilterType;

use crate::capture::domain::camera_feed::{CameraFeed, PermissionStatus};
use crate::shared::camera_metadata::{CameraFacing, CameraMetadata};
use crate::shared::constants::IMAGE_EXTENSIONS;
use crate::shared::frame::Frame;

/// Adapts a directory of image files to the [`CameraFeed`] interface.
///
/// Files are streamed in lexicographic name order, each decoded and resized
/// to the configured capture geometry, so recorded stills stand in for a
/// live camera. Access is always granted; a directory needs no permission.
pub struct ImageSequenceFeed {
    dir: PathBuf,
    width: u32,
    height: u32,
    fps: f64,
    facing: CameraFacing,
    files: Option<Vec<PathBuf>>,
}

impl ImageSequenceFeed {
    pub fn new(dir: PathBuf, width: u32, height: u32, fps: f64, facing: CameraFacing) -> Self {
        Self {
            dir,
            width,
            height,
            fps,
            facing,
            files: None,
        }
    }
}

fn is_image_file(path: &PathBuf) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lower.as_str())
        })
}

fn decode_as_frame(
    path: &PathBuf,
    width: u32,
    height: u32,
    index: usize,
) -> Result<Frame, Box<dyn std::error::Error>> {
    let img = image::open(path)?.to_rgb8();
    let resized = if img.width() == width && img.height() == height {
        img
    } else {
        image::imageops::resize(&img, width, height, FilterType::Triangle)
    };
    Ok(Frame::new(resized.into_raw(), width, height, 3, index))
}

impl CameraFeed for ImageSequenceFeed {
    fn request_access(&mut self) -> Result<PermissionStatus, Box<dyn std::error::Error>> {
        Ok(PermissionStatus::Granted)
    }

    fn open(&mut self) -> Result<CameraMetadata, Box<dyn std::error::Error>> {
        let mut files: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(is_image_file)
            .collect();
        files.sort();
        if files.is_empty() {
            return Err(format!("no image files in {}", self.dir.display()).into());
        }
        log::debug!("image sequence feed: {} files", files.len());
        self.files = Some(files);

        Ok(CameraMetadata {
            width: self.width,
            height: self.height,
            fps: self.fps,
            facing: self.facing,
        })
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        let Some(files) = self.files.take() else {
            return Box::new(std::iter::once(Err("ImageSequenceFeed: not opened".into())));
        };
        let (width, height) = (self.width, self.height);
        Box::new(
            files
                .into_iter()
                .enumerate()
                .map(move |(index, path)| decode_as_frame(&path, width, height, index)),
        )
    }

    fn close(&mut self) {
        self.files = None;
    }
}
