use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use vigil_core::shared::camera_metadata::CameraFacing;
use vigil_core::shared::constants::{
    DEFAULT_CAPTURE_HEIGHT, DEFAULT_CAPTURE_WIDTH, DEFAULT_THROTTLE_INTERVAL,
    DEFAULT_WINDOW_CAPACITY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Front,
    Back,
}

impl Facing {
    pub fn to_camera(self) -> CameraFacing {
        match self {
            Facing::Front => CameraFacing::Front,
            Facing::Back => CameraFacing::Back,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facing::Front => write!(f, "front"),
            Facing::Back => write!(f, "back"),
        }
    }
}

/// Saved defaults, applied underneath whatever flags are given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub interval: usize,
    pub window: usize,
    pub capture_width: u32,
    pub capture_height: u32,
    pub fps: f64,
    pub facing: Facing,
    #[serde(default = "default_confidence")]
    pub confidence: f32,
}

fn default_confidence() -> f32 {
    vigil_core::detection::infrastructure::onnx_blazeface_localizer::DEFAULT_CONFIDENCE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_THROTTLE_INTERVAL,
            window: DEFAULT_WINDOW_CAPACITY,
            capture_width: DEFAULT_CAPTURE_WIDTH,
            capture_height: DEFAULT_CAPTURE_HEIGHT,
            fps: 30.0,
            facing: Facing::Front,
            confidence: default_confidence(),
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Vigil").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_path(&path))
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_path(&path);
        }
    }

    fn load_path(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    fn save_path(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, json);
        }
    }
}
