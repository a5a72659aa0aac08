pub const LOCALIZER_MODEL_NAME: &str = "blazeface_front_128.onnx";
pub const CLASSIFIER_MODEL_NAME: &str = "awareness_224.onnx";

/// Environment variable pointing at a directory of bundled model files.
pub const MODEL_DIR_ENV: &str = "VIGIL_MODEL_DIR";

/// Side length of the classifier's square input tensor.
pub const CLASSIFIER_INPUT_SIDE: usize = 224;

/// Run inference on every frame unless the throttle says otherwise.
pub const DEFAULT_THROTTLE_INTERVAL: usize = 1;

/// Rolling window capacity: the smoother flushes on the entry after this.
pub const DEFAULT_WINDOW_CAPACITY: usize = 4;

/// Default on-screen rectangle reserved for the camera preview.
pub const DEFAULT_VIEWPORT_X: f32 = 40.0;
pub const DEFAULT_VIEWPORT_Y: f32 = 50.0;
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 350.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;

/// Capture geometry: landscape sensors report 1920x1080, portrait 1200x1600.
pub const DEFAULT_CAPTURE_WIDTH: u32 = 1200;
pub const DEFAULT_CAPTURE_HEIGHT: u32 = 1600;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
