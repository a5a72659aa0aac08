pub mod camera_metadata;
pub mod constants;
pub mod cropped_face;
pub mod face_detection;
pub mod frame;
pub mod model_locator;
