pub mod crop_aligner;
pub mod face_localizer;
