pub mod onnx_blazeface_localizer;
pub mod replay_localizer;
