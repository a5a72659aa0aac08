pub mod onnx_awareness_classifier;
pub mod scripted_classifier;
