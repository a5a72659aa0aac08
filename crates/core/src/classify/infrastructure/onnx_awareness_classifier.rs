/// Awareness classifier using ONNX Runtime via `ort`.
///
/// Expects a model taking one `[1, side, side, 3]` float tensor in [0,1]
/// and producing `[1, 3]` scores in training label order.
use std::path::Path;

use ndarray::{Array4, Axis};

use crate::classify::domain::classifier::{AwarenessClassifier, ClassScores};
use crate::shared::cropped_face::CroppedFace;

pub struct OnnxAwarenessClassifier {
    session: ort::session::Session,
}

impl OnnxAwarenessClassifier {
    /// Load an awareness ONNX model.
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?.commit_from_file(model_path)?;
        log::debug!("awareness classifier loaded from {}", model_path.display());
        Ok(Self { session })
    }
}

impl AwarenessClassifier for OnnxAwarenessClassifier {
    fn classify(
        &mut self,
        face: &CroppedFace,
    ) -> Result<ClassScores, Box<dyn std::error::Error>> {
        let input_value = ort::value::Tensor::from_array(batch_of_one(face))?;
        let outputs = self.session.run(ort::inputs![input_value])?;
        if outputs.len() == 0 {
            return Err("awareness model produced no outputs".into());
        }

        let scores = outputs[0].try_extract_array::<f32>()?;
        let data = scores.as_slice().ok_or("Cannot get score slice")?;
        to_class_scores(data)
    }
}

/// HWC crop → NHWC batch of one.
fn batch_of_one(face: &CroppedFace) -> Array4<f32> {
    face.tensor().clone().insert_axis(Axis(0))
}

fn to_class_scores(data: &[f32]) -> Result<ClassScores, Box<dyn std::error::Error>> {
    if data.len() < 3 {
        return Err(format!("awareness model returned {} scores, expected 3", data.len()).into());
    }
    Ok([data[0], data[1], data[2]])
}
