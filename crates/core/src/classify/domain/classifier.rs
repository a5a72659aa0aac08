use crate::shared::cropped_face::CroppedFace;

/// Per-class scores in the model's training label order:
/// index 0 → level 0, index 1 → level 10, index 2 → level 5.
pub type ClassScores = [f32; 3];

/// The winning class for one crop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassPrediction {
    pub class_index: usize,
    pub confidence: f32,
}

/// Scores an aligned face crop.
///
/// One crop per call; batching is not part of the seam.
pub trait AwarenessClassifier: Send {
    fn classify(&mut self, face: &CroppedFace)
        -> Result<ClassScores, Box<dyn std::error::Error>>;
}

/// Picks the highest-scoring class; the first maximum wins on ties.
pub fn top_prediction(scores: &ClassScores) -> ClassPrediction {
    let mut best = 0;
    for (index, &score) in scores.iter().enumerate() {
        if score > scores[best] {
            best = index;
        }
    }
    ClassPrediction {
        class_index: best,
        confidence: scores[best],
    }
}
