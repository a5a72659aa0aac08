use crate::classify::domain::classifier::{AwarenessClassifier, ClassScores};
use crate::shared::cropped_face::CroppedFace;

/// Returns scripted score vectors instead of running a model.
///
/// `sequence` plays the script once and errors when exhausted, which is
/// how tests exercise the discard-on-inference-failure path; `cycle`
/// repeats the script forever for open-ended demo runs.
pub struct ScriptedClassifier {
    script: Vec<ClassScores>,
    next: usize,
    cycle: bool,
}

impl ScriptedClassifier {
    pub fn sequence(script: Vec<ClassScores>) -> Self {
        Self {
            script,
            next: 0,
            cycle: false,
        }
    }

    pub fn cycle(script: Vec<ClassScores>) -> Self {
        Self {
            script,
            next: 0,
            cycle: true,
        }
    }
}

impl AwarenessClassifier for ScriptedClassifier {
    fn classify(
        &mut self,
        _face: &CroppedFace,
    ) -> Result<ClassScores, Box<dyn std::error::Error>> {
        if self.script.is_empty() {
            return Err("scripted classifier has an empty script".into());
        }
        if self.next >= self.script.len() {
            if !self.cycle {
                return Err("scripted classifier exhausted".into());
            }
            self.next = 0;
        }
        let scores = self.script[self.next];
        self.next += 1;
        Ok(scores)
    }
}
