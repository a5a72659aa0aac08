use ndarray::Array3;

/// A face crop aligned to the classifier's fixed input geometry:
/// side × side × 3 `f32` values in [0, 1], HWC order.
///
/// Ephemeral: exists only between crop/align and the classification call.
#[derive(Clone, Debug)]
pub struct CroppedFace {
    tensor: Array3<f32>,
}

impl CroppedFace {
    pub fn new(tensor: Array3<f32>) -> Self {
        debug_assert_eq!(
            tensor.shape()[0],
            tensor.shape()[1],
            "aligned face must be square"
        );
        debug_assert_eq!(tensor.shape()[2], 3, "aligned face must have 3 channels");
        Self { tensor }
    }

    pub fn tensor(&self) -> &Array3<f32> {
        &self.tensor
    }

    /// Square side length in pixels.
    pub fn side(&self) -> usize {
        self.tensor.shape()[0]
    }
}
