/// Which way the camera points relative to the user.
///
/// Front cameras conventionally show a mirrored preview, so overlay
/// geometry computed in capture space must be flipped back to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraFacing {
    Front,
    Back,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub facing: CameraFacing,
}
