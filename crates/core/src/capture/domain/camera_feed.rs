use crate::shared::camera_metadata::CameraMetadata;
use crate::shared::frame::Frame;

/// Outcome of asking the platform for camera access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Supplies a continuous sequence of camera frames.
///
/// Implementations own the capture details (device, decode, pacing) while
/// the monitor works with the abstract `Frame` and `CameraMetadata` types.
/// Access must be requested and granted before the feed is opened.
pub trait CameraFeed: Send {
    /// Asks the user/platform for permission to use the camera.
    fn request_access(&mut self) -> Result<PermissionStatus, Box<dyn std::error::Error>>;

    /// Starts capture and returns the stream's metadata.
    fn open(&mut self) -> Result<CameraMetadata, Box<dyn std::error::Error>>;

    /// Returns an iterator over captured frames in arrival order.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases the capture device.
    fn close(&mut self);
}
