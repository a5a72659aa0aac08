pub mod awareness_monitor;
pub mod frame_throttle;
pub mod overlay;
pub mod phase;
