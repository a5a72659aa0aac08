//! Camera-stream awareness classification pipeline.
//!
//! Streams frames from a camera feed, finds a face per frame, aligns it to
//! the classifier's input geometry, and smooths per-frame predictions into
//! a stable awareness level through a rolling majority vote.

pub mod capture;
pub mod classify;
pub mod detection;
pub mod monitor;
pub mod shared;
