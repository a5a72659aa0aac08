use thiserror::Error;

use crate::classify::domain::awareness::AwarenessLevel;

#[derive(Error, Debug)]
pub enum SmootherConfigError {
    #[error("window capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

/// One stabilized decision produced by a window flush.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedResult {
    pub level: AwarenessLevel,
    pub probability: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlushOutcome {
    Decided(SmoothedResult),
    NoMajority,
}

/// Rolling majority vote over recent per-frame predictions.
///
/// Each recorded prediction lands in its level's sequence with the
/// confidence rounded to two decimals (half away from zero). Once the
/// window holds more than `capacity` entries it flushes: the level with
/// strictly more entries than each other level wins and its mean
/// confidence becomes the probability; any tie produces no result. A
/// flush always clears the whole window.
///
/// Single-writer state: the monitor loop owns the smoother, so there is
/// nothing to lock.
pub struct RollingSmoother {
    capacity: usize,
    window: [Vec<f64>; 3],
    total: usize,
}

impl RollingSmoother {
    pub fn new(capacity: usize) -> Result<Self, SmootherConfigError> {
        if capacity < 1 {
            return Err(SmootherConfigError::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            window: [Vec::new(), Vec::new(), Vec::new()],
            total: 0,
        })
    }

    /// Record one prediction; returns the flush outcome when this entry
    /// tips the window over capacity, `None` otherwise.
    ///
    /// Class indices outside the model's range are ignored.
    pub fn record(&mut self, class_index: usize, confidence: f64) -> Option<FlushOutcome> {
        let Some(level) = AwarenessLevel::from_class_index(class_index) else {
            log::debug!("ignoring prediction with unknown class index {class_index}");
            return None;
        };

        self.window[level.ordinal()].push(round_confidence(confidence));
        self.total += 1;

        if self.total <= self.capacity {
            return None;
        }
        Some(self.flush())
    }

    /// Entries recorded since the last flush.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    fn flush(&mut self) -> FlushOutcome {
        let outcome = match dominant_level(&self.window) {
            Some(level) => {
                let seq = &self.window[level.ordinal()];
                let probability = seq.iter().sum::<f64>() / seq.len() as f64;
                FlushOutcome::Decided(SmoothedResult { level, probability })
            }
            None => FlushOutcome::NoMajority,
        };

        for seq in &mut self.window {
            seq.clear();
        }
        self.total = 0;
        outcome
    }
}

/// The level holding strictly more entries than each other level, if any.
fn dominant_level(window: &[Vec<f64>; 3]) -> Option<AwarenessLevel> {
    for level in AwarenessLevel::ALL {
        let count = window[level.ordinal()].len();
        let dominates = AwarenessLevel::ALL
            .iter()
            .filter(|other| **other != level)
            .all(|other| window[other.ordinal()].len() < count);
        if dominates {
            return Some(level);
        }
    }
    None
}

/// Two-decimal rounding, half away from zero.
fn round_confidence(confidence: f64) -> f64 {
    (confidence * 100.0).round() / 100.0
}
