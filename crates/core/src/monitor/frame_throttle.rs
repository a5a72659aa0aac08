use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThrottleError {
    #[error("throttle interval must be at least 1, got {0}")]
    InvalidInterval(usize),
}

/// Rate limiter for the heavy half of the loop.
///
/// Inference runs only when the internal counter sits at a multiple of the
/// interval; the counter advances and wraps modulo the interval on every
/// frame regardless of the decision, so capture cadence never depends on
/// what inference costs.
pub struct FrameThrottle {
    interval: usize,
    counter: usize,
}

impl FrameThrottle {
    pub fn new(interval: usize) -> Result<Self, ThrottleError> {
        if interval < 1 {
            return Err(ThrottleError::InvalidInterval(interval));
        }
        Ok(Self {
            interval,
            counter: 0,
        })
    }

    /// Decide for the current frame; advances the counter either way.
    pub fn should_run(&mut self) -> bool {
        let run = self.counter % self.interval == 0;
        self.counter = (self.counter + 1) % self.interval;
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_zero_is_rejected() {
        assert!(FrameThrottle::new(0).is_err());
    }

    #[test]
    fn test_interval_one_runs_every_frame() {
        let mut throttle = FrameThrottle::new(1).unwrap();
        for _ in 0..5 {
            assert!(throttle.should_run());
        }
    }

    #[test]
    fn test_interval_three_runs_on_multiples() {
        let mut throttle = FrameThrottle::new(3).unwrap();
        let ran: Vec<usize> = (0..10).filter(|_| throttle.should_run()).collect();
        assert_eq!(ran, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_counter_wraps_stably() {
        let mut throttle = FrameThrottle::new(2).unwrap();
        let decisions: Vec<bool> = (0..6).map(|_| throttle.should_run()).collect();
        assert_eq!(decisions, vec![true, false, true, false, true, false]);
    }
}
