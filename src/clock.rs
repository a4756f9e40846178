//! Frame timing
//!
//! Real time between frames is capped before it is normalized, so a stalled
//! or backgrounded loop resumes with one ordinary step instead of a huge one
//! that would tunnel through the ground or a pipe. Long stalls are dropped,
//! not accumulated.

use crate::tuning::Tuning;

/// One frame's worth of simulated time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDelta {
    /// Capped elapsed real time
    pub elapsed_ms: f32,
    /// `elapsed_ms` in idealized frames; 1.0 at exactly 60 Hz
    pub factor: f32,
}

impl FrameDelta {
    pub const ZERO: Self = Self {
        elapsed_ms: 0.0,
        factor: 0.0,
    };

    /// Cap and normalize a raw frame gap
    pub fn from_elapsed(raw_ms: f32, tuning: &Tuning) -> Self {
        let elapsed_ms = if raw_ms.is_finite() {
            raw_ms.clamp(0.0, tuning.max_frame_ms)
        } else {
            0.0
        };
        Self {
            elapsed_ms,
            factor: elapsed_ms / tuning.ideal_frame_ms,
        }
    }

    /// Exactly `ticks` idealized frames
    pub fn ticks(ticks: f32, tuning: &Tuning) -> Self {
        Self::from_elapsed(ticks * tuning.ideal_frame_ms, tuning)
    }
}

/// Turns frame timestamps into [`FrameDelta`]s
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous call; the first frame after a reset is empty
    pub fn delta(&mut self, now_ms: f64, tuning: &Tuning) -> FrameDelta {
        let raw = match self.last_ms {
            Some(last) => (now_ms - last) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        FrameDelta::from_elapsed(raw, tuning)
    }

    /// Forget the last timestamp
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_long_stall() {
        let tuning = Tuning::default();
        let stalled = FrameDelta::from_elapsed(2000.0, &tuning);
        let capped = FrameDelta::from_elapsed(64.0, &tuning);
        assert_eq!(stalled, capped);
        assert_eq!(stalled.elapsed_ms, 64.0);
        assert!((stalled.factor - 64.0 / (1000.0 / 60.0)).abs() < 1e-5);
    }

    #[test]
    fn test_negative_and_nan_gaps() {
        let tuning = Tuning::default();
        assert_eq!(FrameDelta::from_elapsed(-5.0, &tuning), FrameDelta::ZERO);
        assert_eq!(FrameDelta::from_elapsed(f32::NAN, &tuning), FrameDelta::ZERO);
    }

    #[test]
    fn test_one_tick() {
        let tuning = Tuning::default();
        let delta = FrameDelta::ticks(1.0, &tuning);
        assert!((delta.factor - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_clock_sequence() {
        let tuning = Tuning::default();
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(1000.0, &tuning), FrameDelta::ZERO);
        assert_eq!(clock.delta(1016.0, &tuning).elapsed_ms, 16.0);
        assert_eq!(clock.delta(5000.0, &tuning).elapsed_ms, 64.0);

        clock.reset();
        assert_eq!(clock.delta(9000.0, &tuning), FrameDelta::ZERO);
    }
}
