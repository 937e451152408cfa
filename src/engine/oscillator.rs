// Progress oscillator
//
// Owns the ship's progress along the route and sweeps it back and forth
// between the two ports, one fixed step per timer tick.

use super::error::EngineError;
use tracing::warn;

/// Progress value written when the forward sweep hits the far port
pub const UPPER_REBOUND: f64 = 0.99;

/// Progress value written when the backward sweep hits the origin port
pub const LOWER_REBOUND: f64 = 0.01;

/// Travel direction along the route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Origin towards destination (+1)
    #[default]
    Forward,
    /// Destination towards origin (-1)
    Backward,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Back-and-forth sweep of a progress value over [0, 1]
///
/// Each tick applies exactly one of three rules, in order:
/// 1. progress >= 1: turn backward, rebound to 0.99
/// 2. progress <= 0 while already backward: turn forward, rebound to 0.01
/// 3. otherwise: progress += direction * step
///
/// Rule 2 only fires for a backward sweep, so a fresh start at 0 moving
/// forward simply accumulates.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressOscillator {
    progress: f64,
    direction: Direction,
    step: f64,
}

impl ProgressOscillator {
    /// Start a sweep at `progress`; 0.0 moving forward is the origin port
    ///
    /// Out-of-range progress is clamped into [0, 1] rather than rejected.
    pub fn resume(progress: f64, direction: Direction, step: f64) -> Self {
        let progress = if (0.0..=1.0).contains(&progress) {
            progress
        } else {
            let err = EngineError::InvalidProgress(progress);
            let clamped = if progress.is_nan() {
                0.0
            } else {
                progress.clamp(0.0, 1.0)
            };
            warn!(error = %err, clamped, "Clamping resumed progress");
            clamped
        };

        Self {
            progress,
            direction,
            step,
        }
    }

    /// Advance by one timer tick and return the new progress
    pub fn tick(&mut self) -> f64 {
        if self.progress >= 1.0 {
            self.direction = Direction::Backward;
            self.progress = UPPER_REBOUND;
        } else if self.progress <= 0.0 && self.direction == Direction::Backward {
            self.direction = Direction::Forward;
            self.progress = LOWER_REBOUND;
        } else {
            self.progress += self.direction.sign() * self.step;
        }
        self.progress()
    }

    /// Current progress, always within [0, 1]
    ///
    /// A single step may carry the raw value just past a bound; the next
    /// tick rebounds it. Readers only ever see the clamped value.
    pub fn progress(&self) -> f64 {
        self.progress.clamp(0.0, 1.0)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STEP: f64 = 0.008;

    #[test]
    fn test_linear_accumulation_from_origin() {
        let mut osc = ProgressOscillator::resume(0.0, Direction::Forward, STEP);
        assert_eq!(osc.direction(), Direction::Forward);

        let expected = [0.008, 0.016, 0.024, 0.032];
        for want in expected {
            let got = osc.tick();
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
        assert_eq!(osc.direction(), Direction::Forward);
    }

    #[test]
    fn test_forward_sweep_rebounds_to_upper() {
        let mut osc = ProgressOscillator::resume(0.0, Direction::Forward, STEP);

        let mut ticks = 0;
        while osc.direction() == Direction::Forward {
            osc.tick();
            ticks += 1;
            assert!(ticks < 1000, "forward sweep never rebounded");
        }

        // The flip and the clamp happen on the same tick
        assert_eq!(osc.progress(), UPPER_REBOUND);
        assert_eq!(osc.direction(), Direction::Backward);
    }

    #[test]
    fn test_backward_sweep_decreases_then_rebounds() {
        let mut osc = ProgressOscillator::resume(0.99, Direction::Backward, STEP);

        let mut previous = osc.progress();
        let mut ticks = 0;
        loop {
            let current = osc.tick();
            ticks += 1;
            assert!(ticks < 1000, "backward sweep never rebounded");

            if osc.direction() == Direction::Forward {
                assert_eq!(current, LOWER_REBOUND);
                break;
            }
            assert!(current < previous, "{current} should be below {previous}");
            previous = current;
        }

        // Progress touched the lower bound right before the flip
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn test_forward_start_at_zero_does_not_rebound() {
        let mut osc = ProgressOscillator::resume(0.0, Direction::Forward, STEP);
        let p = osc.tick();
        assert!((p - STEP).abs() < 1e-12);
        assert_eq!(osc.direction(), Direction::Forward);
    }

    #[test]
    fn test_resume_clamps_out_of_range() {
        let high = ProgressOscillator::resume(1.7, Direction::Forward, STEP);
        assert_eq!(high.progress(), 1.0);

        let low = ProgressOscillator::resume(-3.0, Direction::Backward, STEP);
        assert_eq!(low.progress(), 0.0);

        let nan = ProgressOscillator::resume(f64::NAN, Direction::Forward, STEP);
        assert_eq!(nan.progress(), 0.0);
    }

    #[test]
    fn test_resume_at_one_rebounds_next_tick() {
        let mut osc = ProgressOscillator::resume(1.0, Direction::Forward, STEP);
        assert_eq!(osc.tick(), UPPER_REBOUND);
        assert_eq!(osc.direction(), Direction::Backward);
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Backward.sign(), -1.0);
        assert_eq!(Direction::default(), Direction::Forward);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Observed progress stays within [0, 1] for any step size, start
        /// point and number of ticks
        #[test]
        fn prop_progress_stays_bounded(
            start in 0.0f64..=1.0,
            backward in any::<bool>(),
            step in 0.001f64..0.2,
            ticks in 0usize..2000,
        ) {
            let direction = if backward { Direction::Backward } else { Direction::Forward };
            let mut osc = ProgressOscillator::resume(start, direction, step);
            for _ in 0..ticks {
                let p = osc.tick();
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }

        /// Direction only changes on a tick that lands on a rebound value
        #[test]
        fn prop_flips_only_at_rebound(
            step in 0.001f64..0.2,
            ticks in 1usize..2000,
        ) {
            let mut osc = ProgressOscillator::resume(0.0, Direction::Forward, step);
            for _ in 0..ticks {
                let before = osc.direction();
                let p = osc.tick();
                if osc.direction() != before {
                    prop_assert!(p == UPPER_REBOUND || p == LOWER_REBOUND);
                }
            }
        }
    }
}
