// Animation timer
//
// Fixed-cadence timer polled from the event loop. The engine holds one only
// while mounted; dropping it is what stops the animation.

use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug)]
pub struct AnimationTimer {
    interval: Duration,
    last_fire: Instant,
}

impl AnimationTimer {
    pub fn start(interval: Duration, now: Instant) -> Self {
        debug!(interval_ms = interval.as_millis() as u64, "Animation timer started");
        Self {
            interval,
            last_fire: now,
        }
    }

    /// Whether the timer fires at `now`
    ///
    /// Fires at most once per call. A loop that falls behind does not
    /// replay the missed ticks.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fire) >= self.interval {
            self.last_fire = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next firing
    pub fn until_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_fire))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}

impl Drop for AnimationTimer {
    fn drop(&mut self) {
        debug!("Animation timer stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_interval() {
        let t0 = Instant::now();
        let mut timer = AnimationTimer::start(Duration::from_millis(50), t0);

        assert!(!timer.fire_if_due(t0));
        assert!(!timer.fire_if_due(t0 + Duration::from_millis(49)));
        assert!(timer.fire_if_due(t0 + Duration::from_millis(50)));

        // Re-armed from the last firing
        assert!(!timer.fire_if_due(t0 + Duration::from_millis(60)));
        assert!(timer.fire_if_due(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn test_does_not_replay_missed_ticks() {
        let t0 = Instant::now();
        let mut timer = AnimationTimer::start(Duration::from_millis(50), t0);

        let late = t0 + Duration::from_millis(500);
        assert!(timer.fire_if_due(late));
        assert!(!timer.fire_if_due(late));
    }

    #[test]
    fn test_until_next() {
        let t0 = Instant::now();
        let mut timer = AnimationTimer::start(Duration::from_millis(50), t0);
        assert_eq!(timer.until_next(t0 + Duration::from_millis(20)), Duration::from_millis(30));
        assert_eq!(timer.until_next(t0 + Duration::from_millis(80)), Duration::ZERO);

        timer.set_interval(Duration::from_millis(16));
        assert_eq!(timer.interval(), Duration::from_millis(16));
    }
}
