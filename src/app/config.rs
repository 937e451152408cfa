// Application configuration types
//
// This module contains configuration structs and enums for:
// - Animation cadence (tick interval, step size)
// - Map visual toggles
// - Input modes

use std::time::{Duration, Instant};

use crate::engine::{DEFAULT_STEP, DEFAULT_TICK_INTERVAL};

// ============================================================================
// Constants
// ============================================================================

/// Fastest oscillator tick interval in milliseconds
pub const MIN_TICK_MS: u64 = 16;

/// Slowest oscillator tick interval in milliseconds
pub const MAX_TICK_MS: u64 = 50;

/// Tick interval adjustment step in milliseconds
pub const TICK_STEP_MS: u64 = 2;

/// Redraw cadence for decorative animation (cargo bobbing, pulses)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Duration to highlight a recently changed tick interval
pub const CHANGE_HIGHLIGHT_DURATION: Duration = Duration::from_millis(500);

/// Period of the pulsing port markers
pub const PORT_PULSE_PERIOD: Duration = Duration::from_secs(2);

/// Period of the ship's wake
pub const WAKE_PERIOD: Duration = Duration::from_secs(1);

/// Frame time threshold for auto-reducing animation complexity (100ms)
pub const FRAME_TIME_THRESHOLD_MS: u128 = 100;

/// Number of consecutive slow frames before triggering complexity reduction
pub const SLOW_FRAME_COUNT_THRESHOLD: u32 = 5;

/// Environment variable naming a file to write logs to
pub const LOG_ENV_VAR: &str = "TRADEWIND_LOG";

// ============================================================================
// Enums
// ============================================================================

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Map shortcuts (default)
    #[default]
    Map,
    /// Typing into the enquiry form
    Enquiry,
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Visual settings for the trade map panel
#[derive(Debug, Clone)]
pub struct MapSettings {
    /// Route glints, ship wake and cargo bobbing (toggle with 'a')
    pub animations_enabled: bool,

    /// Port name labels (toggle with 't')
    pub labels_enabled: bool,

    /// Ship cursor at the pointer position (toggle with 'c')
    pub cursor_enabled: bool,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            animations_enabled: true,
            labels_enabled: true,
            cursor_enabled: true,
        }
    }
}

/// Oscillator cadence, adjusted at runtime with '+' and '-'
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Tick interval in milliseconds (16-50ms)
    pub tick_ms: u64,

    /// Progress added per tick
    pub step: f64,

    /// Timestamp of last interval change (for visual feedback)
    pub last_change: Option<Instant>,
}

impl AnimationConfig {
    pub fn new() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            step: DEFAULT_STEP,
            last_change: None,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Whether the interval changed within `CHANGE_HIGHLIGHT_DURATION`
    pub fn recently_changed(&self, now: Instant) -> bool {
        self.last_change
            .is_some_and(|t| now.saturating_duration_since(t) < CHANGE_HIGHLIGHT_DURATION)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_animation_config() {
        let config = AnimationConfig::default();
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
        assert!((config.step - 0.008).abs() < f64::EPSILON);
        assert!((MIN_TICK_MS..=MAX_TICK_MS).contains(&config.tick_ms));
    }

    #[test]
    fn test_recently_changed() {
        let now = Instant::now();
        let mut config = AnimationConfig::new();
        assert!(!config.recently_changed(now));

        config.last_change = Some(now);
        assert!(config.recently_changed(now + Duration::from_millis(100)));
        assert!(!config.recently_changed(now + CHANGE_HIGHLIGHT_DURATION));
    }

    #[test]
    fn test_default_settings() {
        let settings = MapSettings::default();
        assert!(settings.animations_enabled);
        assert!(settings.labels_enabled);
        assert!(settings.cursor_enabled);
        assert_eq!(InputMode::default(), InputMode::Map);
    }
}
