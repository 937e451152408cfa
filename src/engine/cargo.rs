// Decorative cargo icons
//
// A fixed table of icons that bob up and down on their own clocks. They
// never read the ship's progress or the hover state.

use super::error::EngineError;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

/// Peak vertical offset of the bobbing motion, in map units
pub const BOB_AMPLITUDE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CargoKind {
    Container,
    Box,
    Crate,
}

impl CargoKind {
    /// Glyph drawn for this kind of cargo
    pub fn glyph(self) -> &'static str {
        match self {
            CargoKind::Container => "▬▬",
            CargoKind::Box => "■",
            CargoKind::Crate => "▦",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CargoKind::Container => "container",
            CargoKind::Box => "box",
            CargoKind::Crate => "crate",
        }
    }
}

impl FromStr for CargoKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "container" => Ok(CargoKind::Container),
            "box" => Ok(CargoKind::Box),
            "crate" => Ok(CargoKind::Crate),
            _ => Err(EngineError::UnknownCargoKind(s.to_string())),
        }
    }
}

/// Unvalidated cargo descriptor, e.g. from an external table
#[derive(Debug, Clone, PartialEq)]
pub struct CargoDef {
    pub id: String,
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CargoIcon {
    pub id: String,
    pub kind: CargoKind,
    pub x: f64,
    pub y: f64,
    /// Time before the first cycle starts
    pub animation_delay: Duration,
    /// Length of one up-and-down cycle
    pub animation_duration: Duration,
}

/// Convert a descriptor timing into a `Duration`, rejecting values that
/// have no meaningful duration
fn timing(field: &'static str, value: f64) -> Result<Duration, EngineError> {
    Duration::try_from_secs_f64(value).map_err(|_| EngineError::InvalidCargoTiming { field, value })
}

impl CargoIcon {
    pub fn new(
        id: &str,
        kind: CargoKind,
        (x, y): (f64, f64),
        animation_delay: Duration,
        animation_duration: Duration,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            x,
            y,
            animation_delay,
            animation_duration,
        }
    }

    /// Vertical offset at `elapsed` since the icon set started animating
    ///
    /// Zero until the delay has passed, then an eased dip of
    /// `BOB_AMPLITUDE` (negative is up) that repeats every duration.
    pub fn bob_offset(&self, elapsed: Duration) -> f64 {
        let duration = self.animation_duration.as_secs_f64();
        if duration <= 0.0 || elapsed < self.animation_delay {
            return 0.0;
        }

        let local = (elapsed - self.animation_delay).as_secs_f64();
        let phase = (local % duration) / duration;
        let eased = (1.0 - (std::f64::consts::TAU * phase).cos()) / 2.0;
        -BOB_AMPLITUDE * eased
    }

    /// Position at `elapsed`, in map space
    pub fn position(&self, elapsed: Duration) -> (f64, f64) {
        (self.x, self.y + self.bob_offset(elapsed))
    }
}

impl TryFrom<CargoDef> for CargoIcon {
    type Error = EngineError;

    fn try_from(def: CargoDef) -> Result<Self, Self::Error> {
        let kind = def.kind.parse::<CargoKind>()?;
        let delay = timing("delay", def.delay_secs)?;
        let duration = timing("duration", def.duration_secs)?;
        debug!(cargo_id = %def.id, kind = kind.as_str(), "Cargo icon loaded");
        Ok(CargoIcon::new(&def.id, kind, (def.x, def.y), delay, duration))
    }
}

/// Validate external cargo descriptors
///
/// Descriptors with an unknown kind or unusable timings are logged and
/// skipped; the rest of the table still loads.
pub fn load_cargo(defs: Vec<CargoDef>) -> Vec<CargoIcon> {
    defs.into_iter()
        .filter_map(|def| {
            let id = def.id.clone();
            match CargoIcon::try_from(def) {
                Ok(icon) => Some(icon),
                Err(e) => {
                    warn!(error = %e, cargo_id = %id, "Skipping cargo icon");
                    None
                }
            }
        })
        .collect()
}

/// id, kind, position, delay and duration of the built-in icons
const DEFAULT_CARGO: [(&str, &str, (f64, f64), f64, f64); 3] = [
    ("container-1", "container", (280.0, 140.0), 0.0, 3.0),
    ("box-1", "box", (250.0, 170.0), 0.5, 2.5),
    ("crate-1", "crate", (320.0, 185.0), 1.0, 3.5),
];

/// Descriptors for the icons floating near the middle of the route
pub fn default_cargo_defs() -> Vec<CargoDef> {
    DEFAULT_CARGO
        .iter()
        .map(|&(id, kind, (x, y), delay_secs, duration_secs)| CargoDef {
            id: id.to_string(),
            kind: kind.to_string(),
            x,
            y,
            delay_secs,
            duration_secs,
        })
        .collect()
}

pub fn default_cargo() -> Vec<CargoIcon> {
    load_cargo(default_cargo_defs())
}
