// Route engine error taxonomy
//
// None of these are fatal to the view. Each one degrades to a skipped
// icon, a clamped value or an ignored event.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Progress was supplied outside [0, 1] and has been clamped
    #[error("progress {0} is outside [0, 1]")]
    InvalidProgress(f64),

    /// Cargo descriptor names a kind outside {container, box, crate}
    #[error("unknown cargo kind `{0}`")]
    UnknownCargoKind(String),

    /// Cargo delay or duration is negative, not finite, or too large
    #[error("invalid cargo {field} `{value}` seconds")]
    InvalidCargoTiming { field: &'static str, value: f64 },

    /// Pointer left a port that is not the current hover owner
    #[error("stale hover clear for `{leaving}` (current: {current:?})")]
    StaleHoverClear {
        leaving: String,
        current: Option<String>,
    },

    /// Two ports share the same id
    #[error("duplicate port id `{0}`")]
    DuplicatePort(String),

    /// Port table exceeds the supported marker count
    #[error("{0} ports supplied, at most {max} are supported", max = super::port::MAX_PORTS)]
    TooManyPorts(usize),
}
