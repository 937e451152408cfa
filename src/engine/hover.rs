// Port hover state
//
// Tracks which port marker the pointer is over. At most one port is
// hovered at a time and a leave only clears the port that owns the hover.

use super::error::EngineError;
use super::port::PortId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<PortId>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a port marker (last writer wins)
    pub fn enter(&mut self, id: &PortId) {
        self.hovered = Some(id.clone());
    }

    /// Pointer left a port marker
    ///
    /// Returns `StaleHoverClear` without touching the state when `id` is
    /// not the current hover owner. Callers are expected to ignore it.
    pub fn leave(&mut self, id: &PortId) -> Result<(), EngineError> {
        if self.hovered.as_ref() == Some(id) {
            self.hovered = None;
            Ok(())
        } else {
            Err(EngineError::StaleHoverClear {
                leaving: id.to_string(),
                current: self.hovered.as_ref().map(|p| p.to_string()),
            })
        }
    }

    pub fn is_hovered(&self, id: &PortId) -> bool {
        self.hovered.as_ref() == Some(id)
    }

    pub fn hovered(&self) -> Option<&PortId> {
        self.hovered.as_ref()
    }
}
