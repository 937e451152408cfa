// Theme module - Color constants and theme re-exports
//
// This module provides the "Open Water" palette used throughout the
// tradewind UI: ocean blues for the route and ports, navy for hulls and
// backgrounds, amber and coral for cargo and warnings.

pub mod default;

use ratatui::style::Color;

/// Primary accent - route line, port markers, borders
/// RGB: (14, 165, 233)
pub const OCEAN_BLUE: Color = Color::Rgb(14, 165, 233);

/// Highlight - route glints, flags, hovered ports
/// RGB: (103, 232, 249)
pub const SEAFOAM: Color = Color::Rgb(103, 232, 249);

/// Brighter blue for the ship deck and hovered cursor
/// RGB: (56, 189, 248)
pub const HARBOR_LIGHT: Color = Color::Rgb(56, 189, 248);

/// Dark hull / background accents
/// RGB: (15, 23, 42)
pub const DEEP_NAVY: Color = Color::Rgb(15, 23, 42);

/// General text
/// RGB: (203, 213, 225)
pub const SAND: Color = Color::Rgb(203, 213, 225);

/// Cargo and caution - containers, fast tick intervals
/// RGB: (251, 191, 36)
pub const CARGO_AMBER: Color = Color::Rgb(251, 191, 36);

/// Errors and very fast tick intervals
/// RGB: (248, 113, 113)
pub const SIGNAL_CORAL: Color = Color::Rgb(248, 113, 113);

/// Success and ON indicators
/// RGB: (74, 222, 128)
pub const KELP_GREEN: Color = Color::Rgb(74, 222, 128);

// Re-export theme functions for convenient access
pub use default::*;
