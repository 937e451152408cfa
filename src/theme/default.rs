// Default theme functions
//
// Color helpers shared by the map, the port inspector and the status bar.

use ratatui::style::Color;

use super::{CARGO_AMBER, KELP_GREEN, OCEAN_BLUE, SAND, SEAFOAM, SIGNAL_CORAL};
use crate::engine::CargoKind;
use crate::enquiry::ToastKind;

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
///
/// # Arguments
/// * `color1` - Starting color as (r, g, b) tuple
/// * `color2` - Ending color as (r, g, b) tuple
/// * `ratio` - Interpolation ratio (0.0 = color1, 1.0 = color2)
pub fn interpolate_color(color1: (u8, u8, u8), color2: (u8, u8, u8), ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let r = (color1.0 as f32 + (color2.0 as f32 - color1.0 as f32) * ratio) as u8;
    let g = (color1.1 as f32 + (color2.1 as f32 - color1.1 as f32) * ratio) as u8;
    let b = (color1.2 as f32 + (color2.2 as f32 - color1.2 as f32) * ratio) as u8;
    Color::Rgb(r, g, b)
}

/// Scale an RGB color's channels by `factor`, saturating at 255
///
/// Non-RGB colors are returned unchanged.
pub fn brighten(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let scale = |c: u8| ((c as f32 * factor).min(255.0)) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

/// Get color for the tick interval relative to its default
///
/// - Green: default or slower
/// - Amber: faster than default
/// - Coral: more than twice as fast as default
///
/// A recently changed value is drawn 20% brighter.
pub fn get_tick_color(tick_ms: u64, default_ms: u64, recently_changed: bool) -> Color {
    let base_color = if tick_ms >= default_ms {
        KELP_GREEN
    } else if tick_ms * 2 < default_ms {
        SIGNAL_CORAL
    } else {
        CARGO_AMBER
    };

    if recently_changed {
        brighten(base_color, 1.2)
    } else {
        base_color
    }
}

/// Color for a cargo icon of the given kind
pub fn cargo_color(kind: CargoKind) -> Color {
    match kind {
        CargoKind::Container => SAND,
        CargoKind::Box => OCEAN_BLUE,
        CargoKind::Crate => CARGO_AMBER,
    }
}

/// Color for a toast of the given kind
pub fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => KELP_GREEN,
        ToastKind::Error => SIGNAL_CORAL,
    }
}

/// Port marker color
///
/// Idle markers pulse between ocean blue and seafoam with `pulse`
/// (0.0 ~ 1.0); a hovered marker holds at full seafoam.
pub fn port_marker_color(hovered: bool, pulse: f32) -> Color {
    if hovered {
        SEAFOAM
    } else {
        interpolate_color((14, 165, 233), (103, 232, 249), pulse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_color_endpoints() {
        assert_eq!(interpolate_color((0, 0, 0), (200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(
            interpolate_color((0, 0, 0), (200, 100, 50), 1.0),
            Color::Rgb(200, 100, 50)
        );
        // Out-of-range ratio is clamped
        assert_eq!(
            interpolate_color((0, 0, 0), (200, 100, 50), 7.0),
            Color::Rgb(200, 100, 50)
        );
    }

    #[test]
    fn test_brighten_saturates() {
        assert_eq!(brighten(Color::Rgb(100, 250, 0), 1.2), Color::Rgb(120, 255, 0));
        assert_eq!(brighten(Color::Red, 1.2), Color::Red);
    }

    #[test]
    fn test_tick_color_bands() {
        assert_eq!(get_tick_color(50, 50, false), KELP_GREEN);
        assert_eq!(get_tick_color(40, 50, false), CARGO_AMBER);
        assert_eq!(get_tick_color(16, 50, false), SIGNAL_CORAL);
        assert_ne!(get_tick_color(50, 50, true), KELP_GREEN);
    }

    #[test]
    fn test_hovered_marker_is_steady() {
        assert_eq!(port_marker_color(true, 0.0), SEAFOAM);
        assert_eq!(port_marker_color(true, 0.7), SEAFOAM);
        assert_eq!(port_marker_color(false, 0.0), OCEAN_BLUE);
    }

    #[test]
    fn test_kind_colors() {
        assert_ne!(cargo_color(CargoKind::Box), cargo_color(CargoKind::Crate));
        assert_ne!(toast_color(ToastKind::Success), toast_color(ToastKind::Error));
    }
}
