// Trade map rendering module
//
// Renders the route canvas: coastline, country regions, the dashed trade
// route with glints, pulsing port markers, bobbing cargo, the ship and the
// pointer cursor.
//
// Map space is 500 x 300 with y growing downward; the ratatui canvas grows
// upward, so every y is flipped on the way in.

use crate::app::config::{PORT_PULSE_PERIOD, WAKE_PERIOD};
use crate::app::AppState;
use crate::engine::{Direction, Point, QuadraticBezier, MAP_HEIGHT, MAP_WIDTH};
use crate::theme::{
    brighten, cargo_color, interpolate_color, port_marker_color, HARBOR_LIGHT, OCEAN_BLUE, SAND,
    SEAFOAM,
};
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};
use std::time::{Duration, Instant};

/// Simplified Asia coastline, in map space
const ASIA_OUTLINE: [(f64, f64); 23] = [
    (100.0, 80.0),
    (150.0, 60.0),
    (200.0, 55.0),
    (250.0, 50.0),
    (300.0, 45.0),
    (350.0, 50.0),
    (400.0, 60.0),
    (430.0, 80.0),
    (450.0, 100.0),
    (460.0, 130.0),
    (455.0, 160.0),
    (440.0, 190.0),
    (410.0, 220.0),
    (370.0, 240.0),
    (330.0, 250.0),
    (290.0, 245.0),
    (250.0, 240.0),
    (210.0, 230.0),
    (170.0, 210.0),
    (140.0, 185.0),
    (120.0, 160.0),
    (105.0, 130.0),
    (100.0, 100.0),
];

/// Country regions: label, centre, radii
const REGIONS: [(&str, (f64, f64), (f64, f64)); 2] = [
    ("CHINA", (380.0, 120.0), (50.0, 40.0)),
    ("INDIA", (180.0, 180.0), (45.0, 55.0)),
];

const OUTLINE_COLOR: Color = Color::Rgb(30, 64, 90);
const REGION_RGB: (u8, u8, u8) = (22, 110, 160);
const REGION_COLOR: Color = Color::Rgb(REGION_RGB.0, REGION_RGB.1, REGION_RGB.2);

/// Segments used to draw the dashed route
const ROUTE_SEGMENTS: usize = 48;

/// Points used to draw a region ellipse
const ELLIPSE_POINTS: usize = 64;

/// Route glow sweep: travels out and back over 4s, then rests 1s
const GLOW_SWEEP: Duration = Duration::from_secs(4);
const GLOW_REST: Duration = Duration::from_secs(1);

/// How close (in progress units) the glow head must be to light a glint
const GLOW_REACH: f64 = 0.15;

const SHIP_LEFT: &str = "<▆]";
const SHIP_RIGHT: &str = "[▆>";
const PORT_SYMBOL: &str = "●";
const PORT_HOVER_SYMBOL: &str = "◉";
const ANCHOR_SYMBOL: &str = "⚓";
const GLINT_SYMBOL: &str = "✦";
const CURSOR_SYMBOL: &str = "▲";

/// Flip a map-space point into canvas space
pub fn to_canvas(point: Point) -> (f64, f64) {
    (point.x, MAP_HEIGHT - point.y)
}

/// Triangle-wave pulse (0.0 → 1.0 → 0.0) over `period`, after `delay`
pub fn pulse(elapsed: Duration, period: Duration, delay: Duration) -> f32 {
    let period = period.as_secs_f64();
    if period <= 0.0 || elapsed < delay {
        return 0.0;
    }
    let phase = ((elapsed - delay).as_secs_f64() % period) / period;
    (1.0 - (2.0 * phase - 1.0).abs()) as f32
}

/// Position of the route glow sweep in progress units, `None` while resting
pub fn glow_head(elapsed: Duration) -> Option<f64> {
    let cycle = (GLOW_SWEEP + GLOW_REST).as_secs_f64();
    let t = elapsed.as_secs_f64() % cycle;
    let sweep = GLOW_SWEEP.as_secs_f64();
    if t >= sweep {
        return None;
    }
    let p = t / sweep;
    Some(if p < 0.5 { p * 2.0 } else { 2.0 - p * 2.0 })
}

/// Ship glyph facing the way it is travelling on screen
pub fn ship_glyph(direction: Direction, route: &QuadraticBezier) -> &'static str {
    let heading = direction.sign() * (route.end.x - route.start.x);
    if heading < 0.0 {
        SHIP_LEFT
    } else {
        SHIP_RIGHT
    }
}

/// Outline of an axis-aligned ellipse, in canvas space
pub fn ellipse_points(center: (f64, f64), radius: (f64, f64), n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / n as f64;
            let p = Point::new(
                center.0 + radius.0 * theta.cos(),
                center.1 + radius.1 * theta.sin(),
            );
            to_canvas(p)
        })
        .collect()
}

/// Intro reveal timings, measured from mount
const OUTLINE_REVEAL: Duration = Duration::from_secs(2);
const REGION_GROW: Duration = Duration::from_millis(800);
const LABEL_FADE: Duration = Duration::from_millis(300);
const ROUTE_DELAY: Duration = Duration::from_millis(1500);
const ROUTE_REVEAL: Duration = Duration::from_secs(2);

/// Grow delay and label fade-in delay for each entry of `REGIONS`
const REGION_TIMING: [(Duration, Duration); 2] = [
    (Duration::from_millis(500), Duration::from_secs(1)),
    (Duration::from_millis(700), Duration::from_millis(1200)),
];

/// Water ripples: rings spreading from below the route
const RIPPLE_COUNT: usize = 3;
const RIPPLE_PERIOD: Duration = Duration::from_secs(3);
const RIPPLE_STAGGER: Duration = Duration::from_secs(1);
const RIPPLE_CENTER: (f64, f64) = (250.0, 282.0);
const RIPPLE_BASE_RADIUS: (f64, f64) = (40.0, 6.0);
const RIPPLE_COLOR: (u8, u8, u8) = (14, 165, 233);
const WATER_COLOR: (u8, u8, u8) = (15, 23, 42);

/// Linear progress (0.0 ~ 1.0) of a one-shot transition
pub fn reveal(elapsed: Duration, delay: Duration, duration: Duration) -> f64 {
    if elapsed <= delay {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    ((elapsed - delay).as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Smoothstep ease-in-out
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Leading part of a polyline covering `fraction` of its segments
///
/// The last segment kept may be cut part way, so the line grows smoothly.
pub fn partial_polyline(points: &[Point], fraction: f64) -> Vec<Point> {
    let segments = points.len().saturating_sub(1);
    if segments == 0 || fraction <= 0.0 {
        return Vec::new();
    }
    if fraction >= 1.0 {
        return points.to_vec();
    }

    let reach = fraction * segments as f64;
    let whole = reach.floor() as usize;
    let mut out = points[..=whole].to_vec();
    let rest = reach - whole as f64;
    if rest > 0.0 {
        let (a, b) = (points[whole], points[whole + 1]);
        out.push(Point::new(a.x + (b.x - a.x) * rest, a.y + (b.y - a.y) * rest));
    }
    out
}

/// Scale (x, y) and opacity of ripple ring `index`, `None` before it starts
///
/// Each ring widens to three times its size and grows to twice its height
/// while fading from 0.5 to nothing over one period.
pub fn ripple(elapsed: Duration, index: usize) -> Option<((f64, f64), f64)> {
    let delay = RIPPLE_STAGGER * index as u32;
    if elapsed < delay {
        return None;
    }
    let period = RIPPLE_PERIOD.as_secs_f64();
    let phase = ((elapsed - delay).as_secs_f64() % period) / period;
    let opacity = if phase < 0.5 {
        0.5 - 0.6 * phase
    } else {
        0.2 - 0.4 * (phase - 0.5)
    };
    Some(((1.0 + 2.0 * phase, 1.0 + phase), opacity))
}

/// Coastline as a closed loop, in map space
pub fn closed_outline() -> Vec<Point> {
    ASIA_OUTLINE
        .iter()
        .chain(ASIA_OUTLINE.first())
        .map(|&(x, y)| Point::new(x, y))
        .collect()
}

/// Marker pulse delay: alternate ports are offset by half a period
fn port_delay(index: usize) -> Duration {
    if index % 2 == 0 {
        Duration::ZERO
    } else {
        PORT_PULSE_PERIOD / 2
    }
}

pub fn render_trade_map(f: &mut Frame, area: Rect, app: &mut AppState, now: Instant) {
    // Split: summary line + canvas
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let engine = &app.engine;
    let snapshot = app.snapshot.clone();
    let route = *engine.route();
    let ports = engine.ports().to_vec();

    let (origin, destination) = engine.voyage();
    let heading = destination
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "port".to_string());
    let from = origin
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "port".to_string());

    // Summary line
    let summary = Paragraph::new(Line::from(vec![
        Span::styled(" ⚓ ", Style::default().fg(OCEAN_BLUE)),
        Span::styled(
            format!(
                "{} → {} | Progress: {:>3.0}% | Ports: {} | Cargo: {}",
                from,
                heading,
                engine.progress() * 100.0,
                ports.len(),
                engine.cargo().len()
            ),
            Style::default().fg(SAND),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(OCEAN_BLUE))
            .title(vec![Span::styled(
                "━ 🗺 Trade Route ━",
                Style::default()
                    .fg(OCEAN_BLUE)
                    .add_modifier(Modifier::BOLD),
            )]),
    );
    f.render_widget(summary, chunks[0]);

    let block = Block::default()
        .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(OCEAN_BLUE));
    // Mouse events are translated against this area
    app.map_area = block.inner(chunks[1]);

    // Capture values for closure
    let elapsed = app.elapsed(now);
    let animate = app.map_settings.animations_enabled;
    let full_detail = animate && !app.animation_reduced;
    let labels_enabled = app.map_settings.labels_enabled;
    let cursor = if app.map_settings.cursor_enabled {
        app.pointer
    } else {
        None
    };
    let over_port = snapshot.hovered_port_id.is_some();
    let hovered: Vec<bool> = ports.iter().map(|p| app.engine.is_hovered(&p.id)).collect();

    // Intro reveal; everything is fully drawn when animations are off
    let intro = |delay: Duration, duration: Duration| {
        if animate {
            reveal(elapsed, delay, duration)
        } else {
            1.0
        }
    };
    let outline = partial_polyline(
        &closed_outline(),
        ease_in_out(intro(Duration::ZERO, OUTLINE_REVEAL)),
    );
    let regions: Vec<(&'static str, (f64, f64), (f64, f64), f64)> = REGIONS
        .iter()
        .zip(REGION_TIMING)
        .map(|(&(label, center, (rx, ry)), (grow_delay, label_delay))| {
            let scale = intro(grow_delay, REGION_GROW);
            let fade = intro(label_delay, LABEL_FADE);
            (label, center, (rx * scale, ry * scale), fade)
        })
        .collect();
    let route_line = partial_polyline(
        &route.polyline(ROUTE_SEGMENTS),
        intro(ROUTE_DELAY, ROUTE_REVEAL),
    );
    let ripples: Vec<((f64, f64), f64)> = if animate {
        (0..RIPPLE_COUNT).filter_map(|i| ripple(elapsed, i)).collect()
    } else {
        Vec::new()
    };
    let glints = app.engine.glints();
    let cargo: Vec<(String, (f64, f64), Color)> = app
        .engine
        .cargo()
        .iter()
        .map(|icon| {
            let (x, y) = if animate {
                icon.position(elapsed)
            } else {
                (icon.x, icon.y)
            };
            (
                icon.kind.glyph().to_string(),
                to_canvas(Point::new(x, y)),
                cargo_color(icon.kind),
            )
        })
        .collect();
    let ship = ship_glyph(snapshot.direction, &route);
    let ship_at = to_canvas(snapshot.ship_position);
    let wake = pulse(elapsed, WAKE_PERIOD, Duration::ZERO);
    let glow = if full_detail { glow_head(elapsed) } else { None };

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, MAP_WIDTH])
        .y_bounds([0.0, MAP_HEIGHT])
        .paint(move |ctx| {
            // Coastline
            for pair in outline.windows(2) {
                let (x1, y1) = to_canvas(pair[0]);
                let (x2, y2) = to_canvas(pair[1]);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: OUTLINE_COLOR,
                });
            }

            // Country regions
            for &(label, center, radius, fade) in &regions {
                if radius.0 > 0.0 {
                    let coords = ellipse_points(center, radius, ELLIPSE_POINTS);
                    ctx.draw(&Points {
                        coords: &coords,
                        color: REGION_COLOR,
                    });
                }
                if fade > 0.0 {
                    let color = interpolate_color(WATER_COLOR, REGION_RGB, fade as f32);
                    let (x, y) = to_canvas(Point::new(center.0, center.1 + 22.0));
                    ctx.print(
                        x - 12.0,
                        y,
                        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    );
                }
            }

            // Water ripples sit under the route
            for &((sx, sy), opacity) in &ripples {
                let radius = (RIPPLE_BASE_RADIUS.0 * sx, RIPPLE_BASE_RADIUS.1 * sy);
                let coords = ellipse_points(RIPPLE_CENTER, radius, ELLIPSE_POINTS);
                ctx.draw(&Points {
                    coords: &coords,
                    color: interpolate_color(WATER_COLOR, RIPPLE_COLOR, (opacity * 2.0) as f32),
                });
            }

            // Dashed route: every other segment
            for (i, pair) in route_line.windows(2).enumerate() {
                if i % 2 == 1 {
                    continue;
                }
                let (x1, y1) = to_canvas(pair[0]);
                let (x2, y2) = to_canvas(pair[1]);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: OCEAN_BLUE,
                });
            }

            ctx.layer();

            // Glints lit by the passing glow
            if let Some(head) = glow {
                for (offset, point) in crate::engine::GLINT_OFFSETS.iter().zip(&glints) {
                    if (offset - head).abs() <= GLOW_REACH {
                        let (x, y) = to_canvas(*point);
                        ctx.print(x, y, Span::styled(GLINT_SYMBOL, Style::default().fg(SEAFOAM)));
                    }
                }
            }

            // Cargo
            for (glyph, (x, y), color) in &cargo {
                ctx.print(*x, *y, Span::styled(glyph.clone(), Style::default().fg(*color)));
            }

            // Ports
            for (i, (port, &hovered)) in ports.iter().zip(&hovered).enumerate() {
                let beat = pulse(elapsed, PORT_PULSE_PERIOD, port_delay(i));
                let beat = if animate { beat } else { 0.0 };
                let color = port_marker_color(hovered, beat);
                let (x, y) = to_canvas(port.position());

                if hovered {
                    ctx.print(
                        x,
                        y,
                        Span::styled(
                            format!("{PORT_HOVER_SYMBOL}{ANCHOR_SYMBOL}"),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                    );
                    // Tooltip above the marker
                    ctx.print(
                        x - 20.0,
                        y + 24.0,
                        Span::styled(
                            format!(" {}, {} ", port.name, port.country),
                            Style::default()
                                .fg(Color::Black)
                                .bg(SEAFOAM)
                                .add_modifier(Modifier::BOLD),
                        ),
                    );
                    ctx.print(
                        x - 20.0,
                        y + 14.0,
                        Span::styled(port.shipments_label.clone(), Style::default().fg(SEAFOAM)),
                    );
                } else {
                    ctx.print(x, y, Span::styled(PORT_SYMBOL, Style::default().fg(color)));
                    if labels_enabled {
                        ctx.print(
                            x + 6.0,
                            y - 8.0,
                            Span::styled(port.name.clone(), Style::default().fg(SAND)),
                        );
                    }
                }
            }

            // Wake trails the ship
            if full_detail {
                let behind = if ship == SHIP_LEFT { 18.0 } else { -12.0 };
                let symbol = if wake > 0.5 { "≈" } else { "~" };
                ctx.print(
                    ship_at.0 + behind,
                    ship_at.1 - 6.0,
                    Span::styled(symbol, Style::default().fg(brighten(OCEAN_BLUE, 0.8 + wake))),
                );
            }

            // Ship
            ctx.print(
                ship_at.0,
                ship_at.1,
                Span::styled(
                    ship,
                    Style::default().fg(HARBOR_LIGHT).add_modifier(Modifier::BOLD),
                ),
            );

            // Pointer cursor last, on top of everything
            if let Some(pointer) = cursor {
                let (x, y) = to_canvas(pointer);
                let (color, modifier) = if over_port {
                    (SEAFOAM, Modifier::BOLD)
                } else {
                    (SAND, Modifier::empty())
                };
                ctx.print(
                    x,
                    y,
                    Span::styled(CURSOR_SYMBOL, Style::default().fg(color).add_modifier(modifier)),
                );
            }
        });

    f.render_widget(canvas, chunks[1]);
}
