// Port Inspector rendering module
//
// Renders the detail panel for the hovered port and the live voyage
// readout (progress, heading, tick interval).

use crate::app::AppState;
use crate::engine::DEFAULT_TICK_INTERVAL;
use crate::theme::{get_tick_color, HARBOR_LIGHT, OCEAN_BLUE, SAND, SEAFOAM};
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

// ============================================================================
// Port Inspector View Model
// ============================================================================

/// Data needed to render the Port Inspector, extracted from AppState
#[derive(Debug, Clone, PartialEq)]
pub struct PortInspectorView {
    /// "Shanghai, China" or a placeholder when nothing is hovered
    pub title: String,
    pub description: String,
    pub shipments: String,
    /// Map-space coordinates of the hovered port
    pub coordinates: Option<(f64, f64)>,
    pub has_selection: bool,
    /// Voyage progress in percent (0-100)
    pub progress_percent: u16,
    pub heading: String,
    pub tick_ms: u64,
    pub tick_color: Color,
    /// Progress increment per tick
    pub step: f64,
}

/// Build PortInspectorView from AppState
pub fn build_port_inspector_view(app: &AppState, now: Instant) -> PortInspectorView {
    let engine = &app.engine;
    let (_, destination) = engine.voyage();
    let heading = destination
        .map(|p| format!("Bound for {}", p.name))
        .unwrap_or_else(|| "Under way".to_string());

    let tick_ms = engine.tick_interval().as_millis() as u64;
    let step = engine.step();
    let tick_color = get_tick_color(
        tick_ms,
        DEFAULT_TICK_INTERVAL.as_millis() as u64,
        app.animation_config.recently_changed(now),
    );
    let progress_percent = (engine.progress() * 100.0).round().clamp(0.0, 100.0) as u16;

    match engine.hovered_port() {
        Some(port) => PortInspectorView {
            title: format!("{}, {}", port.name, port.country),
            description: port.description.clone(),
            shipments: port.shipments_label.clone(),
            coordinates: Some((port.x, port.y)),
            has_selection: true,
            progress_percent,
            heading,
            tick_ms,
            tick_color,
            step,
        },
        None => PortInspectorView {
            title: "No port selected".to_string(),
            description: "Hover over a port marker to see its details.".to_string(),
            shipments: String::new(),
            coordinates: None,
            has_selection: false,
            progress_percent,
            heading,
            tick_ms,
            tick_color,
            step,
        },
    }
}

pub fn render_port_inspector(f: &mut Frame, area: Rect, app: &AppState, now: Instant) {
    let view = build_port_inspector_view(app, now);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(OCEAN_BLUE))
        .title(Span::styled(
            "━ 🔭 Port Inspector ━",
            Style::default()
                .fg(OCEAN_BLUE)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let title_color = if view.has_selection { SEAFOAM } else { SAND };
    let mut lines = vec![Line::from(Span::styled(
        view.title.clone(),
        Style::default().fg(title_color).add_modifier(Modifier::BOLD),
    ))];
    if let Some((x, y)) = view.coordinates {
        lines.push(Line::from(Span::styled(
            format!("Map position: ({x:.0}, {y:.0})"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        view.description.clone(),
        Style::default().fg(SAND),
    )));
    if !view.shipments.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("📦 ", Style::default().fg(SEAFOAM)),
            Span::styled(
                view.shipments.clone(),
                Style::default().fg(SEAFOAM).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(HARBOR_LIGHT))
        .percent(view.progress_percent)
        .label(view.heading.clone());
    f.render_widget(gauge, chunks[1]);

    let tick_line = Line::from(vec![
        Span::styled("Tick: ", Style::default().fg(SAND)),
        Span::styled(
            format!("{}ms", view.tick_ms),
            Style::default()
                .fg(view.tick_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  Step: {:.3}", view.step),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(tick_line), chunks[2]);
}
