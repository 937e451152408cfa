// UI rendering module
//
// This module contains all UI rendering components for tradewind.
// The main draw() function orchestrates rendering of all UI panels.

mod banner;
mod enquiry_panel;
mod port_inspector;
mod status_bar;
mod trade_map;

use crate::app::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use std::time::Instant;

use banner::render_banner;
use enquiry_panel::render_enquiry_panel;
use port_inspector::render_port_inspector;
use status_bar::render_status_bar;
use trade_map::render_trade_map;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &mut AppState, now: Instant) {
    let size = f.area();

    // Main layout: banner, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Banner
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_banner(f, chunks[0], app);

    // Body: trade map + right panels
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Trade map
            Constraint::Percentage(35), // Right panels
        ])
        .split(chunks[1]);

    render_trade_map(f, body_chunks[0], app, now);

    // Right side: Port Inspector + enquiry form
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Port Inspector
            Constraint::Percentage(60), // Enquiry
        ])
        .split(body_chunks[1]);

    render_port_inspector(f, right_chunks[0], app, now);
    render_enquiry_panel(f, right_chunks[1], app, app.elapsed(now));

    render_status_bar(f, chunks[2], app);
}
