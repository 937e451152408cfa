// Banner rendering module
//
// Renders the top banner with the ASCII logo, tagline and route stats.

use crate::app::AppState;
use crate::theme::{interpolate_color, DEEP_NAVY, HARBOR_LIGHT, OCEAN_BLUE, SAND, SEAFOAM};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const LOGO: [&str; 4] = [
    "  _____ ___    _   ___  _____      _____ _  _ ___  ",
    " |_   _| _ \\  /_\\ |   \\| __\\ \\    / /_ _| \\| |   \\ ",
    "   | | |   / / _ \\| |) | _| \\ \\/\\/ / | || .` | |) |",
    "   |_| |_|_\\/_/ \\_\\___/|___| \\_/\\_/ |___|_|\\_|___/ ",
];

/// Stats line shown beside the last logo row
pub fn stats_text(app: &AppState) -> String {
    format!(
        "   [⚓ Ports: {}] [📦 Cargo: {}] [⛴ Voyage: {:.0}%]",
        app.engine.ports().len(),
        app.engine.cargo().len(),
        app.engine.progress() * 100.0
    )
}

pub fn render_banner(f: &mut Frame, area: Rect, app: &AppState) {
    let logo_style = |row: usize| {
        // Fade the logo from ocean blue toward seafoam, one step per row
        let ratio = row as f32 / (LOGO.len() - 1) as f32;
        Style::default()
            .fg(interpolate_color((14, 165, 233), (103, 232, 249), ratio))
            .add_modifier(Modifier::BOLD)
    };

    let banner_text = vec![
        Line::from(vec![Span::styled(LOGO[0], logo_style(0))]),
        Line::from(vec![
            Span::styled(LOGO[1], logo_style(1)),
            Span::styled(
                "   >>> Asia Pacific Trade Routes <<<",
                Style::default().fg(SEAFOAM).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(LOGO[2], logo_style(2)),
            Span::styled(
                "   \"Connecting the ports that move the world.\"",
                Style::default().fg(SAND),
            ),
        ]),
        Line::from(vec![
            Span::styled(LOGO[3], logo_style(3)),
            Span::styled(stats_text(app), Style::default().fg(HARBOR_LIGHT)),
        ]),
    ];

    let banner = Paragraph::new(banner_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(OCEAN_BLUE))
                .style(Style::default().bg(DEEP_NAVY)),
        )
        .alignment(Alignment::Left);

    f.render_widget(banner, area);
}
