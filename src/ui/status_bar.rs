// Status Bar rendering module
//
// Renders the bottom status bar: the active toast if any, otherwise the
// keyboard shortcuts for the current input mode, followed by toggle
// indicators.

use crate::app::{AppState, InputMode};
use crate::theme::{toast_color, KELP_GREEN, OCEAN_BLUE, SAND, SIGNAL_CORAL};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

struct Hint {
    priority: u8,
    key: &'static str,
    desc: &'static str,
    color: Color,
}

fn hints_for(mode: InputMode) -> Vec<Hint> {
    match mode {
        InputMode::Map => vec![
            Hint { priority: 1, key: "Q:", desc: "Quit | ", color: SIGNAL_CORAL },
            Hint { priority: 1, key: "E:", desc: "Enquire | ", color: OCEAN_BLUE },
            Hint { priority: 2, key: "+/-:", desc: "Speed | ", color: OCEAN_BLUE },
            Hint { priority: 2, key: "A:", desc: "Anim | ", color: OCEAN_BLUE },
            Hint { priority: 2, key: "t:", desc: "Labels | ", color: OCEAN_BLUE },
            Hint { priority: 3, key: "c:", desc: "Cursor | ", color: OCEAN_BLUE },
            Hint { priority: 3, key: "Mouse:", desc: "Hover ports | ", color: OCEAN_BLUE },
        ],
        InputMode::Enquiry => vec![
            Hint { priority: 1, key: "Esc:", desc: "Back to map | ", color: SIGNAL_CORAL },
            Hint { priority: 1, key: "Enter:", desc: "Submit | ", color: OCEAN_BLUE },
            Hint { priority: 2, key: "Tab/↑↓:", desc: "Field | ", color: OCEAN_BLUE },
            Hint { priority: 3, key: "Bksp:", desc: "Delete | ", color: OCEAN_BLUE },
        ],
    }
}

/// Shortcut hint spans that fit in `available_width` columns
///
/// Lower priority numbers are placed first; a hint that does not fit is
/// skipped while later, shorter ones may still be placed.
pub fn build_hint_spans(mode: InputMode, available_width: usize) -> Vec<Span<'static>> {
    let hints = hints_for(mode);
    let mut spans = Vec::new();
    let mut current_length = 0;

    for priority in 1..=3 {
        for hint in hints.iter().filter(|h| h.priority == priority) {
            let hint_length = hint.key.width() + hint.desc.width();
            if current_length + hint_length <= available_width {
                spans.push(Span::styled(
                    hint.key,
                    Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(hint.desc));
                current_length += hint_length;
            }
        }
    }

    spans
}

fn toggle(key: &'static str, on: bool, spans: &mut Vec<Span<'static>>) {
    let (state, color) = if on { ("ON", KELP_GREEN) } else { ("OFF", SAND) };
    spans.push(Span::styled(key, Style::default().fg(SAND)));
    spans.push(Span::styled(
        state,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("] ", Style::default().fg(SAND)));
}

/// Build toggle status indicator spans for the status bar
/// Shows [A:ON/OFF] [t:ON/OFF] [c:ON/OFF], plus [reduced] when frame
/// pacing has backed animations off
pub fn build_toggle_indicators(app: &AppState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    toggle("[A:", app.map_settings.animations_enabled, &mut spans);
    toggle("[t:", app.map_settings.labels_enabled, &mut spans);
    toggle("[c:", app.map_settings.cursor_enabled, &mut spans);
    if app.animation_reduced {
        spans.push(Span::styled(
            "[reduced]",
            Style::default().fg(SIGNAL_CORAL).add_modifier(Modifier::BOLD),
        ));
    }
    spans
}

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let indicators = build_toggle_indicators(app);
    let indicator_width: usize = indicators.iter().map(|s| s.content.width()).sum();

    // Borders, icon and the separating space
    let available_width = (area.width as usize).saturating_sub(indicator_width + 7);

    let mut spans = vec![Span::styled(" ⚓ ", Style::default().fg(OCEAN_BLUE))];

    match &app.toast {
        Some(toast) => {
            let color = toast_color(toast.kind);
            spans.push(Span::styled(
                toast.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }
        None => spans.extend(build_hint_spans(app.input_mode, available_width)),
    }

    spans.push(Span::raw(" "));
    spans.extend(indicators);

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(OCEAN_BLUE)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}
