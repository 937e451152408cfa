// Enquiry panel rendering module
//
// Renders the trade enquiry form: one row per field, the focused field
// highlighted while the form has input focus, and a submit row that turns
// into a spinner while the simulated submission is pending.

use crate::app::{AppState, InputMode};
use crate::enquiry::{FieldKind, SubmitState};
use crate::theme::{OCEAN_BLUE, SAND, SEAFOAM, SIGNAL_CORAL};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// One full spinner rotation
const SPINNER_PERIOD: Duration = Duration::from_secs(1);

/// Width reserved for field labels
const LABEL_WIDTH: usize = 22;

/// Spinner frame for the given animation clock
pub fn spinner_frame(elapsed: Duration) -> &'static str {
    let per_frame = SPINNER_PERIOD.as_millis() / SPINNER_FRAMES.len() as u128;
    let idx = (elapsed.as_millis() / per_frame) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}

/// Keep the tail of `value` that fits in `width` columns
pub fn fit_tail(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut used = 0;
    for c in value.chars().rev() {
        let w = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]) as &str);
        if used + w + 1 > width {
            break;
        }
        used += w;
        tail.push(c);
    }
    tail.reverse();
    format!("…{}", tail.into_iter().collect::<String>())
}

pub fn render_enquiry_panel(f: &mut Frame, area: Rect, app: &AppState, elapsed: Duration) {
    let editing = app.input_mode == InputMode::Enquiry;
    let border_color = if editing { SEAFOAM } else { OCEAN_BLUE };
    let form = &app.enquiry;

    let value_width = (area.width as usize)
        .saturating_sub(LABEL_WIDTH + 4)
        .max(4);

    let mut lines = Vec::new();
    for (idx, (spec, value)) in form.fields().enumerate() {
        let focused = editing && idx == form.focused();

        let marker = if spec.required { "*" } else { " " };
        let label = format!("{}{} ", spec.label, marker);
        let label_style = if focused {
            Style::default().fg(SEAFOAM).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SAND)
        };

        let icon = match spec.kind {
            FieldKind::Email => "✉ ",
            FieldKind::Phone => "☎ ",
            FieldKind::Multiline => "📦 ",
            FieldKind::Text => "",
        };

        let value_span = if value.is_empty() {
            Span::styled(
                fit_tail(spec.placeholder, value_width),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(fit_tail(value, value_width), Style::default().fg(Color::White))
        };

        let mut spans = vec![
            Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
            Span::raw(icon),
            value_span,
        ];
        if focused && !form.is_submitting() {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(SEAFOAM).add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    let submit = match form.state() {
        SubmitState::Submitting { .. } => Line::from(vec![
            Span::styled(spinner_frame(elapsed), Style::default().fg(SEAFOAM)),
            Span::styled(" Submitting…", Style::default().fg(SAND)),
        ]),
        SubmitState::Idle if editing => Line::from(vec![
            Span::styled(
                "[ Submit Enquiry ➤ ]",
                Style::default()
                    .fg(Color::Black)
                    .bg(OCEAN_BLUE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  Enter · editing {}", form.focused_field().label),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        SubmitState::Idle => Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("E", Style::default().fg(SIGNAL_CORAL).add_modifier(Modifier::BOLD)),
            Span::styled(" to start an enquiry", Style::default().fg(Color::DarkGray)),
        ]),
    };
    lines.push(submit);

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                "━ ✉ Ready to Start Trading? ━",
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(panel, area);
}
