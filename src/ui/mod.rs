pub mod board;
mod card;
pub mod layout;
mod metrics;
mod status_bar;
pub mod theme;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::state::{AppState, ViewMode};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header);
    metrics::render(frame, app_layout.metrics, state);
    match state.view {
        ViewMode::Kanban => board::render(frame, app_layout.board, state),
        ViewMode::List => render_list_placeholder(frame, app_layout.board),
    }
    status_bar::render(frame, app_layout.status_bar, state);

    // The drag ghost paints above everything else.
    if state.drag.is_dragging() {
        board::render_ghost(frame, state);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(" Lead Management", Theme::title())),
        Line::from(Span::styled(
            " Track and manage your sales pipeline",
            Theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_list_placeholder(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("List View", Theme::title())),
        Line::from(""),
        Line::from(Span::styled(
            "List view coming soon. Press v to switch back to the kanban board.",
            Theme::muted(),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    let centered = center_vertically(area, 3);
    frame.render_widget(paragraph, centered);
}

fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    Rect::new(area.x, y, area.width, height)
}

/// Group a whole-unit value with thousands separators: 45000 -> "45,000".
pub fn format_value(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncate to a display width, appending `…` when text was cut.
pub(crate) fn truncate_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
