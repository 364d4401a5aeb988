use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::state::{AppState, ViewMode};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(" LeadFlow ", Theme::app_badge()));
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let view_name = match state.view {
        ViewMode::Kanban => "KANBAN",
        ViewMode::List => "LIST",
    };
    let hints = " q quit · v view · [ ] move · x lost ";

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let right = hints.width() + view_name.len() + 3;
    let remaining = (area.width as usize).saturating_sub(used + right);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(hints, Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", view_name),
        Style::default().fg(Theme::ACCENT).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    frame.render_widget(Paragraph::new(line), area);
}
