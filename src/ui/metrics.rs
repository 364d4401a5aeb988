use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::state::AppState;
use crate::board::Trend;
use crate::ui::theme::Theme;
use crate::ui::truncate_to_width;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.metrics.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, state.metrics.len() as u32); state.metrics.len()];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints(constraints)
        .split(area);

    for (metric, chunk) in state.metrics.iter().zip(chunks.iter()) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", metric.title),
                Theme::muted(),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border());
        let inner = block.inner(*chunk);
        frame.render_widget(block, *chunk);
        if inner.width == 0 || inner.height == 0 {
            continue;
        }

        let arrow = match metric.trend {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "·",
        };
        let width = inner.width as usize;
        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&metric.value, width),
                Theme::title(),
            )),
            Line::from(vec![
                Span::styled(
                    format!("{} {:+.1}% ", arrow, metric.change),
                    Theme::trend(metric.trend),
                ),
                Span::styled(
                    truncate_to_width(&metric.change_label, width.saturating_sub(9)),
                    Theme::muted(),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
