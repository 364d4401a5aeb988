use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::board::Lead;
use crate::config::model::UiConfig;
use crate::ui::theme::Theme;
use crate::ui::{format_value, truncate_to_width};

/// Total height of one card, borders included.
pub const CARD_HEIGHT: u16 = 6;

pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    lead: &Lead,
    cfg: &UiConfig,
    selected: bool,
    ghost: bool,
) {
    let border_style = if ghost {
        Theme::ghost()
    } else if selected {
        Theme::border_selected()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let name_style = if ghost { Theme::ghost() } else { Theme::title() };
    let body_style = if ghost { Theme::ghost() } else { Theme::muted() };

    let badge = format!(" {} ", lead.priority.label());
    let name = truncate_to_width(&lead.name, width.saturating_sub(badge.width() + 1));
    let lines = vec![
        split_line(
            Span::styled(name, name_style),
            Span::styled(badge, Theme::priority(lead.priority)),
            width,
        ),
        Line::from(Span::styled(
            truncate_to_width(&lead.company, width),
            body_style,
        )),
        Line::from(Span::styled(
            format!("{}{}", cfg.currency_symbol, format_value(lead.value)),
            if ghost { Theme::ghost() } else { Theme::value() },
        )),
        split_line(
            Span::styled(
                truncate_to_width(
                    &format!("{} {}", lead.assigned_to_avatar, lead.assigned_to),
                    width.saturating_sub(7),
                ),
                body_style,
            ),
            Span::styled(
                lead.last_activity.format(&cfg.date_format).to_string(),
                body_style,
            ),
            width,
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Left- and right-aligned spans on one line, padded apart to `width`.
fn split_line<'a>(left: Span<'a>, right: Span<'a>, width: usize) -> Line<'a> {
    let used = left.content.width() + right.content.width();
    let pad = width.saturating_sub(used);
    Line::from(vec![left, Span::raw(" ".repeat(pad)), right])
}
