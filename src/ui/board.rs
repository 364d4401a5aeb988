//! Kanban board rendering and geometry.
//!
//! `board_geometry` is the single source of truth for column and card
//! rectangles: the renderer draws from it and the input handler hit-tests
//! against it, so the two can never disagree about what sits where.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::app::state::{AppState, Selection};
use crate::board::drag::{closest_region, DropTarget, HitRegion, Pointer};
use crate::board::{BoardState, Stage};
use crate::ui::card::{render_card, CARD_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::truncate_to_width;

#[derive(Debug, Clone)]
pub struct CardHit {
    pub id: String,
    pub rect: Rect,
}

#[derive(Debug, Clone)]
pub struct ColumnGeometry {
    pub stage: Stage,
    pub rect: Rect,
    pub inner: Rect,
    /// Visible cards only, top to bottom.
    pub cards: Vec<CardHit>,
    /// Cards scrolled off above the first visible one.
    pub skipped: usize,
    /// Cards that did not fit below the last visible one.
    pub overflow: usize,
}

#[derive(Debug, Clone)]
pub struct BoardGeometry {
    pub area: Rect,
    pub columns: Vec<ColumnGeometry>,
}

impl BoardGeometry {
    /// Droppable regions in resolution order: each column precedes its
    /// cards, so an exact tie favors the column.
    pub fn regions(&self) -> Vec<HitRegion> {
        let mut regions = Vec::new();
        for col in &self.columns {
            regions.push(HitRegion {
                target: DropTarget::Column(col.stage),
                rect: col.rect,
            });
            for card in &col.cards {
                regions.push(HitRegion {
                    target: DropTarget::Card(card.id.clone()),
                    rect: card.rect,
                });
            }
        }
        regions
    }

    pub fn card_at(&self, pointer: Pointer) -> Option<&CardHit> {
        let pos = Position::new(pointer.x, pointer.y);
        self.columns
            .iter()
            .flat_map(|c| c.cards.iter())
            .find(|card| card.rect.contains(pos))
    }

    pub fn column_at(&self, pointer: Pointer) -> Option<usize> {
        let pos = Position::new(pointer.x, pointer.y);
        self.columns.iter().position(|c| c.rect.contains(pos))
    }

    pub fn contains(&self, pointer: Pointer) -> bool {
        self.area.contains(Position::new(pointer.x, pointer.y))
    }
}

/// Compute column and card rectangles for the current viewport. Membership
/// is derived from the board on every call, never cached.
pub fn board_geometry(
    area: Rect,
    board: &BoardState,
    scroll: &[usize; Stage::BOARD.len()],
) -> BoardGeometry {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(area);

    let mut columns = Vec::with_capacity(Stage::BOARD.len());
    for (i, stage) in Stage::BOARD.into_iter().enumerate() {
        let rect = chunks[i];
        let inner = rect.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });

        let leads = board.leads_in_stage(stage);
        let skipped = scroll[i].min(leads.len().saturating_sub(1));
        let remaining = leads.len() - skipped;

        // Reserve a line for the overflow marker when not everything fits.
        let mut capacity = (inner.height / CARD_HEIGHT) as usize;
        if remaining > capacity || skipped > 0 {
            capacity = (inner.height.saturating_sub(1) / CARD_HEIGHT) as usize;
        }
        let shown = remaining.min(capacity);

        let cards = leads
            .iter()
            .skip(skipped)
            .take(shown)
            .enumerate()
            .map(|(j, lead)| CardHit {
                id: lead.id.clone(),
                rect: Rect::new(
                    inner.x,
                    inner.y + (j as u16) * CARD_HEIGHT,
                    inner.width,
                    CARD_HEIGHT,
                ),
            })
            .collect();

        columns.push(ColumnGeometry {
            stage,
            rect,
            inner,
            cards,
            skipped,
            overflow: remaining - shown,
        });
    }

    BoardGeometry { area, columns }
}

/// Stage the active drag would land on right now, for hover feedback.
fn hover_stage(state: &AppState, geometry: &BoardGeometry) -> Option<Stage> {
    let ghost = state.drag.ghost_rect(state.viewport)?;
    if !ghost.intersects(geometry.area) {
        return None;
    }
    let regions = geometry.regions();
    let hit = closest_region(ghost, &regions)?;
    crate::board::drag::target_stage(hit, &state.board)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let geometry = board_geometry(area, &state.board, &state.column_scroll);
    let hover = hover_stage(state, &geometry);

    for (i, col) in geometry.columns.iter().enumerate() {
        let count = state.board.stage_count(col.stage);
        let title = Line::from(vec![
            Span::styled(" ● ", Style::default().fg(Theme::stage_color(col.stage))),
            Span::styled(col.stage.title(), Theme::title()),
            Span::styled(format!(" {} ", count), Theme::muted()),
        ]);

        let border_style = if hover == Some(col.stage) {
            Theme::border_hover()
        } else {
            Theme::border()
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        frame.render_widget(block, col.rect);

        if count == 0 {
            render_empty_hint(frame, col.inner);
            continue;
        }

        for (j, hit) in col.cards.iter().enumerate() {
            let Some(lead) = state.board.lead(&hit.id) else {
                continue;
            };
            let selected = state.selection
                == Some(Selection {
                    column: i,
                    row: col.skipped + j,
                });
            let is_drag_source = state.drag.active_lead() == Some(hit.id.as_str());
            render_card(
                frame,
                hit.rect,
                lead,
                &state.config.ui,
                selected,
                is_drag_source,
            );
        }

        let hidden = col.skipped + col.overflow;
        if hidden > 0 && col.inner.height > 0 {
            let marker = Rect::new(
                col.inner.x,
                col.inner.bottom().saturating_sub(1),
                col.inner.width,
                1,
            );
            let text = truncate_to_width(&format!("+{} more", hidden), col.inner.width as usize);
            frame.render_widget(
                Paragraph::new(Span::styled(text, Theme::muted())).alignment(Alignment::Center),
                marker,
            );
        }
    }
}

fn render_empty_hint(frame: &mut Frame, inner: Rect) {
    if inner.height == 0 {
        return;
    }
    let y = inner.y + inner.height / 2;
    let hint = Rect::new(inner.x, y, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled("Drop leads here", Theme::muted()))
            .alignment(Alignment::Center),
        hint,
    );
}

/// The floating card that follows the pointer during a drag.
pub fn render_ghost(frame: &mut Frame, state: &AppState) {
    let Some(rect) = state.drag.ghost_rect(state.viewport) else {
        return;
    };
    let Some(id) = state.drag.active_lead() else {
        return;
    };
    let Some(lead) = state.board.lead(id) else {
        return;
    };
    frame.render_widget(Clear, rect);
    render_card(frame, rect, lead, &state.config.ui, false, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardState;
    use crate::data;

    fn geometry() -> BoardGeometry {
        let board = BoardState::new(data::sample_leads());
        board_geometry(
            Rect::new(0, 8, 126, 40),
            &board,
            &[0; Stage::BOARD.len()],
        )
    }

    #[test]
    fn six_columns_cover_the_board() {
        let geo = geometry();
        assert_eq!(geo.columns.len(), 6);
        let stages: Vec<_> = geo.columns.iter().map(|c| c.stage).collect();
        assert_eq!(stages, Stage::BOARD);
    }

    #[test]
    fn columns_precede_their_cards_in_region_order() {
        let geo = geometry();
        let regions = geo.regions();
        let first_card = regions
            .iter()
            .position(|r| matches!(r.target, DropTarget::Card(_)))
            .unwrap();
        assert!(matches!(regions[0].target, DropTarget::Column(_)));
        assert!(first_card > 0);
    }

    #[test]
    fn card_at_finds_the_card_under_the_pointer() {
        let geo = geometry();
        let first = &geo.columns[0].cards[0];
        let inside = Pointer::new(first.rect.x + 2, first.rect.y + 2);
        assert_eq!(geo.card_at(inside).unwrap().id, first.id);

        // The strip above the board belongs to no card.
        let outside = Pointer::new(first.rect.x + 2, geo.area.y.saturating_sub(1));
        assert!(geo.card_at(outside).is_none());
    }

    #[test]
    fn cards_sit_inside_their_column() {
        let geo = geometry();
        for col in &geo.columns {
            for card in &col.cards {
                assert!(card.rect.x >= col.inner.x);
                assert!(card.rect.right() <= col.inner.right());
                assert!(card.rect.bottom() <= col.inner.bottom());
            }
        }
    }

    #[test]
    fn scroll_skips_leading_cards() {
        let board = BoardState::new(data::sample_leads());
        let mut scroll = [0; Stage::BOARD.len()];
        scroll[0] = 1;
        let geo = board_geometry(Rect::new(0, 8, 126, 40), &board, &scroll);
        let first_new = board.leads_in_stage(Stage::New);
        assert_eq!(geo.columns[0].skipped, 1);
        assert_eq!(geo.columns[0].cards[0].id, first_new[1].id);
    }

    #[test]
    fn short_viewport_reports_overflow() {
        let board = BoardState::new(data::sample_leads());
        // Room for one card per column at most.
        let geo = board_geometry(
            Rect::new(0, 0, 126, CARD_HEIGHT + 3),
            &board,
            &[0; Stage::BOARD.len()],
        );
        let new_col = &geo.columns[0];
        let total = board.stage_count(Stage::New);
        assert_eq!(new_col.cards.len() + new_col.overflow, total);
        assert!(new_col.overflow > 0);
    }
}
