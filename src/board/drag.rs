//! Drag gesture state and drop-target resolution.
//!
//! The machine is `Idle` until a press lands on a card, `Dragging` while the
//! pointer moves, and resolves at most one stage reassignment when the
//! gesture ends. Unresolvable drops are discarded silently; releasing a card
//! off-target is a normal gesture, not an error.

use ratatui::layout::Rect;

use crate::board::{BoardState, Stage};

/// Pointer position in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pointer {
    pub x: u16,
    pub y: u16,
}

impl Pointer {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// What a droppable region on the board stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Column(Stage),
    Card(String),
}

/// A droppable region paired with its on-screen rectangle. Regions come from
/// the same geometry pass the renderer uses, so hit-testing and drawing
/// cannot disagree.
#[derive(Debug, Clone)]
pub struct HitRegion {
    pub target: DropTarget,
    pub rect: Rect,
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        lead_id: String,
        pointer: Pointer,
        /// Offset of the grab point inside the card.
        grab: (u16, u16),
        /// Size of the card being dragged.
        size: (u16, u16),
    },
}

impl DragState {
    /// Start dragging `lead_id`. Ignored while a drag is already active;
    /// drag-start events only arrive after the prior gesture completed.
    pub fn begin(&mut self, lead_id: String, pointer: Pointer, card: Rect) {
        if matches!(self, DragState::Dragging { .. }) {
            return;
        }
        *self = DragState::Dragging {
            lead_id,
            grab: (
                pointer.x.saturating_sub(card.x),
                pointer.y.saturating_sub(card.y),
            ),
            size: (card.width, card.height),
            pointer,
        };
    }

    /// Track pointer movement. Returns true when the ghost moved and a
    /// re-render is due.
    pub fn update(&mut self, at: Pointer) -> bool {
        match self {
            DragState::Dragging { pointer, .. } => {
                *pointer = at;
                true
            }
            DragState::Idle => false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn active_lead(&self) -> Option<&str> {
        match self {
            DragState::Dragging { lead_id, .. } => Some(lead_id),
            DragState::Idle => None,
        }
    }

    /// Rectangle of the dragged card at its current pointer position,
    /// clamped so the ghost stays inside the viewport.
    pub fn ghost_rect(&self, viewport: Rect) -> Option<Rect> {
        let DragState::Dragging {
            pointer,
            grab,
            size,
            ..
        } = self
        else {
            return None;
        };
        let width = (*size).0.min(viewport.width);
        let height = (*size).1.min(viewport.height);
        let max_x = viewport.right().saturating_sub(width);
        let max_y = viewport.bottom().saturating_sub(height);
        let x = pointer.x.saturating_sub(grab.0).min(max_x).max(viewport.x);
        let y = pointer.y.saturating_sub(grab.1).min(max_y).max(viewport.y);
        Some(Rect::new(x, y, width, height))
    }

    /// End the gesture, yielding the dragged lead and the card's final
    /// rectangle. Always returns to `Idle`.
    pub fn finish(&mut self, viewport: Rect) -> Option<(String, Rect)> {
        let rect = self.ghost_rect(viewport)?;
        let DragState::Dragging { lead_id, .. } = std::mem::take(self) else {
            return None;
        };
        Some((lead_id, rect))
    }

    /// Abandon the gesture without resolving anything.
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }
}

fn corner_distance(a: Rect, b: Rect) -> f64 {
    let corners = |r: Rect| {
        [
            (r.x as f64, r.y as f64),
            (r.right() as f64, r.y as f64),
            (r.x as f64, r.bottom() as f64),
            (r.right() as f64, r.bottom() as f64),
        ]
    };
    corners(a)
        .iter()
        .zip(corners(b).iter())
        .map(|((ax, ay), (bx, by))| ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt())
        .sum()
}

/// Nearest-corners collision: among `regions`, pick the one whose rectangle
/// corners lie closest to the dragged card's rectangle. Ties break to the
/// first region in order (columns precede their cards).
pub fn closest_region<'a>(dragged: Rect, regions: &'a [HitRegion]) -> Option<&'a HitRegion> {
    let mut best: Option<(&HitRegion, f64)> = None;
    for region in regions {
        let dist = corner_distance(dragged, region.rect);
        match best {
            Some((_, d)) if dist >= d => {}
            _ => best = Some((region, dist)),
        }
    }
    best.map(|(r, _)| r)
}

/// Map a resolved region to a target stage: a column is taken directly,
/// a card stands in for the column it currently occupies.
pub fn target_stage(region: &HitRegion, board: &BoardState) -> Option<Stage> {
    match &region.target {
        DropTarget::Column(stage) => Some(*stage),
        DropTarget::Card(id) => board.lead(id).map(|l| l.status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Lead, Priority};
    use chrono::Local;

    fn lead(id: &str, status: Stage) -> Lead {
        let now = Local::now();
        Lead {
            id: id.to_string(),
            name: id.to_string(),
            company: "Globex".to_string(),
            email: format!("{}@globex.test", id),
            phone: "555-0101".to_string(),
            value: 5_000,
            status,
            priority: Priority::Low,
            assigned_to: "Marcus Webb".to_string(),
            assigned_to_avatar: "MW".to_string(),
            notes: None,
            created_at: now,
            last_activity: now,
        }
    }

    fn column(stage: Stage, x: u16) -> HitRegion {
        HitRegion {
            target: DropTarget::Column(stage),
            rect: Rect::new(x, 0, 20, 40),
        }
    }

    fn card(id: &str, x: u16, y: u16) -> HitRegion {
        HitRegion {
            target: DropTarget::Card(id.to_string()),
            rect: Rect::new(x, y, 18, 6),
        }
    }

    #[test]
    fn closest_region_prefers_overlapping_rect() {
        let regions = vec![column(Stage::New, 0), column(Stage::Contacted, 20)];
        let dragged = Rect::new(21, 4, 18, 6);
        let hit = closest_region(dragged, &regions).unwrap();
        assert_eq!(hit.target, DropTarget::Column(Stage::Contacted));
    }

    #[test]
    fn closest_region_tie_breaks_to_first() {
        // Two identical rects: the earlier region wins.
        let regions = vec![column(Stage::New, 0), column(Stage::Contacted, 0)];
        let hit = closest_region(Rect::new(0, 0, 20, 40), &regions).unwrap();
        assert_eq!(hit.target, DropTarget::Column(Stage::New));
    }

    #[test]
    fn closest_region_empty_is_none() {
        assert!(closest_region(Rect::new(0, 0, 5, 5), &[]).is_none());
    }

    #[test]
    fn card_beats_enclosing_column_when_dropped_on_it() {
        // A card sits inside its column; a drop right on the card resolves
        // to the card, whose corners are far nearer than the tall column's.
        let regions = vec![column(Stage::Contacted, 20), card("L2", 21, 4)];
        let dragged = Rect::new(21, 5, 18, 6);
        let hit = closest_region(dragged, &regions).unwrap();
        assert_eq!(hit.target, DropTarget::Card("L2".to_string()));
    }

    #[test]
    fn drop_on_column_moves_lead() {
        let mut board = BoardState::new(vec![lead("L1", Stage::New)]);
        let viewport = Rect::new(0, 0, 120, 50);

        let mut drag = DragState::default();
        drag.begin("L1".to_string(), Pointer::new(2, 4), Rect::new(1, 3, 18, 6));
        assert!(drag.update(Pointer::new(45, 10)));

        let (lead_id, dragged) = drag.finish(viewport).unwrap();
        let regions = vec![column(Stage::New, 0), column(Stage::Qualified, 40)];
        let hit = closest_region(dragged, &regions).unwrap();
        let stage = target_stage(hit, &board).unwrap();
        board.move_lead(&lead_id, stage);

        assert_eq!(board.lead("L1").unwrap().status, Stage::Qualified);
        assert!(board.leads_in_stage(Stage::New).is_empty());
        assert_eq!(board.leads_in_stage(Stage::Qualified).len(), 1);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drop_on_card_inherits_its_stage() {
        let mut board = BoardState::new(vec![
            lead("L1", Stage::New),
            lead("L2", Stage::Contacted),
        ]);
        let regions = vec![column(Stage::Contacted, 20), card("L2", 21, 10)];

        let dragged = Rect::new(22, 11, 18, 6);
        let hit = closest_region(dragged, &regions).unwrap();
        let stage = target_stage(hit, &board).unwrap();
        board.move_lead("L1", stage);

        assert_eq!(board.lead("L1").unwrap().status, Stage::Contacted);
    }

    #[test]
    fn drop_without_target_changes_nothing() {
        let mut board = BoardState::new(vec![lead("L1", Stage::New)]);
        let mut drag = DragState::default();
        drag.begin("L1".to_string(), Pointer::new(2, 4), Rect::new(1, 3, 18, 6));
        drag.update(Pointer::new(110, 45));

        // Gesture ends outside any droppable region.
        let (lead_id, dragged) = drag.finish(Rect::new(0, 0, 120, 50)).unwrap();
        if let Some(hit) = closest_region(dragged, &[]) {
            if let Some(stage) = target_stage(hit, &board) {
                board.move_lead(&lead_id, stage);
            }
        }

        assert_eq!(board.lead("L1").unwrap().status, Stage::New);
    }

    #[test]
    fn begin_is_ignored_while_dragging() {
        let mut drag = DragState::default();
        drag.begin("L1".to_string(), Pointer::new(2, 4), Rect::new(1, 3, 18, 6));
        drag.begin("L2".to_string(), Pointer::new(8, 9), Rect::new(7, 8, 18, 6));
        assert_eq!(drag.active_lead(), Some("L1"));
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut drag = DragState::default();
        drag.begin("L1".to_string(), Pointer::new(2, 4), Rect::new(1, 3, 18, 6));
        drag.cancel();
        assert!(!drag.is_dragging());
        assert!(drag.finish(Rect::new(0, 0, 80, 24)).is_none());
    }

    #[test]
    fn ghost_stays_inside_viewport() {
        let mut drag = DragState::default();
        drag.begin("L1".to_string(), Pointer::new(2, 4), Rect::new(1, 3, 18, 6));
        drag.update(Pointer::new(79, 23));
        let ghost = drag.ghost_rect(Rect::new(0, 0, 80, 24)).unwrap();
        assert!(ghost.right() <= 80);
        assert!(ghost.bottom() <= 24);
    }
}
