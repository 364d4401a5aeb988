use ratatui::layout::Rect;

use crate::board::drag::DragState;
use crate::board::{BoardState, Lead, Metric, Stage};
use crate::config::AppConfig;

/// How long a transient status message stays up, in ticks (20 ticks/s).
const STATUS_TICKS: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Kanban,
    List,
}

/// Keyboard cursor on the board: a column index into [`Stage::BOARD`] and a
/// row within that column's derived card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub column: usize,
    pub row: usize,
}

pub struct AppState {
    pub config: AppConfig,
    pub board: BoardState,
    pub metrics: Vec<Metric>,
    pub drag: DragState,
    pub view: ViewMode,
    pub selection: Option<Selection>,
    /// Per-column scroll offset, indexed like [`Stage::BOARD`].
    pub column_scroll: [usize; Stage::BOARD.len()],
    /// Last known terminal size; geometry for hit-testing derives from it.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    status_ticks: u8,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig, board: BoardState, metrics: Vec<Metric>) -> Self {
        Self {
            config,
            board,
            metrics,
            drag: DragState::default(),
            view: ViewMode::Kanban,
            selection: None,
            column_scroll: [0; Stage::BOARD.len()],
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
            status_message: None,
            status_ticks: 0,
            tick_count: 0,
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_ticks = STATUS_TICKS;
        self.dirty = true;
    }

    /// Count down the transient status message; returns true when it just
    /// expired and the bar needs a repaint.
    pub fn expire_status(&mut self) -> bool {
        if self.status_ticks == 0 {
            return false;
        }
        self.status_ticks -= 1;
        if self.status_ticks == 0 {
            self.status_message = None;
            return true;
        }
        false
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let mut s = format!(
            "{} leads | pipeline {}{}",
            self.board.len(),
            self.config.ui.currency_symbol,
            crate::ui::format_value(self.board.pipeline_value()),
        );
        let won = self.board.won_count();
        let lost = self.board.lost_count();
        if won > 0 || lost > 0 {
            s.push_str(&format!(" | won {} / lost {}", won, lost));
        }
        s
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            ViewMode::Kanban => ViewMode::List,
            ViewMode::List => ViewMode::Kanban,
        };
        self.dirty = true;
    }

    /// Lead under the keyboard cursor, if the selected column has a card at
    /// the selected row.
    pub fn selected_lead(&self) -> Option<&Lead> {
        let sel = self.selection?;
        let stage = *Stage::BOARD.get(sel.column)?;
        self.board.leads_in_stage(stage).get(sel.row).copied()
    }

    /// Move the cursor by whole columns/rows, clamping to the board.
    pub fn move_selection(&mut self, d_column: isize, d_row: isize) {
        let max_col = Stage::BOARD.len() as isize - 1;
        let sel = self.selection.unwrap_or(Selection { column: 0, row: 0 });
        let column = (sel.column as isize + d_column).clamp(0, max_col) as usize;
        let in_column = self.board.stage_count(Stage::BOARD[column]);
        let max_row = in_column.saturating_sub(1) as isize;
        let row = if self.selection.is_some() {
            (sel.row as isize + d_row).clamp(0, max_row) as usize
        } else {
            0
        };
        self.selection = Some(Selection { column, row });
        self.dirty = true;
    }

    /// Point the cursor at a specific lead (mouse press follows selection).
    pub fn select_lead(&mut self, lead_id: &str) {
        let Some(lead) = self.board.lead(lead_id) else {
            return;
        };
        let Some(column) = lead.status.board_index() else {
            return;
        };
        let row = self
            .board
            .leads_in_stage(lead.status)
            .iter()
            .position(|l| l.id == lead_id);
        if let Some(row) = row {
            self.selection = Some(Selection { column, row });
            self.dirty = true;
        }
    }

    /// Re-clamp the cursor after a move emptied or shortened its column.
    pub fn clamp_selection(&mut self) {
        if let Some(sel) = self.selection {
            let count = self.board.stage_count(Stage::BOARD[sel.column]);
            let row = sel.row.min(count.saturating_sub(1));
            self.selection = Some(Selection {
                column: sel.column,
                row,
            });
        }
    }

    pub fn scroll_column(&mut self, column: usize, delta: isize) {
        let Some(stage) = Stage::BOARD.get(column).copied() else {
            return;
        };
        let count = self.board.stage_count(stage);
        let cur = self.column_scroll[column] as isize;
        self.column_scroll[column] =
            (cur + delta).clamp(0, count.saturating_sub(1) as isize) as usize;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn state() -> AppState {
        AppState::new(
            AppConfig::default(),
            BoardState::new(data::sample_leads()),
            data::sample_metrics(),
        )
    }

    #[test]
    fn selection_clamps_to_board_edges() {
        let mut s = state();
        s.move_selection(-3, 0);
        assert_eq!(s.selection, Some(Selection { column: 0, row: 0 }));
        s.move_selection(100, 0);
        assert_eq!(
            s.selection.unwrap().column,
            Stage::BOARD.len() - 1,
        );
    }

    #[test]
    fn selected_lead_follows_cursor() {
        let mut s = state();
        s.move_selection(0, 0);
        let first_new = s.board.leads_in_stage(Stage::New)[0].id.clone();
        assert_eq!(s.selected_lead().unwrap().id, first_new);

        s.move_selection(0, 1);
        let second_new = s.board.leads_in_stage(Stage::New)[1].id.clone();
        assert_eq!(s.selected_lead().unwrap().id, second_new);
    }

    #[test]
    fn select_lead_points_cursor_at_it() {
        let mut s = state();
        s.select_lead("lead-7");
        let sel = s.selection.unwrap();
        assert_eq!(Stage::BOARD[sel.column], Stage::Qualified);
        assert_eq!(s.selected_lead().unwrap().id, "lead-7");
    }

    #[test]
    fn status_message_expires_after_countdown() {
        let mut s = state();
        s.set_status("moved".to_string());
        assert_eq!(s.status_line(), "moved");
        for _ in 0..200 {
            s.expire_status();
        }
        assert!(s.status_message.is_none());
        assert!(s.status_line().contains("leads"));
    }

    #[test]
    fn scroll_is_clamped_to_column_size() {
        let mut s = state();
        s.scroll_column(0, -5);
        assert_eq!(s.column_scroll[0], 0);
        s.scroll_column(0, 100);
        let count = s.board.stage_count(Stage::New);
        assert_eq!(s.column_scroll[0], count - 1);
    }
}
