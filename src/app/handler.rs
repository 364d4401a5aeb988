use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, ViewMode};
use crate::board::drag::{closest_region, target_stage, Pointer};
use crate::board::Stage;
use crate::ui::{board, layout};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.expire_status() {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Esc => {
            state.drag.cancel();
            vec![]
        }
        KeyCode::Char('v') => {
            state.toggle_view();
            vec![]
        }
        KeyCode::Left => {
            state.move_selection(-1, 0);
            vec![]
        }
        KeyCode::Right => {
            state.move_selection(1, 0);
            vec![]
        }
        KeyCode::Up => {
            state.move_selection(0, -1);
            vec![]
        }
        KeyCode::Down => {
            state.move_selection(0, 1);
            vec![]
        }
        KeyCode::Char('[') => move_selected(state, -1),
        KeyCode::Char(']') => move_selected(state, 1),
        KeyCode::Char('x') => match state.selected_lead() {
            Some(lead) => vec![Action::MoveLead {
                lead_id: lead.id.clone(),
                to: Stage::Lost,
            }],
            None => vec![],
        },
        _ => vec![],
    }
}

/// Move the selected lead one board column left or right.
fn move_selected(state: &mut AppState, delta: isize) -> Vec<Action> {
    let Some(lead) = state.selected_lead() else {
        return vec![];
    };
    let Some(index) = lead.status.board_index() else {
        return vec![];
    };
    let max = Stage::BOARD.len() as isize - 1;
    let target = (index as isize + delta).clamp(0, max) as usize;
    if target == index {
        return vec![];
    }
    vec![Action::MoveLead {
        lead_id: lead.id.clone(),
        to: Stage::BOARD[target],
    }]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if state.view != ViewMode::Kanban {
        return vec![];
    }
    let pointer = Pointer::new(mouse.column, mouse.row);
    let board_area = layout::compute_layout(state.viewport).board;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let geometry = board::board_geometry(board_area, &state.board, &state.column_scroll);
            if let Some(card) = geometry.card_at(pointer) {
                let id = card.id.clone();
                let rect = card.rect;
                state.select_lead(&id);
                state.drag.begin(id, pointer, rect);
            }
            vec![]
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            state.drag.update(pointer);
            vec![]
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some((lead_id, dragged)) = state.drag.finish(state.viewport) else {
                return vec![];
            };
            let geometry = board::board_geometry(board_area, &state.board, &state.column_scroll);
            // Releasing outside the board discards the drop.
            if !dragged.intersects(geometry.area) {
                return vec![];
            }
            let regions = geometry.regions();
            let Some(hit) = closest_region(dragged, &regions) else {
                return vec![];
            };
            match target_stage(hit, &state.board) {
                Some(to) => vec![Action::MoveLead { lead_id, to }],
                None => vec![],
            }
        }
        MouseEventKind::ScrollUp => {
            let geometry = board::board_geometry(board_area, &state.board, &state.column_scroll);
            if let Some(column) = geometry.column_at(pointer) {
                state.scroll_column(column, -1);
            }
            vec![]
        }
        MouseEventKind::ScrollDown => {
            let geometry = board::board_geometry(board_area, &state.board, &state.column_scroll);
            if let Some(column) = geometry.column_at(pointer) {
                state.scroll_column(column, 1);
            }
            vec![]
        }
        _ => vec![],
    }
}
