use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub metrics: Rect,
    pub board: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(5), // Metric cards
            Constraint::Min(10),   // Kanban board
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        metrics: chunks[1],
        board: chunks[2],
        status_bar: chunks[3],
    }
}
